//! Learned merges, in the order they were minted.

use serde::Serialize;

use crate::pairs::Pair;

/// One minted id and the pair it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VocabEntry {
    pub id: u32,
    pub pair: Pair,
}

/// Minted id -> replaced pair, oldest first. Ids are strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly minted id. Ids arrive in increasing order.
    pub(crate) fn push(&mut self, id: u32, pair: Pair) {
        debug_assert!(self.entries.last().map_or(true, |last| last.id < id));
        self.entries.push(VocabEntry { id, pair });
    }

    /// The pair that `id` stands for, if `id` was minted.
    pub fn get(&self, id: u32) -> Option<Pair> {
        self.entries
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|idx| self.entries[idx].pair)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Id minted for `pair`, if any round merged it.
    pub fn id_of(&self, pair: Pair) -> Option<u32> {
        self.entries.iter().find(|e| e.pair == pair).map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&VocabEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabEntry> {
        self.entries.iter()
    }

    /// Entries as `(id, pair)` tuples.
    pub fn to_vec(&self) -> Vec<(u32, Pair)> {
        self.entries.iter().map(|e| (e.id, e.pair)).collect()
    }
}
