use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::error::{BpeError, Result};
use crate::merge::merge;
use crate::pairs::{count_pairs, Pair};
use crate::symbols::Symbolizer;
use crate::vocab::Vocabulary;

/// First id handed to a merged symbol; everything below is a base symbol.
pub const DEFAULT_FIRST_ID: u32 = 256;

/// Settings for one merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    /// Number of merge rounds to attempt.
    pub num_merges: usize,
    pub first_id: u32,
    pub symbolizer: Symbolizer,
    /// Draw a progress bar over the round budget.
    pub progress: bool,
}

impl MergeConfig {
    /// Rejects a negative budget before anything runs.
    pub fn new(num_merges: i64) -> Result<Self> {
        let num_merges =
            usize::try_from(num_merges).map_err(|_| BpeError::InvalidMergeBudget(num_merges))?;
        Ok(Self {
            num_merges,
            first_id: DEFAULT_FIRST_ID,
            symbolizer: Symbolizer::default(),
            progress: false,
        })
    }

    pub fn with_first_id(mut self, first_id: u32) -> Self {
        self.first_id = first_id;
        self
    }

    pub fn with_symbolizer(mut self, symbolizer: Symbolizer) -> Self {
        self.symbolizer = symbolizer;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStatus {
    /// Every requested round ran.
    Completed,
    /// No adjacent pair was left before the budget ran out.
    Exhausted,
    /// The caller stopped the run between rounds.
    Stopped,
}

/// What a single round did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeRecord {
    /// 1-based round number.
    pub round: usize,
    pub id: u32,
    pub pair: Pair,
    /// How often `pair` occurred before the merge.
    pub count: u64,
    /// Sequence length after the merge.
    pub len: usize,
}

/// Result of a merge run. Exhaustion is reported here, not as an error.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    pub ids: Vec<u32>,
    pub vocab: Vocabulary,
    pub rounds_completed: usize,
    pub requested: usize,
    /// Number of base symbols the run started from.
    pub input_len: usize,
    pub first_id: u32,
    pub status: MergeStatus,
}

impl MergeOutcome {
    pub fn exhausted(&self) -> bool {
        self.status == MergeStatus::Exhausted
    }

    pub fn is_complete(&self) -> bool {
        self.status == MergeStatus::Completed
    }

    /// Base alphabet plus every minted id.
    pub fn vocab_size(&self) -> usize {
        self.first_id as usize + self.rounds_completed
    }

    /// Input symbols per output symbol; 0.0 when the output is empty.
    pub fn compression_ratio(&self) -> f64 {
        if self.ids.is_empty() {
            0.0
        } else {
            self.input_len as f64 / self.ids.len() as f64
        }
    }

    /// Turns a partial run into an error for callers that need every round.
    pub fn into_complete(self) -> Result<Self> {
        match self.status {
            MergeStatus::Completed => Ok(self),
            MergeStatus::Exhausted => Err(BpeError::ExhaustedPairs {
                completed: self.rounds_completed,
                requested: self.requested,
            }),
            MergeStatus::Stopped => Err(BpeError::Interrupted {
                completed: self.rounds_completed,
                requested: self.requested,
            }),
        }
    }
}

/// State of one run: working sequence, learned merges and the id counter.
///
/// Sessions never share state, so independent texts can be merged side by
/// side by giving each its own session.
#[derive(Debug, Clone)]
pub struct MergeSession {
    ids: Vec<u32>,
    vocab: Vocabulary,
    next_id: u32,
    first_id: u32,
    requested: usize,
    input_len: usize,
    exhausted: bool,
}

impl MergeSession {
    pub fn new(ids: Vec<u32>, first_id: u32, requested: usize) -> Self {
        Self {
            input_len: ids.len(),
            ids,
            vocab: Vocabulary::new(),
            next_id: first_id,
            first_id,
            requested,
            exhausted: false,
        }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Id the next round will mint.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn rounds_completed(&self) -> usize {
        self.vocab.len()
    }

    /// Rounds left in the budget.
    pub fn remaining(&self) -> usize {
        self.requested.saturating_sub(self.rounds_completed())
    }

    /// Runs one round. `None` means no adjacent pair is left.
    ///
    /// The budget is not checked here; see [`MergeSession::remaining`].
    pub fn step(&mut self) -> Result<Option<MergeRecord>> {
        let ranking = count_pairs(&self.ids);
        let Some((pair, count)) = ranking.top() else {
            self.exhausted = true;
            return Ok(None);
        };

        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or(BpeError::IdOverflow { next_id: id })?;

        self.ids = merge(&self.ids, pair, id);
        self.vocab.push(id, pair);

        let record = MergeRecord {
            round: self.vocab.len(),
            id,
            pair,
            count,
            len: self.ids.len(),
        };
        log::debug!(
            "merge {}: {:?} x{} -> {} ({} symbols left)",
            record.round,
            pair,
            count,
            id,
            record.len
        );
        Ok(Some(record))
    }

    pub fn finish(self) -> MergeOutcome {
        let rounds_completed = self.rounds_completed();
        let status = if rounds_completed >= self.requested {
            MergeStatus::Completed
        } else if self.exhausted {
            MergeStatus::Exhausted
        } else {
            MergeStatus::Stopped
        };

        MergeOutcome {
            ids: self.ids,
            vocab: self.vocab,
            rounds_completed,
            requested: self.requested,
            input_len: self.input_len,
            first_id: self.first_id,
            status,
        }
    }
}

/// Drives merge rounds over a text according to a [`MergeConfig`].
#[derive(Debug, Clone)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Symbolizes `text` and opens a session over it.
    pub fn session(&self, text: &str) -> MergeSession {
        self.session_from_ids(self.config.symbolizer.symbolize(text))
    }

    pub fn session_from_ids(&self, ids: Vec<u32>) -> MergeSession {
        MergeSession::new(ids, self.config.first_id, self.config.num_merges)
    }

    pub fn run(&self, text: &str) -> Result<MergeOutcome> {
        self.drive(self.session(text), |_| true)
    }

    /// Runs over an already symbolized sequence.
    pub fn run_ids(&self, ids: Vec<u32>) -> Result<MergeOutcome> {
        self.drive(self.session_from_ids(ids), |_| true)
    }

    /// Like [`Merger::run`], but asks `keep_going` after every round and
    /// stops as soon as it returns false.
    pub fn run_while<F>(&self, text: &str, keep_going: F) -> Result<MergeOutcome>
    where
        F: FnMut(&MergeRecord) -> bool,
    {
        self.drive(self.session(text), keep_going)
    }

    fn drive<F>(&self, mut session: MergeSession, mut keep_going: F) -> Result<MergeOutcome>
    where
        F: FnMut(&MergeRecord) -> bool,
    {
        let pb = if self.config.progress {
            Some(progress_bar(self.config.num_merges))
        } else {
            None
        };

        while session.remaining() > 0 {
            let Some(record) = session.step()? else {
                break;
            };
            if let Some(ref pb) = pb {
                pb.inc(1);
            }
            if !keep_going(&record) {
                break;
            }
        }

        let outcome = session.finish();

        if let Some(ref pb) = pb {
            pb.finish_with_message("merges done");
        }

        match outcome.status {
            MergeStatus::Completed => log::info!(
                "completed {} merges: {} -> {} symbols",
                outcome.rounds_completed,
                outcome.input_len,
                outcome.ids.len()
            ),
            MergeStatus::Exhausted => log::warn!(
                "no pairs left after {} of {} merges ({} symbols)",
                outcome.rounds_completed,
                outcome.requested,
                outcome.ids.len()
            ),
            MergeStatus::Stopped => log::info!(
                "stopped after {} of {} merges",
                outcome.rounds_completed,
                outcome.requested
            ),
        }

        Ok(outcome)
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{msg} {bar:40.cyan/blue} {pos:>7}/{len:7} [{elapsed_precise}]",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("##-");
    pb.set_style(style);
    pb.set_message("BPE merges");
    pb
}

/// Merges `text` with the default settings.
pub fn encode(text: &str, num_merges: i64) -> Result<MergeOutcome> {
    Merger::new(MergeConfig::new(num_merges)?).run(text)
}
