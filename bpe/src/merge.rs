use crate::pairs::Pair;

/// Replaces every occurrence of `pair` in `ids` with `new_id`.
///
/// Single left-to-right pass: a match consumes both positions, so
/// overlapping occurrences (`a,a,a` for `(a,a)`) merge only once.
pub fn merge(ids: &[u32], pair: Pair, new_id: u32) -> Vec<u32> {
    let mut merged = Vec::with_capacity(ids.len());
    let mut i = 0;
    while i < ids.len() {
        if i + 1 < ids.len() && ids[i] == pair.0 && ids[i + 1] == pair.1 {
            merged.push(new_id);
            i += 2;
        } else {
            merged.push(ids[i]);
            i += 1;
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_all_occurrences() {
        let ids = [1, 2, 3, 1, 2];
        assert_eq!(merge(&ids, (1, 2), 256), vec![256, 3, 256]);
    }

    #[test]
    fn test_merge_does_not_overlap() {
        assert_eq!(merge(&[97, 97, 97], (97, 97), 256), vec![256, 97]);
        assert_eq!(merge(&[97, 97, 97, 97], (97, 97), 256), vec![256, 256]);
    }

    #[test]
    fn test_merge_is_single_pass() {
        // The new id is never re-examined within the same pass.
        assert_eq!(merge(&[97, 97, 98], (97, 97), 256), vec![256, 98]);
        assert_eq!(merge(&[97, 97, 98], (97, 98), 256), vec![97, 256]);
    }

    #[test]
    fn test_merge_leaves_input_alone() {
        let ids = vec![5, 6, 5, 6];
        let merged = merge(&ids, (5, 6), 300);
        assert_eq!(ids, vec![5, 6, 5, 6]);
        assert_eq!(merged, vec![300, 300]);
    }

    #[test]
    fn test_merge_no_match() {
        assert_eq!(merge(&[1, 2, 3], (3, 1), 256), vec![1, 2, 3]);
        assert!(merge(&[], (1, 2), 256).is_empty());
        assert_eq!(merge(&[1], (1, 1), 256), vec![1]);
    }

    #[test]
    fn test_merge_pair_at_end() {
        assert_eq!(merge(&[4, 1, 2], (1, 2), 256), vec![4, 256]);
    }
}
