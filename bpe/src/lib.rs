//! Iterative byte-pair merging over a single text.
//!
//! Text is turned into base symbol ids, then each round finds the most
//! frequent adjacent pair and replaces it everywhere with a fresh id. The
//! run reports the compressed ids, the learned merges and whether every
//! requested round could run.
//!
//! ```rust
//! let outcome = pairmerge::encode("aaab", 2).unwrap();
//! assert_eq!(outcome.ids, vec![257, 98]);
//! assert!(!outcome.exhausted());
//! ```

pub mod bpe;
pub mod error;
pub mod merge;
pub mod pairs;
pub mod symbols;
pub mod vocab;

pub use bpe::{
    encode, MergeConfig, MergeOutcome, MergeRecord, MergeSession, MergeStatus, Merger,
    DEFAULT_FIRST_ID,
};
pub use error::{BpeError, Result};
pub use merge::merge;
pub use pairs::{adjacent_pairs, count_pairs, Pair, PairRanking};
pub use symbols::{read_text, symbolize, Symbolizer};
pub use vocab::{VocabEntry, Vocabulary};

#[cfg(feature = "python")]
mod python {
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    use crate::{BpeError, MergeConfig, Merger, Pair, Symbolizer};

    fn to_py_err(err: BpeError) -> PyErr {
        match err {
            BpeError::InvalidMergeBudget(_) => PyValueError::new_err(err.to_string()),
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }

    /// Returns `(ids, merges, rounds_completed, exhausted)`.
    #[pyfunction]
    #[pyo3(name = "encode")]
    #[pyo3(signature = (text, num_merges, use_bytes = false, progress = false))]
    fn encode_py(
        py: Python<'_>,
        text: &str,
        num_merges: i64,
        use_bytes: bool,
        progress: bool,
    ) -> PyResult<(Vec<u32>, Vec<(u32, Pair)>, usize, bool)> {
        let symbolizer = if use_bytes {
            Symbolizer::Bytes
        } else {
            Symbolizer::CodePoints
        };
        let config = MergeConfig::new(num_merges)
            .map_err(to_py_err)?
            .with_symbolizer(symbolizer)
            .with_progress(progress);

        let outcome = py
            .allow_threads(|| Merger::new(config).run(text))
            .map_err(to_py_err)?;

        let merges = outcome.vocab.to_vec();
        let exhausted = outcome.exhausted();
        Ok((outcome.ids, merges, outcome.rounds_completed, exhausted))
    }

    #[pymodule]
    fn pairmerge(m: &Bound<'_, PyModule>) -> PyResult<()> {
        pyo3_log::init();
        m.add_function(wrap_pyfunction!(encode_py, m)?)?;
        Ok(())
    }
}
