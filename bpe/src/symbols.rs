use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{BpeError, Result};

/// How raw text is cut into base symbols before the first merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbolizer {
    /// One symbol per Unicode code point.
    #[default]
    CodePoints,
    /// One symbol per UTF-8 byte, so every base id is below 256.
    Bytes,
}

impl Symbolizer {
    pub fn symbolize(self, text: &str) -> Vec<u32> {
        match self {
            Symbolizer::CodePoints => symbolize(text),
            Symbolizer::Bytes => text.bytes().map(u32::from).collect(),
        }
    }
}

/// Maps every character of `text` to its code point, keeping order and length.
pub fn symbolize(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// Reads a whole text file into memory.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| BpeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
