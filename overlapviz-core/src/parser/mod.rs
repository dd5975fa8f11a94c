use crate::consts::BOX_RECORD_TAG;

pub mod input;

pub use input::{parse_file, parse_line, parse_str};

/// What to do with a box record whose min corner lies above its max corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidBoxPolicy {
    /// Drop the record.
    #[default]
    Skip,
    /// Swap the inverted coordinates and keep the box.
    Repair,
}

#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Token expected at position 1 of a box record.
    pub tag: String,
    /// Fail on the first malformed record instead of skipping it.
    pub strict: bool,
    pub invalid_box: InvalidBoxPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            tag: BOX_RECORD_TAG.to_string(),
            strict: false,
            invalid_box: InvalidBoxPolicy::default(),
        }
    }
}
