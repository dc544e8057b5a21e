// * The Refinery: turns fetched crew pages into typed rows.

pub mod path;
pub mod tables;

pub use path::SelectorPath;
pub use tables::{
    extract_member_roster, extract_round_history, member_rows, round_rows, MemberRows,
    MemberStanding, RoundRecord, RoundRows,
};

use thiserror::Error;

/// The page no longer has the layout the extractor was written against
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("{table}: layout changed, step {step} ('{selector}') matched nothing")]
    MissingNode {
        table: &'static str,
        step: usize,
        selector: String,
    },

    #[error("{table}: row {row} has {found} cells, expected {expected}")]
    MissingCells {
        table: &'static str,
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}
