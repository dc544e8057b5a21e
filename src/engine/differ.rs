// * Round Aligner & Differ
// * Pairs our rounds with the opponent's by (event, date) and subtracts each metric.

use std::collections::HashMap;
use thiserror::Error;

use crate::config::constants::{DATE_COLUMN_WIDTH, METRIC_COLUMN_WIDTH};
use crate::engine::layout::TextTable;
use crate::engine::numfmt::{format_delta, parse_display_int};
use crate::refinery::RoundRecord;

const ROUND_TABLE_WIDTHS: [usize; 4] = [
    DATE_COLUMN_WIDTH,
    METRIC_COLUMN_WIDTH,
    METRIC_COLUMN_WIDTH,
    METRIC_COLUMN_WIDTH,
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("own history has {own_len} rounds, opponent only {opponent_len}")]
    LengthMismatch { own_len: usize, opponent_len: usize },

    #[error("round {date} of GW {event_number} is missing from the opponent history")]
    MisalignedRound { event_number: String, date: String },

    #[error("{field} '{value}' on {date} is not a number")]
    InvalidNumber {
        field: &'static str,
        value: String,
        date: String,
    },

    #[error("{field} difference on {date} does not fit in 64 bits")]
    Overflow { field: &'static str, date: String },
}

/// Signed differences for one round, ours minus theirs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub date: String,
    pub rank_delta: i64,
    pub daily_honor_delta: i64,
    pub cumulative_honor_delta: i64,
}

impl ComparisonRow {
    pub fn formatted(&self) -> [String; 4] {
        [
            self.date.clone(),
            format_delta(self.rank_delta),
            format_delta(self.daily_honor_delta),
            format_delta(self.cumulative_honor_delta),
        ]
    }
}

fn metric(field: &'static str, value: &str, date: &str) -> Result<i64, AlignmentError> {
    parse_display_int(value).ok_or_else(|| AlignmentError::InvalidNumber {
        field,
        value: value.to_string(),
        date: date.to_string(),
    })
}

fn delta(
    field: &'static str,
    own: &str,
    theirs: &str,
    date: &str,
) -> Result<i64, AlignmentError> {
    metric(field, own, date)?
        .checked_sub(metric(field, theirs, date)?)
        .ok_or_else(|| AlignmentError::Overflow {
            field,
            date: date.to_string(),
        })
}

/// One comparison row per own round, in own order.
/// Opponent rounds we have no counterpart for are ignored.
pub fn diff(
    own: &[RoundRecord],
    opponent: &[RoundRecord],
) -> Result<Vec<ComparisonRow>, AlignmentError> {
    if own.len() > opponent.len() {
        return Err(AlignmentError::LengthMismatch {
            own_len: own.len(),
            opponent_len: opponent.len(),
        });
    }

    let mut by_round: HashMap<(&str, &str), &RoundRecord> = HashMap::with_capacity(opponent.len());
    for record in opponent {
        by_round.entry(record.round_key()).or_insert(record);
    }

    own.iter()
        .map(|ours| {
            let theirs = by_round.get(&ours.round_key()).ok_or_else(|| {
                AlignmentError::MisalignedRound {
                    event_number: ours.event_number.clone(),
                    date: ours.date.clone(),
                }
            })?;

            let date = ours.date.as_str();
            Ok(ComparisonRow {
                date: ours.date.clone(),
                rank_delta: delta("rank", &ours.rank, &theirs.rank, date)?,
                daily_honor_delta: delta(
                    "daily honor",
                    &ours.daily_honor,
                    &theirs.daily_honor,
                    date,
                )?,
                cumulative_honor_delta: delta(
                    "cumulative honor",
                    &ours.cumulative_honor,
                    &theirs.cumulative_honor,
                    date,
                )?,
            })
        })
        .collect()
}

pub fn render_round_history(rounds: &[RoundRecord]) -> String {
    let mut table = TextTable::new(&ROUND_TABLE_WIDTHS);
    table.row(&["Date", "Rank", "Daily honor", "Total honor"]);
    for round in rounds {
        table.row(&[
            round.date.as_str(),
            round.rank.as_str(),
            round.daily_honor.as_str(),
            round.cumulative_honor.as_str(),
        ]);
    }
    table.render()
}

pub fn render_comparison(rows: &[ComparisonRow]) -> String {
    let mut table = TextTable::new(&ROUND_TABLE_WIDTHS);
    table.row(&["Date", "Rank", "Daily honor", "Total honor"]);
    for row in rows {
        table.row(&row.formatted());
    }
    table.render()
}
