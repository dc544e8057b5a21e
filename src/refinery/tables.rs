// * Fixed-layout table extraction for crew pages.
// * Round history: tbody rows of [event, date, rank, daily honor, total honor], newest event first.
// * Member roster: tbody rows of [name, server rank, event rank, honor], each followed by a spacer row.

use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

use super::path::SelectorPath;
use super::ExtractionError;

pub const ROUND_HISTORY_TABLE: &str = "round history";
pub const MEMBER_ROSTER_TABLE: &str = "member roster";

const ROUND_CELLS: usize = 5;
const MEMBER_CELLS: usize = 4;

static ROUND_HISTORY_PATH: LazyLock<SelectorPath> = LazyLock::new(|| {
    SelectorPath::parse(ROUND_HISTORY_TABLE, &["#gw-history", "table", "tbody"])
        .expect("Invalid round history path")
});
static MEMBER_ROSTER_PATH: LazyLock<SelectorPath> = LazyLock::new(|| {
    SelectorPath::parse(MEMBER_ROSTER_TABLE, &["#crew-members", "table", "tbody"])
        .expect("Invalid member roster path")
});
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// One scoring round of a crew, kept as source display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// Round-group cell shared by every row of the same event
    pub event_number: String,
    pub date: String,
    pub rank: String,
    pub daily_honor: String,
    pub cumulative_honor: String,
}

impl RoundRecord {
    /// Key used to pair rounds of two crews
    pub fn round_key(&self) -> (&str, &str) {
        (&self.event_number, &self.date)
    }
}

/// A crew member's standing in the current event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberStanding {
    pub name: String,
    pub server_rank: String,
    /// Numeric rank or the "No data." marker
    pub event_rank: String,
    pub total_honor: String,
}

type RowIter<'a> = Box<dyn Iterator<Item = ElementRef<'a>> + 'a>;

fn child_rows<'a>(tbody: ElementRef<'a>) -> RowIter<'a> {
    Box::new(
        tbody
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "tr"),
    )
}

fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .map(|cell| {
            let text: String = cell.text().collect();
            WHITESPACE.replace_all(text.trim(), " ").into_owned()
        })
        .collect()
}

/// Lazy round-history rows. Ends at the first row of a different event,
/// or right after yielding an error.
pub struct RoundRows<'a> {
    rows: RowIter<'a>,
    sentinel: Option<String>,
    index: usize,
    done: bool,
}

impl<'a> Iterator for RoundRows<'a> {
    type Item = Result<RoundRecord, ExtractionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let sentinel = self.sentinel.as_deref()?;

        let Some(row) = self.rows.next() else {
            self.done = true;
            return None;
        };
        self.index += 1;

        let mut cells = cell_texts(row);
        if cells.first().map(String::as_str) != Some(sentinel) {
            // * The page lists older events below the current one
            self.done = true;
            return None;
        }

        if cells.len() < ROUND_CELLS {
            self.done = true;
            return Some(Err(ExtractionError::MissingCells {
                table: ROUND_HISTORY_TABLE,
                row: self.index,
                found: cells.len(),
                expected: ROUND_CELLS,
            }));
        }

        cells.truncate(ROUND_CELLS);
        let mut cells = cells.into_iter();
        let mut take = || cells.next().unwrap_or_default();
        Some(Ok(RoundRecord {
            event_number: take(),
            date: take(),
            rank: take(),
            daily_honor: take(),
            cumulative_honor: take(),
        }))
    }
}

/// Lazy member rows, consumed as (row, spacer) pairs
pub struct MemberRows<'a> {
    rows: RowIter<'a>,
    index: usize,
    done: bool,
}

impl<'a> Iterator for MemberRows<'a> {
    type Item = Result<MemberStanding, ExtractionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(row) = self.rows.next() else {
            self.done = true;
            return None;
        };
        // * Spacer row; the roster may end without one
        let _ = self.rows.next();
        self.index += 1;

        let cells = cell_texts(row);
        if cells.len() < MEMBER_CELLS {
            self.done = true;
            return Some(Err(ExtractionError::MissingCells {
                table: MEMBER_ROSTER_TABLE,
                row: self.index,
                found: cells.len(),
                expected: MEMBER_CELLS,
            }));
        }

        let mut cells = cells.into_iter();
        let mut take = || cells.next().unwrap_or_default();
        Some(Ok(MemberStanding {
            name: take(),
            server_rank: take(),
            event_rank: take(),
            total_honor: take(),
        }))
    }
}

/// Locates the round history body and prepares the lazy row walk
pub fn round_rows(document: &Html) -> Result<RoundRows<'_>, ExtractionError> {
    let tbody = ROUND_HISTORY_PATH.resolve(document)?;
    let mut rows = child_rows(tbody);

    let first = rows.next();
    let sentinel = match first {
        Some(row) => {
            let cells = cell_texts(row);
            let cell = cells.into_iter().next().ok_or(ExtractionError::MissingCells {
                table: ROUND_HISTORY_TABLE,
                row: 1,
                found: 0,
                expected: ROUND_CELLS,
            })?;
            Some(cell)
        }
        None => None,
    };

    // * Put the first row back in front of the remaining ones
    let rows: RowIter<'_> = Box::new(first.into_iter().chain(rows));

    Ok(RoundRows {
        rows,
        sentinel,
        index: 0,
        done: false,
    })
}

/// Locates the member roster body and prepares the lazy row walk
pub fn member_rows(document: &Html) -> Result<MemberRows<'_>, ExtractionError> {
    let tbody = MEMBER_ROSTER_PATH.resolve(document)?;
    Ok(MemberRows {
        rows: child_rows(tbody),
        index: 0,
        done: false,
    })
}

/// Parses a fetched page and collects the current event's rounds
pub fn extract_round_history(html: &str) -> Result<Vec<RoundRecord>, ExtractionError> {
    let document = Html::parse_document(html);
    let rows = round_rows(&document)?;
    rows.collect()
}

/// Parses a fetched page and collects the member roster
pub fn extract_member_roster(html: &str) -> Result<Vec<MemberStanding>, ExtractionError> {
    let document = Html::parse_document(html);
    let rows = member_rows(&document)?;
    rows.collect()
}
