pub mod assembler;
pub mod differ;
pub mod layout;
pub mod numfmt;
pub mod pacing;
pub mod ranking;
pub mod report;
pub mod resolver;

pub use assembler::{CycleSummary, ReportAssembler, SubReportError};
pub use differ::{diff, AlignmentError, ComparisonRow};
pub use numfmt::{format_delta, format_with_separators, parse_display_int};
pub use report::{ReportBlock, ReportSection};
pub use resolver::{EventStanding, GuildCandidate, GuildResolver, Resolution, ResolveError};
