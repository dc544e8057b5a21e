// * Configuration Constants
// * Central location for endpoints, caps, layout widths and timeouts

// * Fuzzy crew search endpoint (POST, JSON body with a single "search" field)
pub const DEFAULT_SEARCH_URL: &str = "http://gbf.gw.lt/gw-guild-searcher/search";

// * Round history page for a crew. `{id}` is replaced by the crew identifier.
pub const DEFAULT_HISTORY_URL: &str = "http://gbf.gw.lt/gw-guild-searcher/guild/{id}";

// * Member roster page for a crew
pub const DEFAULT_MEMBERS_URL: &str = "http://gbf.gw.lt/gw-guild-searcher/guild/{id}/members";

// * In-game crew page linked from the report header
pub const DEFAULT_CREW_PAGE_URL: &str = "http://game.granbluefantasy.jp/#guild/detail/{id}";

// * Placeholder substituted by crew identifiers in URL templates
pub const ID_PLACEHOLDER: &str = "{id}";

// * Maximum number of candidates turned into report blocks
pub const MAX_CANDIDATES: usize = 5;

// * Delay between two emitted report blocks (downstream rate limit)
pub const DEFAULT_PACING_MS: u64 = 1_500;

// * Per-request HTTP timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// * Fixed column widths, in display cells
pub const NAME_COLUMN_WIDTH: usize = 15;
pub const SERVER_RANK_COLUMN_WIDTH: usize = 10;
pub const EVENT_RANK_COLUMN_WIDTH: usize = 12;
pub const DATE_COLUMN_WIDTH: usize = 12;
pub const METRIC_COLUMN_WIDTH: usize = 14;

// * Marker used by the source when a member has no recorded event rank
pub const NO_DATA_SENTINEL: &str = "No data.";
