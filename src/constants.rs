//! UI Constants
//!
//! Centralized constants for consistent layout and data-source defaults.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Records per page requested from the data source
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Upper bound accepted by the artwork API for `limit`
pub const MAX_PAGE_SIZE: u32 = 100;

/// Public artwork API
pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "ARTWORKS_API_URL";

/// Fields requested for each record
pub const ARTWORK_FIELDS: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

/// Fetch timeout
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Log ring buffer capacity
pub const GLOBAL_LOG_CAPACITY: usize = 2000;

/// Number of page buttons shown in the pagination bar
pub const PAGINATION_WINDOW: u32 = 5;

/// Table row and header heights
pub const TABLE_ROW_HEIGHT: f32 = 40.0;
pub const TABLE_HEADER_HEIGHT: f32 = 44.0;

/// Max characters shown in a text cell before truncation
pub const CELL_TEXT_LIMIT: usize = 120;
