//! Constants shared by the search views and the service request builder.

/// Height of one table row, in pixels. The header takes one extra row.
pub const ROW_HEIGHT_PX: u64 = 22;

/// Page size used when a descriptor does not carry one.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Page size of a search panel when the user never picked one.
pub const DEFAULT_SEARCH_PANEL_PAGE_SIZE: u64 = 5;

/// Number of page links the pager shows around the current page.
pub const PAGER_WINDOW_SIZE: u64 = 3;

pub const DEFAULT_LIST_TYPE: &str = "common";
pub const DEFAULT_COLUMN_SET: &str = "default";
pub const SEARCH_COLUMN_SET: &str = "search";

pub const SEARCH_PANEL_PAGE_SIZES: &str = "searchPanelPageSizes";
pub const SEARCH_RESULT_PAGE_PAGE_SIZES: &str = "searchResultPagePageSizes";

pub const DEFAULT_LIST_NODE_NAME: &str = "ns2:abstract-common-list";
pub const DEFAULT_ITEM_NODE_NAME: &str = "list-item";

/// Service classification of record types that may only be related to themselves.
pub const UTILITY_SERVICE_TYPE: &str = "utility";

/// Marker of an indexed list item inside a sort path, e.g. `titleGroupList/0/title`.
pub const REPEATING_ITEM_MARKER: &str = "/0/";

/// Placeholder shown while the item count of a search is unknown.
pub const SEARCH_PENDING_PLACEHOLDER: &str = "⋯";
