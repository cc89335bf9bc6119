//! Search API route handlers and module exports.

mod search_records;
pub use search_records::search_records;
