//! Search API module exports.

pub mod search;
