//! Service client and server-side search handlers.

pub mod api;
pub mod service_utils;
