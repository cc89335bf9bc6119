//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod errors;
pub mod app_config;
pub mod search_descriptor;
pub mod search_result;
pub mod search_store;
pub mod search_panel_state;
pub mod result_table_layout;
pub mod pagination;
pub mod service_request;
pub mod user_prefs;
