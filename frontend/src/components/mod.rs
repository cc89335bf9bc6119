pub mod error_boundary;
pub mod navbar;
pub mod pager;
pub mod search_components;
