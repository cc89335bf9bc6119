pub mod shared_search_state;
pub mod url_param;
