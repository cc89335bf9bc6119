pub mod home_page;
pub mod record_page;
pub mod search_result_page;
