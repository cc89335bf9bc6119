pub mod search_panel;
pub mod search_panel_container;
pub mod search_result_table;
pub mod search_to_relate_modal;
