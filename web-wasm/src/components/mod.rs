pub mod header;
pub mod search_box;
pub mod candidate_list;
pub mod detail_panel;
pub mod status_line;
