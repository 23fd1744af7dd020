pub mod page_header;
pub mod row_actions;
pub mod stat_card;
pub mod table;
pub mod ui;
