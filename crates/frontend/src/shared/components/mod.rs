pub mod filter_panel;
pub mod modal_form;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;
pub mod table;
