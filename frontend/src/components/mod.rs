pub mod event_card;
pub mod event_editor;
pub mod filter_bar;
pub mod footer;
