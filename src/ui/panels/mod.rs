pub mod journal_panel;
pub mod mode_selector;
pub mod starfield_panel;
