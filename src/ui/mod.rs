pub mod app;
pub mod panels;
pub mod screens;
pub mod theme;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::core::session::ZenMode;

/// Actions emitted by UI components, dispatched by App.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,

    // Session
    SelectMode(ZenMode),

    // Journal
    EncryptNote { text: String, passphrase: String },
    CopyPayload(String),

    // Status
    SetStatus(String),

    // No-op
    None,
}

/// Trait implemented by all UI components (screens and panels).
pub trait Component {
    fn handle_key(&mut self, key: KeyEvent) -> Action;
    fn render(&self, frame: &mut Frame, area: ratatui::layout::Rect);
}
