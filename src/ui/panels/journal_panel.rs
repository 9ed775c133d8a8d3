use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::crypto::EncryptedNote;
use crate::ui::theme;
use crate::ui::{Action, Component};

const DEFAULT_REFLECTION: &str =
    "Today I slowed down, breathed deeply, and noticed how my shoulders softened.";
const UPLOAD_HINT: &str =
    "Next step: upload this JSON to IPFS from the client, then send the CID to the \
     backend to write the proof on HCS and award XP.";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Text,
    Passphrase,
}

/// The daily reflection card: a text area, a passphrase input, and the
/// encrypted payload preview.
pub struct JournalPanel {
    text: String,
    passphrase: String,
    active_field: Field,
    focused: bool,
    /// Set while an encryption worker is running; blocks re-entrant
    /// encrypt actions.
    busy: bool,
    payload: Option<String>,
    error: Option<String>,
}

impl Default for JournalPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalPanel {
    pub fn new() -> Self {
        Self {
            text: DEFAULT_REFLECTION.to_string(),
            passphrase: String::new(),
            active_field: Field::Text,
            focused: false,
            busy: false,
            payload: None,
            error: None,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Store a finished encryption result as pretty JSON.
    pub fn set_result(&mut self, note: &EncryptedNote) {
        self.busy = false;
        self.error = None;
        match note.to_json_pretty() {
            Ok(json) => self.payload = Some(json),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    fn clear(&mut self) {
        self.text.clear();
        self.payload = None;
        self.error = None;
    }

    fn encrypt_action(&mut self) -> Action {
        if self.busy {
            return Action::None;
        }
        if self.text.is_empty() || self.passphrase.is_empty() {
            return Action::SetStatus("Write a reflection and a passphrase first".to_string());
        }
        self.busy = true;
        self.error = None;
        Action::EncryptNote {
            text: self.text.clone(),
            passphrase: self.passphrase.clone(),
        }
    }
}

impl Component for JournalPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('e') => self.encrypt_action(),
                KeyCode::Char('y') => match &self.payload {
                    Some(json) => Action::CopyPayload(json.clone()),
                    None => Action::SetStatus("Nothing encrypted yet".to_string()),
                },
                KeyCode::Char('l') => {
                    self.clear();
                    Action::SetStatus("Reflection cleared".to_string())
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.active_field = match self.active_field {
                    Field::Text => Field::Passphrase,
                    Field::Passphrase => Field::Text,
                };
                Action::None
            }
            KeyCode::Enter => match self.active_field {
                Field::Text => {
                    self.text.push('\n');
                    Action::None
                }
                Field::Passphrase => self.encrypt_action(),
            },
            KeyCode::Backspace => {
                match self.active_field {
                    Field::Text => self.text.pop(),
                    Field::Passphrase => self.passphrase.pop(),
                };
                Action::None
            }
            KeyCode::Char(c) => {
                match self.active_field {
                    Field::Text => self.text.push(c),
                    Field::Passphrase => self.passphrase.push(c),
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::style_border(self.focused))
            .title(Span::styled(
                " Daily Reflection ",
                theme::style_title(self.focused),
            ))
            .title(
                Line::from(Span::styled(
                    format!("Local AES-GCM • {} bytes ", self.text.len()),
                    theme::style_muted(),
                ))
                .right_aligned(),
            );
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let rows = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let text_editing = self.focused && self.active_field == Field::Text;
        let text_block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::style_border(text_editing));
        let placeholder = "Write a few calm lines (kept private, encrypted before upload)";
        let text_widget = if self.text.is_empty() {
            Paragraph::new(Span::styled(placeholder, theme::style_muted()))
        } else {
            Paragraph::new(self.text.as_str()).style(theme::style_default())
        };
        frame.render_widget(text_widget.block(text_block).wrap(Wrap { trim: false }), rows[0]);

        let pass_editing = self.focused && self.active_field == Field::Passphrase;
        let masked = if self.passphrase.is_empty() {
            Span::styled("Passphrase", theme::style_muted())
        } else {
            Span::styled(theme::PASSPHRASE_MASK, theme::style_default())
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    if pass_editing { "> " } else { "  " },
                    theme::style_accent(),
                ),
                masked,
            ])),
            rows[1],
        );

        let hint = if self.busy {
            Line::from(Span::styled("Encrypting…", theme::style_accent()))
        } else {
            Line::from(Span::styled(
                "Ctrl+E encrypt • Ctrl+Y copy payload • Ctrl+L clear • ↑/↓ switch field",
                theme::style_muted(),
            ))
        };
        frame.render_widget(Paragraph::new(hint), rows[2]);

        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(error.as_str(), theme::style_error()))
                    .wrap(Wrap { trim: true }),
                rows[3],
            );
        } else if let Some(json) = &self.payload {
            let mut lines = vec![Line::from(Span::styled(
                "Encrypted payload (base64 JSON):",
                theme::style_accent(),
            ))];
            lines.extend(json.lines().map(|l| Line::from(l.to_string())));
            lines.push(Line::from(Span::styled(UPLOAD_HINT, theme::style_muted())));
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }),
                rows[3],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn focused_panel() -> JournalPanel {
        let mut panel = JournalPanel::new();
        panel.set_focused(true);
        panel
    }

    #[test]
    fn test_encrypt_requires_passphrase() {
        let mut panel = focused_panel();
        assert!(matches!(panel.handle_key(ctrl('e')), Action::SetStatus(_)));
        assert!(!panel.is_busy());
    }

    #[test]
    fn test_encrypt_emits_action_and_sets_busy() {
        let mut panel = focused_panel();
        panel.active_field = Field::Passphrase;
        for c in "p@ss".chars() {
            panel.handle_key(key(KeyCode::Char(c)));
        }
        match panel.handle_key(ctrl('e')) {
            Action::EncryptNote { text, passphrase } => {
                assert_eq!(text, DEFAULT_REFLECTION);
                assert_eq!(passphrase, "p@ss");
            }
            other => panic!("unexpected action: {other:?}"),
        }
        assert!(panel.is_busy());
    }

    #[test]
    fn test_busy_blocks_reentrant_encrypt() {
        let mut panel = focused_panel();
        panel.passphrase = "p@ss".to_string();
        assert!(matches!(
            panel.handle_key(ctrl('e')),
            Action::EncryptNote { .. }
        ));
        assert!(matches!(panel.handle_key(ctrl('e')), Action::None));
    }

    #[test]
    fn test_enter_in_passphrase_encrypts() {
        let mut panel = focused_panel();
        panel.handle_key(key(KeyCode::Down));
        panel.passphrase = "p@ss".to_string();
        assert!(matches!(
            panel.handle_key(key(KeyCode::Enter)),
            Action::EncryptNote { .. }
        ));
    }

    #[test]
    fn test_result_clears_busy_and_stores_payload() {
        let mut panel = focused_panel();
        panel.passphrase = "p@ss".to_string();
        assert!(matches!(
            panel.handle_key(ctrl('e')),
            Action::EncryptNote { .. }
        ));
        assert!(panel.is_busy());

        let note = crate::crypto::encrypt_note("hello", "p@ss").unwrap();
        panel.set_result(&note);
        assert!(!panel.is_busy());
        assert!(panel.payload().unwrap().contains("\"cipher\""));
    }

    #[test]
    fn test_clear_resets_text_and_payload() {
        let mut panel = focused_panel();
        let note = crate::crypto::encrypt_note("hello", "p@ss").unwrap();
        panel.set_result(&note);
        panel.handle_key(ctrl('l'));
        assert!(panel.text.is_empty());
        assert!(panel.payload().is_none());
    }

    #[test]
    fn test_typing_goes_to_active_field() {
        let mut panel = focused_panel();
        panel.handle_key(ctrl('l'));
        panel.handle_key(key(KeyCode::Char('o')));
        panel.handle_key(key(KeyCode::Char('m')));
        assert_eq!(panel.text, "om");
        panel.handle_key(key(KeyCode::Up));
        panel.handle_key(key(KeyCode::Char('x')));
        assert_eq!(panel.passphrase, "x");
        assert_eq!(panel.text, "om");
    }
}
