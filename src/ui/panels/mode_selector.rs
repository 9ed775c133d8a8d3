use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::session::{ZenMode, ALL_MODES};
use crate::ui::theme;
use crate::ui::{Action, Component};

/// Three session-mode cards laid out side by side.
pub struct ModeSelectorPanel {
    active: ZenMode,
    focused: bool,
}

impl ModeSelectorPanel {
    pub fn new(active: ZenMode) -> Self {
        Self {
            active,
            focused: false,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn active_mode(&self) -> ZenMode {
        self.active
    }

    pub fn set_active(&mut self, mode: ZenMode) {
        self.active = mode;
    }
}

impl Component for ModeSelectorPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.active = self.active.prev();
                Action::SelectMode(self.active)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.active = self.active.next();
                Action::SelectMode(self.active)
            }
            KeyCode::Char('1') => {
                self.active = ZenMode::Calm;
                Action::SelectMode(self.active)
            }
            KeyCode::Char('2') => {
                self.active = ZenMode::Focus;
                Action::SelectMode(self.active)
            }
            KeyCode::Char('3') => {
                self.active = ZenMode::Gratitude;
                Action::SelectMode(self.active)
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::style_border(self.focused))
            .title(Line::from(vec![
                Span::styled(" Choose your Zen Session ", theme::style_title(self.focused)),
                Span::styled(format!("(mode: {}) ", self.active), theme::style_muted()),
            ]));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let cards = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

        for (mode, card) in ALL_MODES.into_iter().zip(cards.iter()) {
            let selected = mode == self.active;
            let accent = theme::mode_accent(mode);

            let title_style = if selected {
                Style::default()
                    .fg(accent)
                    .add_modifier(ratatui::style::Modifier::BOLD)
            } else {
                theme::style_default()
            };

            let lines = vec![
                Line::from(vec![
                    Span::styled(format!("{} ", mode.glyph()), Style::default().fg(accent)),
                    Span::styled(mode.title(), title_style),
                ]),
                Line::from(Span::styled(mode.description(), theme::style_muted())),
            ];

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::style_border(selected && self.focused));
            frame.render_widget(
                Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
                *card,
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

    #[test]
    fn test_unfocused_panel_ignores_keys() {
        let mut panel = ModeSelectorPanel::new(ZenMode::Calm);
        assert!(matches!(panel.handle_key(key(KeyCode::Right)), Action::None));
        assert_eq!(panel.active_mode(), ZenMode::Calm);
    }

    #[test]
    fn test_arrows_cycle_modes() {
        let mut panel = ModeSelectorPanel::new(ZenMode::Calm);
        panel.set_focused(true);

        match panel.handle_key(key(KeyCode::Right)) {
            Action::SelectMode(m) => assert_eq!(m, ZenMode::Focus),
            other => panic!("unexpected action: {other:?}"),
        }
        match panel.handle_key(key(KeyCode::Left)) {
            Action::SelectMode(m) => assert_eq!(m, ZenMode::Calm),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_digit_selects_directly() {
        let mut panel = ModeSelectorPanel::new(ZenMode::Calm);
        panel.set_focused(true);
        panel.handle_key(key(KeyCode::Char('3')));
        assert_eq!(panel.active_mode(), ZenMode::Gratitude);
    }
}
