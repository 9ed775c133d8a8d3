use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::core::session::{ZenMode, ALL_MODES};
use crate::ui::panels::journal_panel::JournalPanel;
use crate::ui::panels::mode_selector::ModeSelectorPanel;
use crate::ui::panels::starfield_panel::StarfieldPanel;
use crate::ui::theme;
use crate::ui::{Action, Component};

const STATUS_DISPLAY_SECS: u64 = 3;
const HEADER: &str = " zenfield — breathe, reflect, encrypt locally";
const FOOTER: &str = " Built for peaceful progress • Palette: sage, sand, soft gray, deep night";
const SESSION_HINT: &str = " Breathe for 5–10 minutes. Reflections are encrypted locally.";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Pane {
    Modes,
    Journal,
    Starfield,
}

#[derive(Debug, Clone, Copy)]
struct PanelRects {
    header: Rect,
    modes: Rect,
    hint: Rect,
    journal: Rect,
    starfield: Rect,
    status: Rect,
}

/// The single page: mode selector and journal on the left, starfield on
/// the right, a status line at the bottom.
pub struct HomeScreen {
    pub mode_selector: ModeSelectorPanel,
    pub journal_panel: JournalPanel,
    pub starfield_panel: StarfieldPanel,
    active_pane: Pane,
    status_message: Option<(String, Instant)>,
    rects: Option<PanelRects>,
}

impl HomeScreen {
    pub fn new(startup_mode: ZenMode) -> Self {
        let mut mode_selector = ModeSelectorPanel::new(startup_mode);
        mode_selector.set_focused(true);

        Self {
            mode_selector,
            journal_panel: JournalPanel::new(),
            starfield_panel: StarfieldPanel::new(),
            active_pane: Pane::Modes,
            status_message: None,
            rects: None,
        }
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    /// Clear the status message once it has expired.
    pub fn tick(&mut self) {
        if let Some((_, set_at)) = &self.status_message {
            if set_at.elapsed().as_secs() >= STATUS_DISPLAY_SECS {
                self.status_message = None;
            }
        }
    }

    /// Advance the starfield one frame.
    pub fn step_field(&mut self, dt: f64) {
        self.starfield_panel.step(dt);
    }

    /// Recompute panel geometry for this frame and make sure the
    /// starfield exists at the current size. Called before every draw.
    pub fn update_layout(&mut self, area: Rect) {
        let rects = Self::layout(area);
        self.starfield_panel.ensure_field(rects.starfield);
        self.rects = Some(rects);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let Some(rects) = self.rects else {
            return Action::None;
        };
        let position = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.starfield_panel
                    .set_hover(rects.starfield.contains(position));
                Action::None
            }
            MouseEventKind::Down(_) => {
                if rects.modes.contains(position) {
                    self.set_active_pane(Pane::Modes);
                    self.select_mode_at(rects.modes, position)
                } else if rects.journal.contains(position) {
                    self.set_active_pane(Pane::Journal);
                    Action::None
                } else if rects.starfield.contains(position) {
                    self.set_active_pane(Pane::Starfield);
                    Action::None
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    /// A click inside the mode selector picks the card under the cursor.
    /// Uses the same thirds split as the panel's render.
    fn select_mode_at(&mut self, area: Rect, position: Position) -> Action {
        let inner = area.inner(Margin::new(1, 1));
        let cards = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);

        for (mode, card) in ALL_MODES.into_iter().zip(cards.iter()) {
            if card.contains(position) {
                self.mode_selector.set_active(mode);
                return Action::SelectMode(mode);
            }
        }
        Action::None
    }

    fn layout(area: Rect) -> PanelRects {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        let columns = Layout::horizontal([
            Constraint::Percentage(62),
            Constraint::Percentage(38),
        ])
        .split(rows[1]);

        let left = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(columns[0]);

        PanelRects {
            header: rows[0],
            modes: left[0],
            hint: left[1],
            journal: left[2],
            starfield: columns[1],
            status: rows[2],
        }
    }

    fn set_active_pane(&mut self, pane: Pane) {
        self.active_pane = pane;
        self.mode_selector.set_focused(pane == Pane::Modes);
        self.journal_panel.set_focused(pane == Pane::Journal);
        self.starfield_panel.set_focused(pane == Pane::Starfield);
    }

    fn cycle_pane_forward(&mut self) {
        let next = match self.active_pane {
            Pane::Modes => Pane::Journal,
            Pane::Journal => Pane::Starfield,
            Pane::Starfield => Pane::Modes,
        };
        self.set_active_pane(next);
    }

    fn cycle_pane_backward(&mut self) {
        let prev = match self.active_pane {
            Pane::Modes => Pane::Starfield,
            Pane::Journal => Pane::Modes,
            Pane::Starfield => Pane::Journal,
        };
        self.set_active_pane(prev);
    }
}

impl Component for HomeScreen {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => return Action::Quit,
            (KeyCode::Esc, _) => return Action::Quit,
            (KeyCode::Tab, _) => {
                self.cycle_pane_forward();
                return Action::None;
            }
            (KeyCode::BackTab, _) => {
                self.cycle_pane_backward();
                return Action::None;
            }
            _ => {}
        }

        match self.active_pane {
            Pane::Modes => self.mode_selector.handle_key(key),
            Pane::Journal => self.journal_panel.handle_key(key),
            Pane::Starfield => self.starfield_panel.handle_key(key),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let rects = Self::layout(area);

        frame.render_widget(
            Paragraph::new(Span::styled(HEADER, theme::style_title(false))),
            rects.header,
        );

        self.mode_selector.render(frame, rects.modes);
        frame.render_widget(
            Paragraph::new(Span::styled(SESSION_HINT, theme::style_muted())),
            rects.hint,
        );
        self.journal_panel.render(frame, rects.journal);
        self.starfield_panel.render(frame, rects.starfield);

        let status = match &self.status_message {
            Some((msg, _)) => Line::from(Span::styled(format!(" {msg}"), theme::style_accent())),
            None => Line::from(Span::styled(FOOTER, theme::style_muted())),
        };
        frame.render_widget(Paragraph::new(status), rects.status);
    }
}
