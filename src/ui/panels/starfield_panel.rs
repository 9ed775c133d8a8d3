use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::field::{Starfield, Surface};
use crate::ui::theme;
use crate::ui::{Action, Component};

/// Braille canvas resolution: dots per terminal cell.
const DOTS_X: u32 = 2;
const DOTS_Y: u32 = 4;

/// The starfield card. Owns the simulation and renders it on a braille
/// canvas; hovering the card (or pressing `f`) switches the field into
/// focus mode.
pub struct StarfieldPanel {
    field: Option<Starfield>,
    hover: bool,
    pinned: bool,
    focused: bool,
}

impl Default for StarfieldPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StarfieldPanel {
    pub fn new() -> Self {
        Self {
            field: None,
            hover: false,
            pinned: false,
            focused: false,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_hover(&mut self, hover: bool) {
        self.hover = hover;
    }

    /// Whether the field should run in focus mode this frame.
    pub fn focus_active(&self) -> bool {
        self.hover || self.pinned
    }

    pub fn field(&self) -> Option<&Starfield> {
        self.field.as_ref()
    }

    fn dot_dims(area: Rect) -> (f64, f64) {
        // Inside the card border.
        let inner_w = u32::from(area.width.saturating_sub(2));
        let inner_h = u32::from(area.height.saturating_sub(2));
        (f64::from(inner_w * DOTS_X), f64::from(inner_h * DOTS_Y))
    }

    /// Create the field on first layout, or update its bounds after a
    /// resize. The particle set survives resizes.
    pub fn ensure_field(&mut self, area: Rect) {
        let (width, height) = Self::dot_dims(area);
        match &mut self.field {
            None => self.field = Some(Starfield::new(width, height)),
            Some(field) => {
                if field.width() != width || field.height() != height {
                    field.resize(width, height);
                }
            }
        }
    }

    /// Advance the simulation one frame. The focus flag is sampled here,
    /// once, and passed through explicitly.
    pub fn step(&mut self, dt: f64) {
        let focused = self.focus_active();
        if let Some(field) = &mut self.field {
            field.step(dt, focused);
        }
    }
}

impl Component for StarfieldPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('f') => {
                self.pinned = !self.pinned;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let focus = self.focus_active();
        let title = if focus {
            " Starfield — aligning "
        } else {
            " Starfield "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::style_border(self.focused))
            .title(Span::styled(title, theme::style_title(self.focused)))
            .title(
                Line::from(Span::styled("hover or f ", theme::style_muted())).right_aligned(),
            );

        let Some(field) = &self.field else {
            frame.render_widget(block, area);
            return;
        };

        let (width, height) = (field.width(), field.height());
        let canvas = Canvas::default()
            .block(block)
            .background_color(theme::NIGHT)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                let mut surface = CanvasSurface { ctx, width, height };
                field.render(&mut surface, focus);
            });
        frame.render_widget(canvas, area);
    }
}

/// Adapts a ratatui canvas context to the simulator's [`Surface`].
/// Field space has y growing downward; the canvas y axis points up, so
/// every y is flipped.
struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    width: f64,
    height: f64,
}

impl Surface for CanvasSurface<'_, '_> {
    fn clear(&mut self) {
        // The canvas buffer starts blank on every draw.
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        let color = theme::star_color(alpha);
        let y = self.height - y;
        if radius >= 1.0 {
            self.ctx.draw(&Circle {
                x,
                y,
                radius,
                color,
            });
        } else {
            self.ctx.draw(&Points {
                coords: &[(x, y)],
                color,
            });
        }
    }

    fn fill_band(&mut self, center_y: f64, half_height: f64, alpha: f64) {
        let y = self.height - center_y;
        // Brightest at the center, fading toward the edges.
        for (offset, level) in [
            (0.0, alpha),
            (half_height / 2.0, alpha / 2.0),
            (-half_height / 2.0, alpha / 2.0),
        ] {
            self.ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: y + offset,
                x2: self.width,
                y2: y + offset,
                color: theme::band_color(level),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_dot_dims_inside_border() {
        let (w, h) = StarfieldPanel::dot_dims(Rect::new(0, 0, 42, 22));
        assert_eq!(w, 80.0);
        assert_eq!(h, 80.0);
    }

    #[test]
    fn test_ensure_field_creates_then_resizes() {
        let mut panel = StarfieldPanel::new();
        panel.ensure_field(Rect::new(0, 0, 42, 22));
        let before = panel.field().unwrap().particles().to_vec();
        assert!(!before.is_empty());

        panel.ensure_field(Rect::new(0, 0, 62, 32));
        let field = panel.field().unwrap();
        assert_eq!(field.width(), 120.0);
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_hover_and_pin_drive_focus() {
        let mut panel = StarfieldPanel::new();
        assert!(!panel.focus_active());

        panel.set_hover(true);
        assert!(panel.focus_active());
        panel.set_hover(false);
        assert!(!panel.focus_active());

        panel.set_focused(true);
        panel.handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE));
        assert!(panel.focus_active());
        panel.handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE));
        assert!(!panel.focus_active());
    }

    #[test]
    fn test_step_without_field_is_a_no_op() {
        let mut panel = StarfieldPanel::new();
        panel.step(1.0);
        assert!(panel.field().is_none());
    }
}
