use ratatui::style::{Color, Modifier, Style};

use crate::core::session::ZenMode;

// Palette: deep night, sand, sage, soft gray
pub const NIGHT: Color = Color::Rgb(13, 27, 42);
pub const SAND: Color = Color::Rgb(244, 237, 228);
pub const SAGE: Color = Color::Rgb(168, 202, 186);
pub const SOFT_GRAY: Color = Color::Rgb(230, 230, 230);

pub const BG: Color = Color::Reset;
pub const FG: Color = SOFT_GRAY;
pub const ERROR_FG: Color = Color::Red;
pub const BORDER: Color = Color::DarkGray;
pub const BORDER_FOCUSED: Color = SAGE;
pub const MUTED: Color = Color::DarkGray;
pub const PASSPHRASE_MASK: &str = "••••••••••••";

pub fn mode_accent(mode: ZenMode) -> Color {
    match mode {
        ZenMode::Calm => SAGE,
        ZenMode::Focus => SOFT_GRAY,
        ZenMode::Gratitude => SAND,
    }
}

/// Map a star opacity in [0, 1] to a gray level; terminal cells have no
/// true transparency.
pub fn star_color(alpha: f64) -> Color {
    let level = (230.0 * alpha.clamp(0.0, 1.0)) as u8;
    Color::Rgb(level, level, level)
}

/// Dim sage for the focus-mode glow band.
pub fn band_color(alpha: f64) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    Color::Rgb((168.0 * a) as u8, (202.0 * a) as u8, (186.0 * a) as u8)
}

// Reusable styles
pub fn style_default() -> Style {
    Style::default().fg(FG).bg(BG)
}

pub fn style_accent() -> Style {
    Style::default().fg(SAGE)
}

pub fn style_muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn style_error() -> Style {
    Style::default().fg(ERROR_FG)
}

pub fn style_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUSED)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn style_title(focused: bool) -> Style {
    if focused {
        Style::default().fg(SAGE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(FG).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_accents_match_palette() {
        assert_eq!(mode_accent(ZenMode::Calm), SAGE);
        assert_eq!(mode_accent(ZenMode::Focus), SOFT_GRAY);
        assert_eq!(mode_accent(ZenMode::Gratitude), SAND);
    }

    #[test]
    fn test_star_color_scales_with_alpha() {
        assert_eq!(star_color(1.0), Color::Rgb(230, 230, 230));
        assert_eq!(star_color(0.0), Color::Rgb(0, 0, 0));
        assert_eq!(star_color(2.0), star_color(1.0));
    }
}
