use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A zen session mode. Selecting a mode changes the copy and accent
/// color only; the starfield's focus state is driven by hover, not by
/// the selected mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZenMode {
    Calm,
    Focus,
    Gratitude,
}

pub const ALL_MODES: [ZenMode; 3] = [ZenMode::Calm, ZenMode::Focus, ZenMode::Gratitude];

impl ZenMode {
    pub fn title(&self) -> &'static str {
        match self {
            ZenMode::Calm => "Calm",
            ZenMode::Focus => "Focus",
            ZenMode::Gratitude => "Gratitude",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ZenMode::Calm => "Gentle breathing to unwind and soften the mind.",
            ZenMode::Focus => "Single-point attention to steady your awareness.",
            ZenMode::Gratitude => "Recall and savor what anchors you with warmth.",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ZenMode::Calm => "☾",
            ZenMode::Focus => "◎",
            ZenMode::Gratitude => "♥",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ZenMode::Calm => ZenMode::Focus,
            ZenMode::Focus => ZenMode::Gratitude,
            ZenMode::Gratitude => ZenMode::Calm,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ZenMode::Calm => ZenMode::Gratitude,
            ZenMode::Focus => ZenMode::Calm,
            ZenMode::Gratitude => ZenMode::Focus,
        }
    }
}

impl fmt::Display for ZenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title().to_lowercase())
    }
}

impl FromStr for ZenMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calm" => Ok(ZenMode::Calm),
            "focus" => Ok(ZenMode::Focus),
            "gratitude" => Ok(ZenMode::Gratitude),
            other => Err(format!(
                "unknown mode \"{other}\" (expected calm, focus, or gratitude)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycle_is_closed() {
        for mode in ALL_MODES {
            assert_eq!(mode.next().prev(), mode);
        }
        assert_eq!(ZenMode::Calm.next(), ZenMode::Focus);
        assert_eq!(ZenMode::Gratitude.next(), ZenMode::Calm);
    }

    #[test]
    fn test_mode_copy() {
        assert_eq!(ZenMode::Calm.title(), "Calm");
        assert_eq!(
            ZenMode::Calm.description(),
            "Gentle breathing to unwind and soften the mind."
        );
        assert_eq!(ZenMode::Focus.title(), "Focus");
        assert_eq!(
            ZenMode::Focus.description(),
            "Single-point attention to steady your awareness."
        );
        assert_eq!(ZenMode::Gratitude.title(), "Gratitude");
        assert_eq!(
            ZenMode::Gratitude.description(),
            "Recall and savor what anchors you with warmth."
        );

        assert_eq!(ZenMode::Calm.glyph(), "☾");
        assert_eq!(ZenMode::Focus.glyph(), "◎");
        assert_eq!(ZenMode::Gratitude.glyph(), "♥");
    }

    #[test]
    fn test_mode_parse_roundtrip() {
        for mode in ALL_MODES {
            assert_eq!(mode.to_string().parse::<ZenMode>().unwrap(), mode);
        }
        assert!("serenity".parse::<ZenMode>().is_err());
    }

    #[test]
    fn test_mode_serde_is_lowercase() {
        let json = serde_json::to_string(&ZenMode::Gratitude).unwrap();
        assert_eq!(json, "\"gratitude\"");
    }
}
