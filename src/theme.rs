// Theme
// Color mode and the theme configuration derived from it

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Light/dark preference driving the derived theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown color mode '{0}', expected 'light' or 'dark'")]
pub struct UnknownColorMode(String);

impl FromStr for ColorMode {
    type Err = UnknownColorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(UnknownColorMode(other.to_string())),
        }
    }
}

/// Colors for one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub mode: ColorMode,
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub primary: Color,
    pub divider: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    fn light() -> Self {
        Self {
            mode: ColorMode::Light,
            background: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(245, 245, 245),
            text_primary: Color::Rgb(33, 33, 33),
            text_secondary: Color::Rgb(117, 117, 117),
            primary: Color::Rgb(25, 118, 210),
            divider: Color::Rgb(224, 224, 224),
            selection_bg: Color::Rgb(187, 222, 251),
            selection_fg: Color::Rgb(13, 71, 161),
            success: Color::Rgb(46, 125, 50),
            warning: Color::Rgb(237, 108, 2),
            error: Color::Rgb(211, 47, 47),
        }
    }

    fn dark() -> Self {
        Self {
            mode: ColorMode::Dark,
            background: Color::Rgb(18, 18, 18),
            surface: Color::Rgb(30, 30, 30),
            text_primary: Color::Rgb(255, 255, 255),
            text_secondary: Color::Rgb(179, 179, 179),
            primary: Color::Rgb(144, 202, 249),
            divider: Color::Rgb(66, 66, 66),
            selection_bg: Color::Rgb(38, 79, 120),
            selection_fg: Color::Rgb(255, 255, 255),
            success: Color::Rgb(102, 187, 106),
            warning: Color::Rgb(255, 167, 38),
            error: Color::Rgb(244, 67, 54),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static str,
    pub font_size: u16,
    pub font_weight_bold: u16,
}

/// Transition durations in milliseconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionDurations {
    pub shortest: u64,
    pub shorter: u64,
    pub short: u64,
    pub standard: u64,
    pub complex: u64,
    pub entering_screen: u64,
    pub leaving_screen: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Easing {
    pub ease_in: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transitions {
    pub duration: TransitionDurations,
    pub easing: Easing,
}

/// Text style override for a component slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOverride {
    pub font_size_px: u16,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentOverrides {
    /// Title text of card headers
    pub card_header_title: TextOverride,
}

/// Full visual theme, rebuilt whenever the color mode changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub palette: Palette,
    pub typography: Typography,
    pub transitions: Transitions,
    pub components: ComponentOverrides,
}

impl ThemeConfig {
    /// Derive the theme for a color mode. Never fails.
    pub fn from_mode(mode: ColorMode) -> Self {
        let palette = match mode {
            ColorMode::Light => Palette::light(),
            ColorMode::Dark => Palette::dark(),
        };

        Self {
            palette,
            typography: Typography {
                font_family: "open sans, sans-serif, -apple-system, BlinkMacSystemFont, \"Segoe UI\", \"Roboto\", \"Oxygen\", \"Ubuntu\", \"Helvetica Neue\", Arial, sans-serif",
                font_size: 14,
                font_weight_bold: 600,
            },
            transitions: Transitions {
                duration: TransitionDurations {
                    shortest: 150,
                    shorter: 200,
                    short: 250,
                    standard: 300,
                    complex: 375,
                    entering_screen: 225,
                    leaving_screen: 195,
                },
                easing: Easing {
                    ease_in: "cubic-bezier(0.4, 0, 1, 1)",
                },
            },
            components: ComponentOverrides {
                card_header_title: TextOverride {
                    font_size_px: 16,
                    bold: true,
                },
            },
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.palette.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_is_deterministic() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(ThemeConfig::from_mode(mode), ThemeConfig::from_mode(mode));
            assert_eq!(ThemeConfig::from_mode(mode).mode(), mode);
        }
    }

    #[test]
    fn test_modes_differ_only_in_palette() {
        let light = ThemeConfig::from_mode(ColorMode::Light);
        let dark = ThemeConfig::from_mode(ColorMode::Dark);

        assert_ne!(light.palette, dark.palette);
        assert_eq!(light.typography, dark.typography);
        assert_eq!(light.transitions, dark.transitions);
        assert_eq!(light.components, dark.components);
    }

    #[test]
    fn test_theme_constants() {
        let theme = ThemeConfig::from_mode(ColorMode::Dark);
        assert_eq!(theme.typography.font_size, 14);
        assert_eq!(theme.typography.font_weight_bold, 600);
        assert_eq!(theme.transitions.duration.standard, 300);
        assert_eq!(theme.transitions.duration.entering_screen, 225);
        assert_eq!(theme.transitions.easing.ease_in, "cubic-bezier(0.4, 0, 1, 1)");
        assert_eq!(theme.components.card_header_title, TextOverride { font_size_px: 16, bold: true });
    }

    #[test]
    fn test_color_mode_parsing() {
        assert_eq!("light".parse::<ColorMode>().unwrap(), ColorMode::Light);
        assert_eq!(" DARK ".parse::<ColorMode>().unwrap(), ColorMode::Dark);
        assert!("sepia".parse::<ColorMode>().is_err());
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
    }
}
