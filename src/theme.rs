use ratatui::style::Color;
use serde::Deserialize;

use crate::format::ChangeTone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
    #[default]
    System,
}

impl ThemeMode {
    // System reads COLORFGBG; unreadable means dark
    pub fn resolve(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette::dark(),
            ThemeMode::Light => Palette::light(),
            ThemeMode::System => {
                let colorfgbg = std::env::var("COLORFGBG").ok();
                if background_is_light(colorfgbg.as_deref()) {
                    Palette::light()
                } else {
                    Palette::dark()
                }
            }
        }
    }
}

fn background_is_light(colorfgbg: Option<&str>) -> bool {
    let Some(value) = colorfgbg else {
        return false;
    };
    match value.rsplit(';').next().and_then(|bg| bg.trim().parse::<u8>().ok()) {
        Some(bg) => !(bg <= 6 || bg == 8),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub is_dark: bool,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub badge_fg: Color,
    pub badge_bg: Color,
    pub positive: Color,
    pub negative: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            text: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            accent: Color::Cyan,
            badge_fg: Color::Rgb(233, 213, 255),
            badge_bg: Color::Rgb(88, 28, 135),
            positive: Color::Green,
            negative: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            text: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            accent: Color::Blue,
            badge_fg: Color::Rgb(107, 33, 168),
            badge_bg: Color::Rgb(243, 232, 255),
            positive: Color::Rgb(22, 163, 74),
            negative: Color::Rgb(220, 38, 38),
        }
    }

    pub fn tone(&self, tone: ChangeTone) -> Color {
        match tone {
            ChangeTone::Positive => self.positive,
            ChangeTone::Negative => self.negative,
        }
    }
}
