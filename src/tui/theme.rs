// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

use crate::render::{AnsiColor, SgrStyle};

const PALETTE_ENV: &str = "LECTERN_TUI_PALETTE";
const PALETTE_ENV_FALLBACK: &str = "LECTERN_PALETTE";

const ANSI_DEFAULTS: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::White,
];

const ANSI_RED: usize = 1;
const ANSI_YELLOW: usize = 3;
const ANSI_CYAN: usize = 6;
const ANSI_BRIGHT_BLACK: usize = 8;

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        Self::from_lookup(|name| env::var(name))
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self, ThemeError> {
        let palette = palette_override(lookup)?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn ansi_color(&self, idx: usize) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi[idx],
            None => ANSI_DEFAULTS[idx],
        }
    }

    pub(crate) fn frame_border_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(ANSI_BRIGHT_BLACK))
    }

    pub(crate) fn text_style(&self) -> Style {
        self.base_style()
    }

    pub(crate) fn code_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(ANSI_CYAN))
    }

    pub(crate) fn footer_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(ANSI_BRIGHT_BLACK))
    }

    pub(crate) fn section_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(ANSI_YELLOW)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(ANSI_RED))
    }

    /// Style for text inside slide bodies that carry SGR escapes.
    ///
    /// Colours 0-15 go through the palette override; the extended range maps to indexed colours.
    pub(crate) fn sgr_style(&self, sgr: SgrStyle) -> Style {
        let mut style = Style::default();
        if let Some(fg) = sgr.fg {
            style = style.fg(self.sgr_color(fg));
        }
        if let Some(bg) = sgr.bg {
            style = style.bg(self.sgr_color(bg));
        }

        let mut modifiers = Modifier::empty();
        if sgr.bold {
            modifiers |= Modifier::BOLD;
        }
        if sgr.dim {
            modifiers |= Modifier::DIM;
        }
        if sgr.italic {
            modifiers |= Modifier::ITALIC;
        }
        if sgr.underline {
            modifiers |= Modifier::UNDERLINED;
        }
        if sgr.reverse {
            modifiers |= Modifier::REVERSED;
        }
        style.add_modifier(modifiers)
    }

    fn sgr_color(&self, color: AnsiColor) -> Color {
        let AnsiColor(idx) = color;
        if usize::from(idx) < ANSI_DEFAULTS.len() {
            self.ansi_color(usize::from(idx))
        } else {
            Color::Indexed(idx)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const CSV_LEN: usize = 18;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg, then 16 ANSI colors), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let fg = parse_palette_color(parts[0])?;
        let bg = parse_palette_color(parts[1])?;

        let mut ansi = [Color::Reset; 16];
        for (slot, part) in ansi.iter_mut().zip(&parts[2..]) {
            *slot = parse_palette_color(part)?;
        }

        Ok(Self { fg, bg, ansi })
    }
}

fn palette_override(
    lookup: impl Fn(&str) -> Result<String, env::VarError>,
) -> Result<Option<TuiPalette>, ThemeError> {
    let mut found = None;
    for name in [PALETTE_ENV, PALETTE_ENV_FALLBACK] {
        match lookup(name) {
            Ok(value) => {
                found = Some((name, value));
                break;
            }
            Err(env::VarError::NotPresent) => {}
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: name.to_owned(),
                    value: "<non-unicode>".to_owned(),
                });
            }
        }
    }

    let Some((name, value)) = found else {
        return Ok(None);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let palette = TuiPalette::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
        name: name.to_owned(),
        value: format!("{trimmed} ({error})"),
    })?;
    log::debug!("using palette override from {name}");
    Ok(Some(palette))
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let channels = rest.split('/').map(parse_hex_channel).collect::<Result<Vec<_>, _>>()?;
        return match channels.as_slice() {
            [r, g, b] => Ok(Color::Rgb(*r, *g, *b)),
            _ => Err(format!("invalid rgb: value: {trimmed}")),
        };
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    let [_, r, g, b] = rgb.to_be_bytes();
    Ok(Color::Rgb(r, g, b))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        // 16-bit channels keep their high byte.
        4 => u16::from_str_radix(value, 16)
            .map(|wide| (wide >> 8) as u8)
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!("invalid rgb: component {value} (expected 2 or 4 hex digits)")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}

#[cfg(test)]
mod tests {
    use std::env::VarError;

    use ratatui::style::{Color, Modifier};

    use super::{parse_palette_color, ThemeError, TuiPalette, TuiTheme};
    use crate::render::{AnsiColor, SgrStyle};

    const VALID: &str = "#111111,#222222,#000000,#ff0000,#00ff00,#ffff00,#0000ff,#ff00ff,#00ffff,#ffffff,#1a1a1a,#ff1111,#11ff11,#ffff11,#1111ff,#ff11ff,#11ffff,#fefefe";

    #[test]
    fn palette_parses_valid_csv() {
        let palette = TuiPalette::parse_csv(VALID).expect("palette");
        assert_eq!(palette.fg, Color::Rgb(0x11, 0x11, 0x11));
        assert_eq!(palette.bg, Color::Rgb(0x22, 0x22, 0x22));
        assert_eq!(palette.ansi[1], Color::Rgb(0xff, 0, 0));
        assert_eq!(palette.ansi[15], Color::Rgb(0xfe, 0xfe, 0xfe));
    }

    #[test]
    fn palette_rejects_wrong_length() {
        let err = TuiPalette::parse_csv("nope").unwrap_err();
        assert!(err.contains("expected"));
    }

    #[test]
    fn parses_xterm_rgb_form() {
        assert_eq!(parse_palette_color("rgb:ff/80/00"), Ok(Color::Rgb(0xff, 0x80, 0)));
        assert_eq!(parse_palette_color("rgb:ffff/8080/0000"), Ok(Color::Rgb(0xff, 0x80, 0)));
        assert!(parse_palette_color("rgb:ff/80").is_err());
    }

    #[test]
    fn theme_prefers_tui_specific_variable() {
        let theme = TuiTheme::from_lookup(|name| match name {
            "LECTERN_TUI_PALETTE" => Ok(VALID.to_owned()),
            "LECTERN_PALETTE" => Ok("garbage".to_owned()),
            _ => Err(VarError::NotPresent),
        })
        .expect("theme");
        assert_eq!(theme.base_style().bg, Some(Color::Rgb(0x22, 0x22, 0x22)));
    }

    #[test]
    fn theme_reports_invalid_variable() {
        let err = TuiTheme::from_lookup(|name| match name {
            "LECTERN_PALETTE" => Ok("#zzzzzz".to_owned()),
            _ => Err(VarError::NotPresent),
        })
        .unwrap_err();
        let ThemeError::InvalidEnv { name, .. } = err;
        assert_eq!(name, "LECTERN_PALETTE");
    }

    #[test]
    fn theme_without_override_uses_terminal_defaults() {
        let theme = TuiTheme::from_lookup(|_| Err(VarError::NotPresent)).expect("theme");
        assert_eq!(theme.base_style(), ratatui::style::Style::default());
    }

    #[test]
    fn sgr_bold_and_colours_map_to_styles() {
        let theme = TuiTheme::default();
        let sgr = SgrStyle {
            bold: true,
            fg: Some(AnsiColor(1)),
            bg: Some(AnsiColor(200)),
            ..SgrStyle::default()
        };
        let style = theme.sgr_style(sgr);
        assert_eq!(style.fg, Some(Color::Red));
        assert_eq!(style.bg, Some(Color::Indexed(200)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
