// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SGR (`ESC [ ... m`) escape handling for slide bodies.
//!
//! Escapes take no cells on screen. Text renderers strip them; the TUI turns them into styles.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

const ESC: char = '\x1b';

fn sgr_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\x1b\[([0-9;]*)m").expect("valid SGR pattern"))
}

/// A colour selected by an SGR parameter: 0-7 normal, 8-15 bright, 16-255 extended palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnsiColor(pub u8);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SgrStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
    pub fg: Option<AnsiColor>,
    pub bg: Option<AnsiColor>,
}

impl SgrStyle {
    /// Applies one `;`-separated parameter list, e.g. `1;31`.
    pub fn apply(&mut self, params: &str) {
        if params.is_empty() {
            *self = Self::default();
            return;
        }

        let mut codes = params.split(';').map(|raw| raw.parse::<u16>().unwrap_or(0));
        while let Some(code) = codes.next() {
            match code {
                0 => *self = Self::default(),
                1 => self.bold = true,
                2 => self.dim = true,
                3 => self.italic = true,
                4 => self.underline = true,
                7 => self.reverse = true,
                22 => {
                    self.bold = false;
                    self.dim = false;
                }
                23 => self.italic = false,
                24 => self.underline = false,
                27 => self.reverse = false,
                30..=37 => self.fg = Some(AnsiColor((code - 30) as u8)),
                39 => self.fg = None,
                40..=47 => self.bg = Some(AnsiColor((code - 40) as u8)),
                49 => self.bg = None,
                90..=97 => self.fg = Some(AnsiColor((code - 90 + 8) as u8)),
                100..=107 => self.bg = Some(AnsiColor((code - 100 + 8) as u8)),
                38 | 48 => {
                    // Only the 256-colour form (`38;5;n`) is understood.
                    let color = match (codes.next(), codes.next()) {
                        (Some(5), Some(idx)) => u8::try_from(idx).ok().map(AnsiColor),
                        _ => None,
                    };
                    if code == 38 {
                        self.fg = color;
                    } else {
                        self.bg = color;
                    }
                }
                _ => {}
            }
        }
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment<'a> {
    pub text: &'a str,
    pub style: SgrStyle,
}

/// Splits `line` into styled runs, starting from `style`.
///
/// Returns the style in effect after the line so callers can carry it into the next one.
pub fn styled_segments(line: &str, style: SgrStyle) -> (Vec<StyledSegment<'_>>, SgrStyle) {
    let mut segments = Vec::new();
    let mut style = style;
    let mut cursor = 0usize;

    for caps in sgr_pattern().captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > cursor {
            segments.push(StyledSegment { text: &line[cursor..whole.start()], style });
        }
        style.apply(caps.get(1).map(|m| m.as_str()).unwrap_or(""));
        cursor = whole.end();
    }

    if cursor < line.len() {
        segments.push(StyledSegment { text: &line[cursor..], style });
    }

    (segments, style)
}

/// Removes SGR escapes; borrows when there is nothing to remove.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.contains(ESC) {
        return Cow::Borrowed(text);
    }
    sgr_pattern().replace_all(text, "")
}

/// Width in cells, ignoring escapes.
pub fn visible_len(text: &str) -> usize {
    strip_ansi(text).chars().count()
}
