// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{LayoutKind, Slide};

use super::ansi::{strip_ansi, visible_len};
use super::text::{prepare_lines, truncate_with_ellipsis};

/// A line of slide text placed in a content area.
///
/// `text` may still contain SGR escapes; `x` and `width` count visible cells only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideLayout {
    pub width: usize,
    pub height: usize,
    pub kind: LayoutKind,
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    EmptyArea { width: usize, height: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArea { width, height } => {
                write!(f, "cannot lay out a slide in a {width}x{height} area")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Places a slide body inside a `width` x `height` content area.
///
/// Placement rules:
/// - the block of lines is centred vertically
/// - `center` lines are centred one by one
/// - `code`/`block` lines share one left edge, chosen so the widest line is centred
/// - lines that do not fit are cut with `…`; extra lines are dropped and the last visible line
///   becomes `…`
pub fn layout_slide(
    slide: &Slide,
    width: usize,
    height: usize,
) -> Result<SlideLayout, LayoutError> {
    if width == 0 || height == 0 {
        return Err(LayoutError::EmptyArea { width, height });
    }

    let kind = slide.kind();
    let mut lines = prepare_lines(slide.body(), kind)
        .into_iter()
        .map(|line| {
            if visible_len(&line) > width {
                truncate_with_ellipsis(&strip_ansi(&line), width)
            } else {
                line
            }
        })
        .collect::<Vec<_>>();

    if lines.len() > height {
        lines.truncate(height);
        if let Some(last) = lines.last_mut() {
            *last = "…".to_owned();
        }
    }

    let block_width = lines.iter().map(|line| visible_len(line)).max().unwrap_or(0);
    let block_x = (width - block_width) / 2;
    let top = (height - lines.len()) / 2;

    let placed = lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(row, text)| {
            let line_width = visible_len(&text);
            let x = if kind.is_preformatted() { block_x } else { (width - line_width) / 2 };
            PlacedLine { x, y: top + row, width: line_width, text }
        })
        .collect();

    Ok(SlideLayout { width, height, kind, lines: placed })
}
