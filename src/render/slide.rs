// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::Deck;

use super::ansi::strip_ansi;
use super::layout::{layout_slide, LayoutError};
use super::text::{canvas_to_string_trimmed, text_len, truncate_with_ellipsis};
use super::{Canvas, CanvasError, RenderOptions};

const H_PADDING: usize = 2;
const MIN_WIDTH: usize = 2 + 2 * H_PADDING + 1;
const MIN_FRAME_HEIGHT: usize = 3;
const FOOTER_SEPARATOR: &str = " · ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideRenderError {
    Canvas(CanvasError),
    Layout(LayoutError),
    AreaTooSmall { width: usize, height: usize },
    SlideOutOfRange { index: usize, len: usize },
}

impl fmt::Display for SlideRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::Layout(err) => write!(f, "layout error: {err}"),
            Self::AreaTooSmall { width, height } => {
                write!(f, "{width}x{height} is too small to render a slide")
            }
            Self::SlideOutOfRange { index, len } => {
                write!(f, "slide {index} out of range for a deck of {len} slides")
            }
        }
    }
}

impl std::error::Error for SlideRenderError {}

impl From<CanvasError> for SlideRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

impl From<LayoutError> for SlideRenderError {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

/// Footer text for slide `index`: deck title and section name on the left, `n/total` on the
/// right.
pub fn footer_parts(deck: &Deck, index: usize) -> (String, String) {
    let section = deck.slide_at(index).and_then(|s| s.section);
    let left = match (deck.title(), section) {
        (Some(title), Some(section)) => format!("{title}{FOOTER_SEPARATOR}{section}"),
        (Some(title), None) => title.to_owned(),
        (None, Some(section)) => section.to_owned(),
        (None, None) => String::new(),
    };
    let right = format!("{}/{}", index + 1, deck.slide_count());
    (left, right)
}

/// Renders slide `index` of `deck` as a framed Unicode text block.
///
/// Escapes in the body are dropped; layout follows [`layout_slide`].
pub fn render_slide_unicode(
    deck: &Deck,
    index: usize,
    options: RenderOptions,
) -> Result<String, SlideRenderError> {
    let len = deck.slide_count();
    let entry = deck.slide_at(index).ok_or(SlideRenderError::SlideOutOfRange { index, len })?;

    let RenderOptions { width, height, show_footer } = options;
    let frame_height = if show_footer { height.saturating_sub(1) } else { height };
    if width < MIN_WIDTH || frame_height < MIN_FRAME_HEIGHT {
        return Err(SlideRenderError::AreaTooSmall { width, height });
    }

    let mut canvas = Canvas::new(width, height)?;
    canvas.draw_box(0, 0, width - 1, frame_height - 1)?;

    let inner_x = 1 + H_PADDING;
    let inner_width = width - 2 - 2 * H_PADDING;
    let layout = layout_slide(entry.slide, inner_width, frame_height - 2)?;
    for line in &layout.lines {
        canvas.write_str(inner_x + line.x, 1 + line.y, &strip_ansi(&line.text))?;
    }

    if show_footer {
        let (left, right) = footer_parts(deck, index);
        let y = height - 1;
        let right_len = text_len(&right);
        let left_room = width.saturating_sub(right_len + 2);
        canvas.write_str(1, y, &truncate_with_ellipsis(&left, left_room.saturating_sub(1)))?;
        canvas.write_str(width.saturating_sub(right_len + 1), y, &right)?;
    }

    Ok(canvas_to_string_trimmed(&canvas))
}

/// Renders every slide in presentation order, separated by blank lines.
pub fn render_deck_unicode(deck: &Deck, options: RenderOptions) -> Result<String, SlideRenderError> {
    let frames = (0..deck.slide_count())
        .map(|index| render_slide_unicode(deck, index, options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(frames.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::{footer_parts, render_deck_unicode, render_slide_unicode, SlideRenderError};
    use crate::build::DeckBuilder;
    use crate::model::Deck;
    use crate::render::RenderOptions;

    fn deck() -> Deck {
        let mut builder = DeckBuilder::new().with_title("Talk");
        builder.slide("Hi", ":center").unwrap();
        builder
            .section("Code", |s| {
                s.slide("a = 1\n  b", ":code")?;
                Ok(())
            })
            .unwrap();
        builder.finish()
    }

    #[test]
    fn snapshot_centered_slide() {
        let options = RenderOptions { width: 12, height: 6, show_footer: true };
        let rendered = render_slide_unicode(&deck(), 0, options).expect("render");
        assert_eq!(
            rendered,
            "┌──────────┐\n│          │\n│    Hi    │\n│          │\n└──────────┘\n Talk   1/2"
        );
    }

    #[test]
    fn snapshot_code_slide_without_footer() {
        let options = RenderOptions { width: 12, height: 4, show_footer: false };
        let rendered = render_slide_unicode(&deck(), 1, options).expect("render");
        assert_eq!(rendered, "┌──────────┐\n│  a = 1   │\n│    b     │\n└──────────┘");
    }

    #[test]
    fn footer_names_section() {
        assert_eq!(footer_parts(&deck(), 1), ("Talk · Code".to_owned(), "2/2".to_owned()));
        assert_eq!(footer_parts(&deck(), 0), ("Talk".to_owned(), "1/2".to_owned()));
    }

    #[test]
    fn deck_renders_every_slide_in_order() {
        let options = RenderOptions { width: 20, height: 6, show_footer: true };
        let rendered = render_deck_unicode(&deck(), options).expect("render");
        assert_eq!(rendered.matches('┌').count(), 2);
        let hi = rendered.find("Hi").expect("first slide");
        let code = rendered.find("a = 1").expect("second slide");
        assert!(hi < code);
    }

    #[test]
    fn rejects_tiny_areas_and_bad_indices() {
        let tiny = RenderOptions { width: 4, height: 2, show_footer: true };
        assert_eq!(
            render_slide_unicode(&deck(), 0, tiny).unwrap_err(),
            SlideRenderError::AreaTooSmall { width: 4, height: 2 }
        );
        assert_eq!(
            render_slide_unicode(&deck(), 2, RenderOptions::default()).unwrap_err(),
            SlideRenderError::SlideOutOfRange { index: 2, len: 2 }
        );
    }
}
