// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::layout_kind::LayoutKind;

/// A single unit of presented content.
///
/// The body is kept exactly as authored. Any dedenting or trimming happens on a copy at render
/// time (see [`crate::render::layout_slide`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    body: String,
    kind: LayoutKind,
}

impl Slide {
    pub fn new(body: impl Into<String>, kind: LayoutKind) -> Self {
        Self { body: body.into(), kind }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    /// First non-blank line of the body, without surrounding whitespace or escape sequences.
    pub fn headline(&self) -> String {
        let line = self.body.lines().map(str::trim).find(|line| !line.is_empty()).unwrap_or("");
        crate::render::strip_ansi(line).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::Slide;
    use crate::model::LayoutKind;

    #[test]
    fn keeps_body_verbatim() {
        let body = "  indented\n\ttabbed  \n\n";
        let slide = Slide::new(body, LayoutKind::Block);
        assert_eq!(slide.body(), body);
        assert_eq!(slide.kind(), LayoutKind::Block);
    }

    #[test]
    fn headline_skips_blank_lines_and_escapes() {
        let slide = Slide::new("\n\n  \x1b[1mTitle\x1b[0m  \nrest", LayoutKind::Center);
        assert_eq!(slide.headline(), "Title");
    }

    #[test]
    fn headline_of_blank_body_is_empty() {
        assert_eq!(Slide::new(" \n ", LayoutKind::Code).headline(), "");
    }
}
