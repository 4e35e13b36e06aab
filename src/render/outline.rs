// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::model::{Deck, DeckItem, Slide};

use super::text::truncate_with_ellipsis;

const HEADLINE_MAX: usize = 60;

/// Numbered table of contents: one line per slide, with section slides indented under their
/// section name.
pub fn render_outline(deck: &Deck) -> String {
    let mut out = String::new();
    if let Some(title) = deck.title() {
        let _ = writeln!(out, "{title}");
    }

    let mut number = 0usize;
    for item in deck.items() {
        match item {
            DeckItem::Slide(slide) => {
                number += 1;
                push_slide_line(&mut out, "", number, slide);
            }
            DeckItem::Section(section) => {
                let _ = writeln!(out, "[{}]", section.name());
                for slide in section.slides() {
                    number += 1;
                    push_slide_line(&mut out, "  ", number, slide);
                }
            }
        }
    }
    out
}

fn push_slide_line(out: &mut String, indent: &str, number: usize, slide: &Slide) {
    let headline = truncate_with_ellipsis(&slide.headline(), HEADLINE_MAX);
    let _ = writeln!(out, "{indent}{number:>3}. {:<6} {headline}", slide.kind().as_str());
}
