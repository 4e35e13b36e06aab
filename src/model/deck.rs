// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::section::Section;
use super::slide::Slide;

/// One top-level entry of a [`Deck`], in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckItem {
    Slide(Slide),
    Section(Section),
}

/// The full ordered presentation.
///
/// A deck is only produced by [`crate::build::DeckBuilder`], so declaration order is the only
/// order it knows about: [`Deck::slides`] yields slides exactly as they were authored, with
/// section contents spliced in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    title: Option<String>,
    items: Vec<DeckItem>,
}

/// A slide as seen by a renderer: its position in the presentation plus the section it belongs
/// to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckSlide<'a> {
    pub index: usize,
    pub section: Option<&'a str>,
    pub slide: &'a Slide,
}

impl Deck {
    pub(crate) fn from_parts(title: Option<String>, items: Vec<DeckItem>) -> Self {
        Self { title, items }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn items(&self) -> &[DeckItem] {
        &self.items
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> + '_ {
        self.items.iter().filter_map(|item| match item {
            DeckItem::Section(section) => Some(section),
            DeckItem::Slide(_) => None,
        })
    }

    /// Total number of slides, including those inside sections.
    pub fn slide_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                DeckItem::Slide(_) => 1,
                DeckItem::Section(section) => section.len(),
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count() == 0
    }

    /// Every slide in presentation order.
    pub fn slides(&self) -> impl Iterator<Item = DeckSlide<'_>> + '_ {
        let mut flat = Vec::<(Option<&str>, &Slide)>::with_capacity(self.slide_count());
        for item in &self.items {
            match item {
                DeckItem::Slide(slide) => flat.push((None, slide)),
                DeckItem::Section(section) => flat.extend(
                    section.slides().iter().map(|slide| (Some(section.name()), slide)),
                ),
            }
        }

        flat.into_iter()
            .enumerate()
            .map(|(index, (section, slide))| DeckSlide { index, section, slide })
    }

    pub fn slide_at(&self, index: usize) -> Option<DeckSlide<'_>> {
        self.slides().nth(index)
    }

    /// Presentation index of the first slide of every non-empty section.
    pub fn section_starts(&self) -> Vec<usize> {
        let mut starts = Vec::new();
        let mut cursor = 0usize;
        for item in &self.items {
            match item {
                DeckItem::Slide(_) => cursor += 1,
                DeckItem::Section(section) => {
                    if !section.is_empty() {
                        starts.push(cursor);
                    }
                    cursor += section.len();
                }
            }
        }
        starts
    }
}

#[cfg(test)]
mod tests {
    use super::{Deck, DeckItem};
    use crate::model::{LayoutKind, Section, Slide};

    fn sample() -> Deck {
        let mut intro = Section::new("Intro");
        intro.push(Slide::new("b", LayoutKind::Block));
        intro.push(Slide::new("c", LayoutKind::Code));
        Deck::from_parts(
            Some("Sample".to_owned()),
            vec![
                DeckItem::Slide(Slide::new("a", LayoutKind::Center)),
                DeckItem::Section(intro),
                DeckItem::Section(Section::new("Empty")),
                DeckItem::Slide(Slide::new("d", LayoutKind::Center)),
            ],
        )
    }

    #[test]
    fn slides_follow_declaration_order() {
        let deck = sample();
        let bodies = deck.slides().map(|s| s.slide.body().to_owned()).collect::<Vec<_>>();
        assert_eq!(bodies, ["a", "b", "c", "d"]);

        let sections = deck.slides().map(|s| s.section).collect::<Vec<_>>();
        assert_eq!(sections, [None, Some("Intro"), Some("Intro"), None]);

        let indices = deck.slides().map(|s| s.index).collect::<Vec<_>>();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn counts_slides_inside_sections() {
        let deck = sample();
        assert_eq!(deck.slide_count(), 4);
        assert!(!deck.is_empty());
        assert_eq!(deck.sections().count(), 2);
        assert!(Deck::default().is_empty());
    }

    #[test]
    fn section_starts_skip_empty_sections() {
        assert_eq!(sample().section_starts(), [1]);
    }

    #[test]
    fn slide_at_out_of_range_is_none() {
        let deck = sample();
        assert_eq!(deck.slide_at(3).map(|s| s.slide.body()), Some("d"));
        assert!(deck.slide_at(4).is_none());
    }
}
