// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deck construction.
//!
//! [`DeckBuilder`] is the authoring vocabulary: `slide(body, kind)` and
//! `section(name, |s| ...)`. There is no ambient "current section"; a section's slides are added
//! through the [`SectionScope`] handed to its callback, and the scope appends the finished
//! section to the deck when it is dropped.
//!
//! Sections do not nest: [`SectionScope`] has no `section` method.

use std::fmt;

use crate::model::{Deck, DeckItem, InvalidLayoutKind, LayoutKind, Section, Slide};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    InvalidLayoutKind(InvalidLayoutKind),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLayoutKind(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLayoutKind(err) => Some(err),
        }
    }
}

impl From<InvalidLayoutKind> for BuildError {
    fn from(value: InvalidLayoutKind) -> Self {
        Self::InvalidLayoutKind(value)
    }
}

#[derive(Debug, Default)]
pub struct DeckBuilder {
    title: Option<String>,
    items: Vec<DeckItem>,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a top-level slide.
    ///
    /// `kind` is a layout tag (`center`, `code`, `block`, optionally written `:center` etc).
    /// An unknown tag fails before anything is appended.
    pub fn slide(
        &mut self,
        body: impl Into<String>,
        kind: impl AsRef<str>,
    ) -> Result<&mut Self, BuildError> {
        let kind = kind.as_ref().parse::<LayoutKind>()?;
        Ok(self.push_slide(Slide::new(body, kind)))
    }

    fn push_slide(&mut self, slide: Slide) -> &mut Self {
        self.items.push(DeckItem::Slide(slide));
        self
    }

    /// Runs `body` against a freshly opened section and appends the section when it returns.
    ///
    /// If `body` fails, the partially populated section is discarded and the error is returned.
    pub fn section<F>(&mut self, name: impl Into<String>, body: F) -> Result<&mut Self, BuildError>
    where
        F: FnOnce(&mut SectionScope<'_>) -> Result<(), BuildError>,
    {
        let mut scope = self.open_section(name);
        match body(&mut scope) {
            Ok(()) => scope.close(),
            Err(err) => {
                log::debug!("discarding section {:?}: {err}", scope.name());
                scope.abandon();
                return Err(err);
            }
        }
        Ok(self)
    }

    /// Opens a section explicitly. It is appended to the deck when the scope is closed or
    /// dropped.
    pub fn open_section(&mut self, name: impl Into<String>) -> SectionScope<'_> {
        SectionScope { items: &mut self.items, section: Some(Section::new(name)) }
    }

    /// Number of top-level items (slides and sections) appended so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn finish(self) -> Deck {
        let deck = Deck::from_parts(self.title, self.items);
        log::debug!(
            "built deck with {} slides in {} sections",
            deck.slide_count(),
            deck.sections().count()
        );
        deck
    }
}

/// An open section. Closing (explicitly or on drop) appends it to the owning deck.
#[derive(Debug)]
pub struct SectionScope<'a> {
    items: &'a mut Vec<DeckItem>,
    section: Option<Section>,
}

impl SectionScope<'_> {
    pub fn name(&self) -> &str {
        self.section.as_ref().map(Section::name).unwrap_or("")
    }

    /// Appends a slide to this section. Same tag rules as [`DeckBuilder::slide`].
    pub fn slide(
        &mut self,
        body: impl Into<String>,
        kind: impl AsRef<str>,
    ) -> Result<&mut Self, BuildError> {
        let kind = kind.as_ref().parse::<LayoutKind>()?;
        Ok(self.push_slide(Slide::new(body, kind)))
    }

    fn push_slide(&mut self, slide: Slide) -> &mut Self {
        if let Some(section) = self.section.as_mut() {
            section.push(slide);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.section.as_ref().map(Section::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn close(self) {
        drop(self);
    }

    /// Drops the section without appending it.
    pub fn abandon(mut self) {
        self.section = None;
    }
}

impl Drop for SectionScope<'_> {
    fn drop(&mut self) {
        if let Some(section) = self.section.take() {
            log::trace!("closing section {:?} with {} slides", section.name(), section.len());
            self.items.push(DeckItem::Section(section));
        }
    }
}

#[cfg(test)]
mod tests;
