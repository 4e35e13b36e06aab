// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A deck is an ordered list of slides and sections; sections hold slides and nothing else.

pub mod deck;
pub mod layout_kind;
pub mod section;
pub mod slide;

pub use deck::{Deck, DeckItem, DeckSlide};
pub use layout_kind::{InvalidLayoutKind, LayoutKind};
pub use section::Section;
pub use slide::Slide;
