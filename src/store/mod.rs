// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Decks on disk.
//!
//! A deck file is a JSON document of slides and sections. Loading goes through the same builder
//! as authored decks, so an unknown layout kind in a file is rejected the same way.

pub mod deck_file;

pub use deck_file::{
    DeckDoc, DeckFile, ItemDoc, SectionDoc, SlideDoc, StoreError, WriteDurability,
};
