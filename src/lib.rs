// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lectern: terminal slide decks.
//!
//! Decks are authored with [`build::DeckBuilder`] (slides tagged with a layout kind, grouped into
//! optional named sections), rendered as text frames by [`render`], stored as JSON by [`store`]
//! and presented interactively by [`tui`].

pub mod build;
pub mod model;
pub mod render;
pub mod store;
pub mod talk;
pub mod tui;
