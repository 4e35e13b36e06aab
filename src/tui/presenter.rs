// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Deck, DeckSlide};

/// Navigation state over a deck, independent of the terminal.
///
/// The cursor indexes the deck's slides in presentation order and is always in range for a
/// non-empty deck.
#[derive(Debug, Clone)]
pub struct Presenter {
    deck: Deck,
    cursor: usize,
    section_starts: Vec<usize>,
    should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    NextSection,
    PreviousSection,
    Quit,
}

impl Command {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Self::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Right
            | KeyCode::Down
            | KeyCode::PageDown
            | KeyCode::Enter
            | KeyCode::Char('l' | 'n' | ' ') => Some(Self::Next),
            KeyCode::Left
            | KeyCode::Up
            | KeyCode::PageUp
            | KeyCode::Backspace
            | KeyCode::Char('h' | 'p') => Some(Self::Previous),
            KeyCode::Home | KeyCode::Char('g') => Some(Self::First),
            KeyCode::End | KeyCode::Char('G') => Some(Self::Last),
            KeyCode::Char(']') => Some(Self::NextSection),
            KeyCode::Char('[') => Some(Self::PreviousSection),
            KeyCode::Esc | KeyCode::Char('q') => Some(Self::Quit),
            _ => None,
        }
    }
}

impl Presenter {
    pub fn new(deck: Deck) -> Self {
        let section_starts = deck.section_starts();
        Self { deck, cursor: 0, section_starts, should_quit: false }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<DeckSlide<'_>> {
        self.deck.slide_at(self.cursor)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn last_index(&self) -> usize {
        self.deck.slide_count().saturating_sub(1)
    }

    /// Applies `command`; returns whether the visible slide changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let before = self.cursor;
        match command {
            Command::Next => self.cursor = (self.cursor + 1).min(self.last_index()),
            Command::Previous => self.cursor = self.cursor.saturating_sub(1),
            Command::First => self.cursor = 0,
            Command::Last => self.cursor = self.last_index(),
            Command::NextSection => {
                if let Some(start) = self.section_starts.iter().find(|start| **start > self.cursor)
                {
                    self.cursor = *start;
                }
            }
            Command::PreviousSection => {
                if let Some(start) =
                    self.section_starts.iter().rev().find(|start| **start < self.cursor)
                {
                    self.cursor = *start;
                }
            }
            Command::Quit => self.should_quit = true,
        }

        if self.cursor != before {
            log::trace!("slide {} -> {}", before + 1, self.cursor + 1);
        }
        self.cursor != before
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match Command::from_key(key) {
            Some(command) => self.apply(command),
            None => false,
        }
    }
}
