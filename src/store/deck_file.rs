// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::build::{BuildError, DeckBuilder};
use crate::model::{Deck, DeckItem, Slide};

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    Build { path: PathBuf, source: BuildError },
    SymlinkRefused { path: PathBuf },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::Build { path, source } => write!(f, "invalid deck in {path:?}: {source}"),
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to overwrite symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Build { source, .. } => Some(source),
            Self::SymlinkRefused { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames it into place, without fsync.
    #[default]
    BestEffort,
    /// Also syncs the file and its directory where the platform allows.
    Durable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemDoc {
    Slide(SlideDoc),
    Section(SectionDoc),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDoc {
    pub kind: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDoc {
    pub name: String,
    #[serde(default)]
    pub slides: Vec<SlideDoc>,
}

impl From<&Slide> for SlideDoc {
    fn from(slide: &Slide) -> Self {
        Self { kind: slide.kind().as_str().to_owned(), body: slide.body().to_owned() }
    }
}

impl From<&Deck> for DeckDoc {
    fn from(deck: &Deck) -> Self {
        let items = deck
            .items()
            .iter()
            .map(|item| match item {
                DeckItem::Slide(slide) => ItemDoc::Slide(slide.into()),
                DeckItem::Section(section) => ItemDoc::Section(SectionDoc {
                    name: section.name().to_owned(),
                    slides: section.slides().iter().map(SlideDoc::from).collect(),
                }),
            })
            .collect();
        Self { title: deck.title().map(str::to_owned), items }
    }
}

impl DeckDoc {
    /// Replays the document through [`DeckBuilder`], so kinds get the same validation as
    /// authored decks.
    pub fn into_deck(self) -> Result<Deck, BuildError> {
        let mut builder = match self.title {
            Some(title) => DeckBuilder::new().with_title(title),
            None => DeckBuilder::new(),
        };

        for item in self.items {
            match item {
                ItemDoc::Slide(SlideDoc { kind, body }) => {
                    builder.slide(body, kind)?;
                }
                ItemDoc::Section(SectionDoc { name, slides }) => {
                    builder.section(name, |s| {
                        for SlideDoc { kind, body } in slides {
                            s.slide(body, kind)?;
                        }
                        Ok(())
                    })?;
                }
            }
        }

        Ok(builder.finish())
    }
}

/// A deck stored as a JSON document on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl DeckFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), durability: WriteDurability::default() }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn load(&self) -> Result<Deck, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
        let doc: DeckDoc = serde_json::from_str(&raw)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        let deck = doc
            .into_deck()
            .map_err(|source| StoreError::Build { path: self.path.clone(), source })?;
        log::info!("loaded {} slides from {:?}", deck.slide_count(), self.path);
        Ok(deck)
    }

    pub fn save(&self, deck: &Deck) -> Result<(), StoreError> {
        let doc = DeckDoc::from(deck);
        let mut contents = serde_json::to_vec_pretty(&doc)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        contents.push(b'\n');
        write_atomic(&self.path, &contents, self.durability)?;
        log::info!("saved {} slides to {:?}", deck.slide_count(), self.path);
        Ok(())
    }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused { path: path.to_path_buf() });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    }

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        });
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path =
        parent.join(format!(".lectern.tmp.{}.{}", file_name.to_string_lossy(), nanos));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

    if let Err(source) = file.write_all(contents) {
        drop(file);
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: tmp_path, source });
    }

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;
    }
    drop(file);

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(&parent)
                .map_err(|source| StoreError::Io { path: parent.clone(), source })?;
            dir.sync_all().map_err(|source| StoreError::Io { path: parent.clone(), source })?;
        }
    }

    Ok(())
}
