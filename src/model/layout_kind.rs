// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// How a slide body is placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayoutKind {
    /// Every line trimmed and centred on its own.
    Center,
    /// Preformatted source; the block keeps its indentation and is centred as a whole.
    Code,
    /// Prose or bullet lists laid out like [`LayoutKind::Code`], but styled as text.
    Block,
}

impl LayoutKind {
    pub const ALL: [Self; 3] = [Self::Center, Self::Code, Self::Block];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Code => "code",
            Self::Block => "block",
        }
    }

    /// Whether lines keep their relative indentation when rendered.
    pub fn is_preformatted(self) -> bool {
        !matches!(self, Self::Center)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layout tag that is not one of `center`, `code` or `block`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLayoutKind {
    kind: String,
}

impl InvalidLayoutKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for InvalidLayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid layout kind {:?} (expected center, code or block)", self.kind)
    }
}

impl std::error::Error for InvalidLayoutKind {}

impl FromStr for LayoutKind {
    type Err = InvalidLayoutKind;

    /// Accepts the bare tag (`code`) and the symbol form (`:code`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.strip_prefix(':').unwrap_or(s);
        match tag {
            "center" => Ok(Self::Center),
            "code" => Ok(Self::Code),
            "block" => Ok(Self::Block),
            _ => Err(InvalidLayoutKind::new(s)),
        }
    }
}
