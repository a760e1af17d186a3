//! Page sections and their fixed navigation order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// One full-viewport panel of the landing page.
///
/// The string form doubles as the DOM id of the panel element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    Mission,
    Founders,
    Pricing,
    /// Trailing panel: newsletter signup followed by the footer.
    Newsletter,
}

impl SectionId {
    /// Every section, in page order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Mission,
        Self::Founders,
        Self::Pricing,
        Self::Newsletter,
    ];

    /// DOM id of the panel element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Mission => "mission",
            Self::Founders => "founders",
            Self::Pricing => "pricing",
            Self::Newsletter => "newsletter",
        }
    }

    /// Label shown in the navbar.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Mission => "Mission",
            Self::Founders => "Team",
            Self::Pricing => "Pricing",
            Self::Newsletter => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

/// Ordered, immutable sequence of sections.
///
/// Index is the canonical position; the id resolves the element to scroll to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSequence {
    ids: Vec<SectionId>,
}

impl SectionSequence {
    /// Build a sequence from an explicit order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `ids` is empty or repeats a section.
    pub fn new(ids: Vec<SectionId>) -> Result<Self> {
        if ids.is_empty() {
            return Err(Error::invalid_config("sections", "must not be empty"));
        }
        let has_duplicate = ids
            .iter()
            .enumerate()
            .any(|(i, id)| ids.iter().skip(i.saturating_add(1)).any(|other| other == id));
        if has_duplicate {
            return Err(Error::invalid_config("sections", "must not repeat a section"));
        }
        Ok(Self { ids })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Index of the last section.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.ids.len().saturating_sub(1)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<SectionId> {
        self.ids.get(index).copied()
    }

    #[must_use]
    pub fn index_of(&self, id: SectionId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    /// Apply a signed step to `index`, returning `None` when it leaves the sequence.
    #[must_use]
    pub fn offset(&self, index: usize, step: i8) -> Option<usize> {
        let target = match step {
            s if s < 0 => index.checked_sub(usize::from(s.unsigned_abs()))?,
            s => index.checked_add(usize::from(s.unsigned_abs()))?,
        };
        (target < self.ids.len()).then_some(target)
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.ids.iter().copied()
    }
}

impl Default for SectionSequence {
    fn default() -> Self {
        Self {
            ids: SectionId::ALL.to_vec(),
        }
    }
}
