//! Composite item identity.
//!
//! Every trackable mistake is identified positionally: the lesson it lives
//! in, the index of the section within that lesson, and the index of the
//! mistake within that section. The identity is never stored in content —
//! it is derived from position at render time and carried through the
//! status store.
//!
//! The string encoding is `{lesson}-{section}-{mistake}`. Lesson IDs may
//! themselves contain hyphens (`D1-LESSON-001`), so parsing is anchored to
//! the right: the final two tokens must be bare integers, and everything
//! before them is the lesson ID. This makes the encoding round-trip for any
//! lesson ID, including ones that end in numeric tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseIdError;

/// Identity of a single trackable mistake.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId {
    /// Lesson ID, e.g. `D1-LESSON-001`. May contain internal hyphens.
    pub lesson: String,
    /// Zero-based section index within the lesson.
    pub section: u32,
    /// Zero-based mistake index within the section.
    pub mistake: u32,
}

impl ItemId {
    pub fn new(lesson: impl Into<String>, section: u32, mistake: u32) -> Self {
        Self {
            lesson: lesson.into(),
            section,
            mistake,
        }
    }

    /// The aggregation scope this item belongs to.
    pub fn scope(&self) -> Scope {
        Scope::new(self.lesson.clone(), self.section)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.lesson, self.section, self.mistake)
    }
}

impl FromStr for ItemId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, mistake_tok) = s.rsplit_once('-').ok_or(ParseIdError::MissingParts)?;
        let (lesson, section_tok) = rest.rsplit_once('-').ok_or(ParseIdError::MissingParts)?;

        if lesson.is_empty() {
            return Err(ParseIdError::EmptyLesson);
        }

        Ok(Self {
            lesson: lesson.to_string(),
            section: parse_index(section_tok)?,
            mistake: parse_index(mistake_tok)?,
        })
    }
}

/// Strict index parse: digits only, no sign, no surrounding whitespace.
fn parse_index(token: &str) -> Result<u32, ParseIdError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseIdError::BadIndex(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| ParseIdError::BadIndex(token.to_string()))
}

// Persisted payloads are bare JSON arrays of ID strings, so the serde form
// is the string encoding rather than a struct.
impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A `(lesson, section)` pair used to group items for progress display.
///
/// Matching is structural, field by field. `D1-LESSON-001` section 1 does
/// not match items in section 10, and a lesson whose ID happens to be a
/// prefix of another lesson's ID never captures the other's items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub lesson: String,
    pub section: u32,
}

impl Scope {
    pub fn new(lesson: impl Into<String>, section: u32) -> Self {
        Self {
            lesson: lesson.into(),
            section,
        }
    }

    /// Whether `id` belongs to this scope.
    pub fn contains(&self, id: &ItemId) -> bool {
        id.lesson == self.lesson && id.section == self.section
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lesson, self.section)
    }
}
