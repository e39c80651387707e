//! Lesson content data model.
//!
//! Content is static JSON authored offline. The tracker never creates or
//! destroys items at runtime — it only assigns statuses to positions inside
//! this tree. The model tolerates both shapes that occur in the content
//! corpus: sections at the lesson top level or nested under `content`, and
//! analogies as either a plain string or a structured object.

use serde::{Deserialize, Serialize};

/// A single study lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique lesson ID, e.g. `D1-LESSON-001`.
    #[serde(alias = "lesson_id")]
    pub id: String,
    /// Human-readable lesson title.
    #[serde(default)]
    pub title: String,
    /// Exam domain number the lesson belongs to. Used only for display
    /// grouping in review views.
    #[serde(default)]
    pub domain: u32,
    /// Ordered sections, when present at the top level.
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Alternative nesting used by part of the corpus.
    #[serde(default)]
    pub content: Option<LessonContent>,
}

/// Wrapper for lessons that nest their sections under `content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonContent {
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Lesson {
    /// The lesson's sections, wherever the corpus put them.
    pub fn sections(&self) -> &[Section] {
        if !self.sections.is_empty() {
            return &self.sections;
        }
        self.content
            .as_ref()
            .map(|c| c.sections.as_slice())
            .unwrap_or(&[])
    }
}

/// One section of a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: Option<String>,
    /// Memory-hook material attached to this section, if any.
    #[serde(default, alias = "memoryHooks")]
    pub memory_hooks: Option<MemoryHooks>,
}

impl Section {
    /// The trackable mistakes in this section, in authored order.
    pub fn mistakes(&self) -> &[Mistake] {
        self.memory_hooks
            .as_ref()
            .map(|h| h.common_mistakes.as_slice())
            .unwrap_or(&[])
    }
}

/// Mnemonic, analogy, and common-mistake material for a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryHooks {
    #[serde(default)]
    pub mnemonic: Option<String>,
    #[serde(default)]
    pub analogy: Option<Analogy>,
    #[serde(default)]
    pub common_mistakes: Vec<Mistake>,
}

/// An analogy is either a plain sentence or a structured concept with an
/// explanation; the corpus contains both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Analogy {
    Text(String),
    Structured {
        #[serde(default)]
        concept: Option<String>,
        #[serde(default)]
        explanation: Option<String>,
    },
}

/// A single documented misconception — the trackable item.
///
/// Identity is not a field here; it is derived from the item's position
/// (lesson, section index, mistake index).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mistake {
    /// The misconception itself.
    pub mistake: String,
    /// Why the misconception is wrong.
    #[serde(default)]
    pub why_wrong: Option<String>,
    /// The correct understanding.
    #[serde(default)]
    pub correct: Option<String>,
}
