//! JSON lesson loading and validation.

use std::path::Path;

use anyhow::{Context, Result};

use crate::content::Lesson;

/// Parse a single lesson JSON file.
pub fn load_lesson(path: &Path) -> Result<Lesson> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read lesson file: {}", path.display()))?;
    load_lesson_str(&content, path)
}

/// Parse a lesson from a JSON string (useful for testing).
pub fn load_lesson_str(content: &str, source_path: &Path) -> Result<Lesson> {
    serde_json::from_str(content)
        .with_context(|| format!("failed to parse lesson JSON: {}", source_path.display()))
}

/// Recursively load all `.json` lesson files from a directory.
///
/// Files that fail to parse are skipped with a warning so one bad file
/// never takes down the whole content tree.
pub fn load_content_dir(dir: &Path) -> Result<Vec<Lesson>> {
    let mut lessons = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            lessons.extend(load_content_dir(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            match load_lesson(&path) {
                Ok(lesson) => lessons.push(lesson),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(lessons)
}

/// A warning from content validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The lesson ID (if applicable).
    pub lesson_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate loaded lessons for common authoring issues.
pub fn validate_lessons(lessons: &[Lesson]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate lesson IDs
    let mut seen_ids = std::collections::HashSet::new();
    for lesson in lessons {
        if !seen_ids.insert(&lesson.id) {
            warnings.push(ValidationWarning {
                lesson_id: Some(lesson.id.clone()),
                message: format!("duplicate lesson ID: {}", lesson.id),
            });
        }
    }

    for lesson in lessons {
        if lesson.sections().is_empty() {
            warnings.push(ValidationWarning {
                lesson_id: Some(lesson.id.clone()),
                message: "lesson has no sections".into(),
            });
        }

        if lesson.domain == 0 {
            warnings.push(ValidationWarning {
                lesson_id: Some(lesson.id.clone()),
                message: "domain is missing or zero".into(),
            });
        }

        // A lesson ID ending in two numeric hyphen-tokens keeps the item ID
        // encoding parseable here (parsing is right-anchored), but the bare
        // lesson ID itself then parses as a valid item ID, and external
        // consumers splitting on hyphens will misread it. Flag it for the
        // content author.
        if ends_in_two_numeric_tokens(&lesson.id) {
            warnings.push(ValidationWarning {
                lesson_id: Some(lesson.id.clone()),
                message: format!(
                    "lesson ID {} ends in a numeric hyphen-token; encoded item IDs become ambiguous to naive consumers",
                    lesson.id
                ),
            });
        }

        for (section_idx, section) in lesson.sections().iter().enumerate() {
            for (mistake_idx, mistake) in section.mistakes().iter().enumerate() {
                if mistake.mistake.trim().is_empty() {
                    warnings.push(ValidationWarning {
                        lesson_id: Some(lesson.id.clone()),
                        message: format!(
                            "empty mistake text at section {section_idx}, mistake {mistake_idx}"
                        ),
                    });
                }
            }
        }
    }

    warnings
}

fn ends_in_two_numeric_tokens(lesson_id: &str) -> bool {
    let mut tokens = lesson_id.rsplit('-');
    let numeric =
        |t: Option<&str>| t.is_some_and(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()));
    numeric(tokens.next()) && numeric(tokens.next())
}
