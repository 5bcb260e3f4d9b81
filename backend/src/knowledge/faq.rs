//! FAQ dataset
//!
//! A JSON array of `{ "question", "answer" }` records loaded once at startup.
//! Lookups are exact after trimming and lower-casing; there is no fuzzy match.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Confidence reported for dataset answers
pub const DATASET_CONFIDENCE: u8 = 95;

/// Model/source label for dataset answers
pub const DATASET_LABEL: &str = "Local Dataset";

/// A single question/answer pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question text as authored
    #[serde(default)]
    pub question: String,
    /// Canned answer
    #[serde(default)]
    pub answer: String,
}

/// Errors that can occur while reading the dataset file
#[derive(Error, Debug)]
pub enum FaqLoadError {
    /// The file exists but could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a JSON array of records
    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only FAQ list
#[derive(Debug, Clone, Default)]
pub struct FaqStore {
    entries: Vec<FaqEntry>,
}

impl FaqStore {
    /// Create a store from in-memory entries
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    /// Read and parse a dataset file
    ///
    /// # Errors
    /// * `FaqLoadError::Io` if the file cannot be read
    /// * `FaqLoadError::Parse` if it is not a JSON array of records
    pub fn from_file(path: &Path) -> Result<Self, FaqLoadError> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<FaqEntry> = serde_json::from_str(&raw)?;
        Ok(Self::new(entries))
    }

    /// Load the dataset, degrading to an empty store
    ///
    /// A missing file is normal. An unreadable or invalid file is logged and
    /// treated as empty, so exact-match lookups always miss.
    pub fn load_or_empty(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No FAQ dataset found, exact-match disabled");
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(store) => {
                tracing::info!(
                    path = %path.display(),
                    entries = store.len(),
                    "Loaded FAQ dataset"
                );
                store
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load FAQ dataset");
                Self::default()
            }
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in file order
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Exact-match lookup
    ///
    /// The first entry whose trimmed, lower-cased question equals the trimmed,
    /// lower-cased message decides the result; an empty answer is a miss.
    pub fn lookup(&self, message: &str) -> Option<&str> {
        let needle = normalize(message);
        if needle.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| normalize(&entry.question) == needle)
            .map(|entry| entry.answer.as_str())
            .filter(|answer| !answer.is_empty())
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn store() -> FaqStore {
        FaqStore::new(vec![
            FaqEntry {
                question: "Admission process".to_string(),
                answer: "Admissions follow KCET/COMEDK.".to_string(),
            },
            FaqEntry {
                question: "  Hostel facilities ".to_string(),
                answer: "Separate hostels for boys and girls.".to_string(),
            },
            FaqEntry {
                question: "Empty answer".to_string(),
                answer: String::new(),
            },
        ])
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let store = store();
        for entry in store.entries().iter().filter(|e| !e.answer.is_empty()) {
            let variants = [
                entry.question.clone(),
                entry.question.to_uppercase(),
                format!("  {}\t\n", entry.question.to_lowercase()),
            ];
            for variant in variants {
                assert_eq!(store.lookup(&variant), Some(entry.answer.as_str()));
            }
        }
    }

    #[test]
    fn test_lookup_has_no_partial_match() {
        let store = store();
        assert_eq!(store.lookup("Admission"), None);
        assert_eq!(store.lookup("Admission process please"), None);
        assert_eq!(store.lookup(""), None);
    }

    #[test]
    fn test_empty_answer_is_a_miss() {
        assert_eq!(store().lookup("empty answer"), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"question": "Where is MITK?", "answer": "Kundapura"}}, {{"question": "No answer"}}]"#
        )
        .unwrap();

        let store = FaqStore::load_or_empty(file.path());
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("where is mitk?"), Some("Kundapura"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FaqStore::load_or_empty(&dir.path().join("missing.json"));
        assert!(store.is_empty());
        assert_eq!(store.lookup("anything"), None);
    }

    #[test]
    fn test_invalid_file_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(FaqStore::from_file(file.path()).is_err());
        assert!(FaqStore::load_or_empty(file.path()).is_empty());
    }
}
