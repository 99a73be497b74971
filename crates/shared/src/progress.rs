//! Persisted progress layout.
//!
//! ```json
//! {
//!   "answeredQuestions": [1, 4],
//!   "savedForLater": [2],
//!   "currentFilters": [1, 2, 3],
//!   "shownQuestionsPerCategory": { "1": 3 },
//!   "filtersInitialized": true
//! }
//! ```
//!
//! Decoding is lenient: every field is optional, negative counts read as 0,
//! non-numeric category keys are dropped, and duplicate ids collapse. A field
//! of the wrong shape, or an element that is not an integer, is dropped on
//! its own; the rest of the snapshot survives.
//! `filtersInitialized` is optional for snapshots written before it existed.

use std::collections::BTreeMap;

use deeper_domain::{CategoryId, QuestionId, UserProgress};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Storage key constants
pub mod storage_keys {
    pub const PROGRESS: &str = "deeper-progress";
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Malformed progress snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressSnapshot {
    #[serde(deserialize_with = "lenient_ids")]
    pub answered_questions: Vec<i64>,
    #[serde(deserialize_with = "lenient_ids")]
    pub saved_for_later: Vec<i64>,
    #[serde(deserialize_with = "lenient_ids")]
    pub current_filters: Vec<i64>,
    #[serde(deserialize_with = "lenient_counts")]
    pub shown_questions_per_category: BTreeMap<String, i64>,
    #[serde(
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub filters_initialized: Option<bool>,
}

fn lenient_ids<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!(value = %other, "Dropping progress id list that is not an array");
            return Ok(Vec::new());
        }
    };

    let total = items.len();
    let ids: Vec<i64> = items.iter().filter_map(Value::as_i64).collect();
    if ids.len() < total {
        tracing::warn!(dropped = total - ids.len(), "Dropping non-integer ids from progress");
    }
    Ok(ids)
}

fn lenient_counts<'de, D>(deserializer: D) -> Result<BTreeMap<String, i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries,
        Value::Null => return Ok(BTreeMap::new()),
        other => {
            tracing::warn!(value = %other, "Dropping shown counts that are not an object");
            return Ok(BTreeMap::new());
        }
    };

    let mut counts = BTreeMap::new();
    for (key, value) in entries {
        match value.as_i64() {
            Some(count) => {
                counts.insert(key, count);
            }
            None => tracing::warn!(key = %key, value = %value, "Dropping non-integer shown count"),
        }
    }
    Ok(counts)
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_null() && !value.is_boolean() {
        tracing::warn!(value = %value, "Ignoring non-boolean filtersInitialized");
    }
    Ok(value.as_bool())
}

impl ProgressSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Normalize into domain progress.
    pub fn into_progress(self) -> UserProgress {
        let mut shown = Vec::with_capacity(self.shown_questions_per_category.len());
        for (key, count) in self.shown_questions_per_category {
            match key.trim().parse::<i64>() {
                Ok(raw) => shown.push((CategoryId::new(raw), clamp_count(count))),
                Err(_) => {
                    tracing::warn!(key = %key, "Dropping non-numeric category key from progress");
                }
            }
        }

        UserProgress::from_parts(
            self.answered_questions.into_iter().map(QuestionId::new),
            self.saved_for_later.into_iter().map(QuestionId::new),
            self.current_filters.into_iter().map(CategoryId::new),
            shown,
            self.filters_initialized,
        )
    }
}

impl From<&UserProgress> for ProgressSnapshot {
    fn from(progress: &UserProgress) -> Self {
        Self {
            answered_questions: progress.answered().iter().map(|id| id.as_i64()).collect(),
            saved_for_later: progress.saved_for_later().iter().map(|id| id.as_i64()).collect(),
            current_filters: progress.current_filters().iter().map(|id| id.as_i64()).collect(),
            shown_questions_per_category: progress
                .shown_per_category()
                .iter()
                .map(|(id, count)| (id.to_string(), i64::from(*count)))
                .collect(),
            filters_initialized: Some(progress.filters_initialized()),
        }
    }
}

fn clamp_count(count: i64) -> u32 {
    u32::try_from(count.max(0)).unwrap_or(u32::MAX)
}
