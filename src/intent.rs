use crate::error::{AppError, AppResult};
use crate::reminder::ReminderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discrete mutation request issued by the presentation layer.
///
/// Adapters serialize these as JSON across the view boundary; the session
/// applies them one at a time, each to completion before any read runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    Add {
        message: String,
        due_time: DateTime<Utc>,
    },
    Remove {
        id: ReminderId,
    },
    Complete {
        id: ReminderId,
    },
    ClearAll,
}

impl Intent {
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::parse(e.to_string()))
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::parse(e.to_string()))
    }
}
