//! Yearly planning document model.
//!
//! One `AnnualData` document describes a year: scoring settings, the
//! configured dimensions, and per-dimension goals and monthly tasks.
//! Tasks are also addressable on their own through the task store.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const QUARTERS_PER_YEAR: usize = 4;
pub const MONTHS_PER_YEAR: usize = 12;

const DEFAULT_COMPLETED_SCORE: f64 = 100.0;
const DEFAULT_IN_PROGRESS_SCORE: f64 = 50.0;
const DEFAULT_NOT_STARTED_SCORE: f64 = 0.0;

/// All stored years, ordered by year key.
pub type SystemData = BTreeMap<String, AnnualData>;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "not-started" => Some(Self::NotStarted),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// A single planned task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Points awarded per task status, plus optional per-dimension weights.
///
/// Fields the backend does not know about are kept in `extra` so a
/// load/save cycle never drops settings written by a newer GUI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringSettings {
    pub completed_score: f64,
    pub in_progress_score: f64,
    pub not_started_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_weights: Option<BTreeMap<String, f64>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            completed_score: DEFAULT_COMPLETED_SCORE,
            in_progress_score: DEFAULT_IN_PROGRESS_SCORE,
            not_started_score: DEFAULT_NOT_STARTED_SCORE,
            dimension_weights: None,
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionSettings {
    #[serde(default)]
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualSettings {
    #[serde(default)]
    pub scoring: ScoringSettings,
}

/// Display configuration of a planning dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionConfig {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Goals, tasks and aggregate stats of one dimension for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionData {
    #[serde(default)]
    pub annual_goal: String,
    #[serde(default)]
    pub quarterly_goals: Vec<String>,
    /// One bucket per month, January first.
    #[serde(default)]
    pub monthly_tasks: Vec<Vec<Task>>,
    #[serde(default)]
    pub total_score: f64,
    #[serde(default)]
    pub completed_tasks: u32,
    #[serde(default)]
    pub total_tasks: u32,
    /// Percentage in `0..=100`.
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub settings: DimensionSettings,
}

impl Default for DimensionData {
    fn default() -> Self {
        Self {
            annual_goal: String::new(),
            quarterly_goals: vec![String::new(); QUARTERS_PER_YEAR],
            monthly_tasks: vec![Vec::new(); MONTHS_PER_YEAR],
            total_score: 0.0,
            completed_tasks: 0,
            total_tasks: 0,
            progress: 0,
            settings: DimensionSettings::default(),
        }
    }
}

/// Planning document for one year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualData {
    pub year: String,
    #[serde(default)]
    pub total_score: f64,
    #[serde(default)]
    pub settings: AnnualSettings,
    #[serde(default)]
    pub dimension_configs: Vec<DimensionConfig>,
    #[serde(default)]
    pub dimensions: BTreeMap<String, DimensionData>,
}

impl AnnualData {
    /// Creates an empty document for `year` with default scoring.
    pub fn new(year: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnnualData, DimensionData, Priority, ScoringSettings, Task, TaskStatus};
    use serde_json::json;

    #[test]
    fn default_dimension_has_quarter_and_month_buckets() {
        let data = DimensionData::default();
        assert_eq!(data.quarterly_goals.len(), 4);
        assert_eq!(data.monthly_tasks.len(), 12);
        assert_eq!(data.settings.scoring.completed_score, 100.0);
        assert_eq!(data.settings.scoring.in_progress_score, 50.0);
    }

    #[test]
    fn task_uses_gui_field_names_and_omits_unset_dates() {
        let task = Task {
            id: "t1".to_string(),
            title: "run".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            start_date: Some("2025-01-01".to_string()),
            ..Task::default()
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["status"], "in-progress");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["startDate"], "2025-01-01");
        assert!(value.get("endDate").is_none());
    }

    #[test]
    fn status_and_priority_parse_their_own_labels() {
        for status in [
            TaskStatus::NotStarted,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn scoring_settings_keep_unknown_fields() {
        let raw = json!({
            "completedScore": 10.0,
            "inProgressScore": 5.0,
            "notStartedScore": 0.0,
            "bonusScore": 3
        });
        let settings: ScoringSettings = serde_json::from_value(raw).unwrap();
        assert_eq!(settings.extra["bonusScore"], 3);
        assert!(settings.dimension_weights.is_none());

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["bonusScore"], 3);
        assert!(back.get("dimensionWeights").is_none());
    }

    #[test]
    fn annual_data_decodes_minimal_document() {
        let data: AnnualData = serde_json::from_value(json!({ "year": "2025" })).unwrap();
        assert_eq!(data, AnnualData::new("2025"));
    }
}
