use serde::{Deserialize, Serialize};

/// A named unit of work with a duration and finish-to-start predecessors.
///
/// The time fields are derived: they stay `None` until the schedule has been
/// computed and are overwritten on every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub duration: i64,
    #[serde(default)]
    pub predecessors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_finish: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_finish: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<i64>,
}

impl Activity {
    pub fn new(name: impl Into<String>, duration: i64) -> Self {
        Self {
            name: name.into(),
            duration,
            predecessors: Vec::new(),
            early_start: None,
            early_finish: None,
            late_start: None,
            late_finish: None,
            slack: None,
        }
    }

    pub fn with_predecessors<I, S>(mut self, predecessors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predecessors = predecessors.into_iter().map(Into::into).collect();
        self
    }

    /// True once the schedule has been computed and this activity has no float.
    pub fn is_critical(&self) -> bool {
        self.slack == Some(0)
    }

    pub fn is_scheduled(&self) -> bool {
        self.early_start.is_some() && self.late_start.is_some()
    }
}

/// Raw activity definition as produced by input collection or file import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityInput {
    pub name: String,
    pub duration: i64,
    #[serde(default)]
    pub predecessors: Vec<String>,
}

impl ActivityInput {
    pub fn new<I, S>(name: impl Into<String>, duration: i64, predecessors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            duration,
            predecessors: predecessors.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&Activity> for ActivityInput {
    fn from(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            duration: activity.duration,
            predecessors: activity.predecessors.clone(),
        }
    }
}
