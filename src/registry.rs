use crate::activity::Activity;
use crate::activity_validation;
use crate::error::RegistryError;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Ordered list of activities plus a name -> index lookup.
///
/// Every accepted activity only names predecessors with a smaller index, so
/// insertion order is always a valid topological order.
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    activities: Vec<Activity>,
    index: HashMap<String, usize>,
    /// Earliest finish per activity, kept in step with `activities`.
    finishes: Vec<i64>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends an activity, returning its index.
    pub fn add_activity<I, S>(
        &mut self,
        name: &str,
        duration: i64,
        predecessors: I,
    ) -> Result<usize, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let predecessors: Vec<String> = predecessors.into_iter().map(Into::into).collect();

        let finish = match activity_validation::validate_declaration(
            &self.index,
            &self.finishes,
            name,
            duration,
            &predecessors,
        ) {
            Ok(finish) => finish,
            Err(err) => {
                warn!(activity = name, kind = err.kind(), "rejected activity: {err}");
                return Err(err);
            }
        };

        let idx = self.activities.len();
        self.finishes.push(finish);
        self.activities
            .push(Activity::new(name, duration).with_predecessors(predecessors));
        self.index.insert(name.to_string(), idx);
        debug!(activity = name, index = idx, duration, "registered activity");
        Ok(idx)
    }

    pub fn resolve(&self, name: &str) -> Result<usize, RegistryError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownActivity {
                name: name.to_string(),
            })
    }

    /// Activities in insertion order.
    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, idx: usize) -> Option<&Activity> {
        self.activities.get(idx)
    }

    pub fn find(&self, name: &str) -> Option<&Activity> {
        self.index.get(name).map(|&idx| &self.activities[idx])
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// `(predecessor, successor)` name pairs, grouped by successor in insertion order.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.activities
            .iter()
            .flat_map(|activity| {
                activity
                    .predecessors
                    .iter()
                    .map(move |pred| (pred.clone(), activity.name.clone()))
            })
            .collect()
    }

    /// Same as [`edges`](Self::edges) but by index.
    pub fn index_edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for (succ_idx, activity) in self.activities.iter().enumerate() {
            for pred in &activity.predecessors {
                if let Some(&pred_idx) = self.index.get(pred) {
                    edges.push((pred_idx, succ_idx));
                }
            }
        }
        edges
    }

    pub(crate) fn activities_mut(&mut self) -> &mut [Activity] {
        &mut self.activities
    }
}
