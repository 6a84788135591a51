use crate::activity::{Activity, ActivityInput};
use crate::calculations::{self, ScheduleSummary};
use crate::error::RegistryError;
use crate::metadata::ScheduleMetadata;
use crate::registry::ActivityRegistry;

/// Project metadata plus an activity registry whose derived times are kept current.
///
/// Every structural change recomputes the whole schedule before returning, so
/// readers never observe stale ES/EF/LS/LF values.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    metadata: ScheduleMetadata,
    registry: ActivityRegistry,
    summary: ScheduleSummary,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_metadata(metadata: ScheduleMetadata) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }

    /// Builds a schedule from raw definitions, stopping at the first rejection.
    pub fn from_inputs<I>(metadata: ScheduleMetadata, inputs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = ActivityInput>,
    {
        let mut schedule = Self::new_with_metadata(metadata);
        schedule.add_activities(inputs)?;
        Ok(schedule)
    }

    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: ScheduleMetadata) {
        self.metadata = metadata;
    }

    pub fn project_name(&self) -> &str {
        &self.metadata.project_name
    }

    pub fn registry(&self) -> &ActivityRegistry {
        &self.registry
    }

    pub fn activities(&self) -> &[Activity] {
        self.registry.all()
    }

    pub fn find_activity(&self, name: &str) -> Result<&Activity, RegistryError> {
        let idx = self.registry.resolve(name)?;
        self.registry
            .get(idx)
            .ok_or_else(|| RegistryError::UnknownActivity {
                name: name.to_string(),
            })
    }

    pub fn summary(&self) -> &ScheduleSummary {
        &self.summary
    }

    pub fn critical_path(&self) -> &[String] {
        &self.summary.critical_path
    }

    pub fn project_finish(&self) -> i64 {
        self.summary.project_finish
    }

    pub fn edges(&self) -> Vec<(String, String)> {
        self.registry.edges()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Registers an activity and recomputes the schedule.
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
        let idx = self.registry.add_activity(name, duration, predecessors)?;
        self.refresh();
        Ok(idx)
    }

    /// Registers each definition in order. Entries accepted before a
    /// rejection stay registered.
    pub fn add_activities<I>(&mut self, inputs: I) -> Result<usize, RegistryError>
    where
        I: IntoIterator<Item = ActivityInput>,
    {
        let mut added = 0;
        let mut outcome = Ok(());
        for input in inputs {
            match self
                .registry
                .add_activity(&input.name, input.duration, input.predecessors)
            {
                Ok(_) => added += 1,
                Err(err) => {
                    outcome = Err(err);
                    break;
                }
            }
        }
        if added > 0 {
            self.refresh();
        }
        outcome.map(|_| added)
    }

    /// Recomputes every derived time field from scratch.
    pub fn refresh(&mut self) -> &ScheduleSummary {
        self.summary = calculations::compute_schedule(&mut self.registry);
        &self.summary
    }

    pub fn inputs(&self) -> Vec<ActivityInput> {
        self.activities().iter().map(ActivityInput::from).collect()
    }

    /// Drops all activities and derived results, keeping the metadata.
    pub fn clear(&mut self) {
        self.registry = ActivityRegistry::new();
        self.summary = ScheduleSummary::default();
    }
}
