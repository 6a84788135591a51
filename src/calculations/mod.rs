pub mod backward_pass;
pub mod forward_pass;

use crate::graph::ScheduleDag;
use crate::registry::ActivityRegistry;
use backward_pass::BackwardPass;
use forward_pass::ForwardPass;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub activity_count: usize,
    pub critical_count: usize,
    /// Zero-slack activities in registry order.
    pub critical_path: Vec<String>,
    pub project_finish: i64,
}

impl ScheduleSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("activities={}", self.activity_count));
        parts.push(format!("critical={}", self.critical_count));
        parts.push(format!("finish={}", self.project_finish));
        if !self.critical_path.is_empty() {
            parts.push(format!("path={}", self.critical_path.join("->")));
        }
        parts.join(", ")
    }
}

/// Recomputes ES/EF/LS/LF/slack for every activity in place.
///
/// Never fails: registry validation already guarantees that predecessors
/// precede their successors.
pub fn compute_schedule(registry: &mut ActivityRegistry) -> ScheduleSummary {
    let dag = ScheduleDag::build(registry);

    let earlies = ForwardPass::new(&dag).execute();
    let project_finish = earlies.iter().map(|&(_, ef)| ef).max().unwrap_or(0);
    debug!(project_finish, "forward pass complete");

    let lates = BackwardPass::new(&dag).execute(project_finish);
    debug!("backward pass complete");

    let mut critical_path = Vec::new();
    for (idx, activity) in registry.activities_mut().iter_mut().enumerate() {
        let (early_start, early_finish) = earlies[idx];
        let (late_start, late_finish) = lates[idx];
        let slack = late_start - early_start;

        activity.early_start = Some(early_start);
        activity.early_finish = Some(early_finish);
        activity.late_start = Some(late_start);
        activity.late_finish = Some(late_finish);
        activity.slack = Some(slack);

        if slack == 0 {
            critical_path.push(activity.name.clone());
        }
    }

    let summary = ScheduleSummary {
        activity_count: registry.len(),
        critical_count: critical_path.len(),
        critical_path,
        project_finish,
    };
    info!(
        activities = summary.activity_count,
        critical = summary.critical_count,
        project_finish,
        "schedule computed"
    );
    summary
}
