//! Graph export: activities as nodes, precedence relations as directed edges.

use crate::schedule::Schedule;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::{info, warn};

pub mod html;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("could not open '{path}' in a browser: {reason}")]
    Browser { path: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub name: String,
    pub duration: i64,
    pub es: i64,
    pub ef: i64,
    pub ls: i64,
    pub lf: i64,
    pub slack: i64,
    pub critical: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    pub from_name: String,
    pub to_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphExport {
    pub project_name: String,
    pub generated_at: DateTime<Utc>,
    pub project_finish: i64,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphExport {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let activities = schedule.activities();
        let nodes = activities
            .iter()
            .enumerate()
            .map(|(id, activity)| GraphNode {
                id,
                name: activity.name.clone(),
                duration: activity.duration,
                es: activity.early_start.unwrap_or_default(),
                ef: activity.early_finish.unwrap_or_default(),
                ls: activity.late_start.unwrap_or_default(),
                lf: activity.late_finish.unwrap_or_default(),
                slack: activity.slack.unwrap_or_default(),
                critical: activity.is_critical(),
            })
            .collect();

        let edges = schedule
            .registry()
            .index_edges()
            .into_iter()
            .map(|(from, to)| GraphEdge {
                from,
                to,
                from_name: activities[from].name.clone(),
                to_name: activities[to].name.clone(),
            })
            .collect();

        Self {
            project_name: schedule.project_name().to_string(),
            generated_at: Utc::now(),
            project_finish: schedule.project_finish(),
            nodes,
            edges,
        }
    }

    pub fn render_html(&self) -> Result<String, ExportError> {
        html::render(self)
    }

    pub fn write_html<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        std::fs::write(path, self.render_html()?)?;
        info!(path = %path.display(), nodes = self.nodes.len(), "wrote graph html");
        Ok(())
    }
}

/// Hands the file to the platform's default opener.
pub fn open_in_browser<P: AsRef<Path>>(path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut command = if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    };

    let browser_error = |reason: String| ExportError::Browser {
        path: path.display().to_string(),
        reason,
    };
    let status = command.status().map_err(|err| browser_error(err.to_string()))?;
    if !status.success() {
        warn!(path = %path.display(), %status, "browser launcher exited with failure");
        return Err(browser_error(format!("launcher exited with {status}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_carries_nodes_and_named_edges() {
        let mut schedule = Schedule::new();
        schedule.add_activity("A", 3, Vec::<String>::new()).unwrap();
        schedule.add_activity("B", 2, ["A"]).unwrap();

        let export = GraphExport::from_schedule(&schedule);
        assert_eq!(export.nodes.len(), 2);
        assert!(export.nodes.iter().all(|n| n.critical));
        assert_eq!(
            export.edges,
            vec![GraphEdge {
                from: 0,
                to: 1,
                from_name: "A".into(),
                to_name: "B".into(),
            }]
        );
        assert_eq!(export.project_finish, 5);
    }
}
