//! Tabular report over a computed schedule.

use crate::calculations::ScheduleSummary;
use crate::schedule::Schedule;
use polars::prelude::PlSmallStr;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataframe error: {0}")]
    DataFrame(#[from] PolarsError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub name: String,
    pub duration: i64,
    pub es: i64,
    pub ef: i64,
    pub ls: i64,
    pub lf: i64,
    pub slack: i64,
    pub critical: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub project_name: String,
    pub time_unit: String,
    pub rows: Vec<ReportRow>,
    pub summary: ScheduleSummary,
}

impl ScheduleReport {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let rows = schedule
            .activities()
            .iter()
            .map(|activity| ReportRow {
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

        Self {
            project_name: schedule.metadata().project_name.clone(),
            time_unit: schedule.metadata().time_unit.clone(),
            rows,
            summary: schedule.summary().clone(),
        }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let names: Vec<&str> = self.rows.iter().map(|r| r.name.as_str()).collect();
        let int_column = |label: &'static str, f: fn(&ReportRow) -> i64| {
            let values: Vec<i64> = self.rows.iter().map(f).collect();
            Series::new(PlSmallStr::from_static(label), values).into_column()
        };
        let critical: Vec<bool> = self.rows.iter().map(|r| r.critical).collect();

        DataFrame::new(vec![
            Series::new(PlSmallStr::from_static("name"), names).into_column(),
            int_column("duration", |r| r.duration),
            int_column("es", |r| r.es),
            int_column("ef", |r| r.ef),
            int_column("ls", |r| r.ls),
            int_column("lf", |r| r.lf),
            int_column("slack", |r| r.slack),
            Series::new(PlSmallStr::from_static("critical"), critical).into_column(),
        ])
    }

    pub fn render_text_table(&self) -> PolarsResult<String> {
        Ok(render_df_as_text_table(&self.to_dataframe()?))
    }

    /// `Critical path: A - B - C`, zero-slack activities in registry order.
    pub fn critical_path_line(&self) -> String {
        format!("Critical path: {}", self.summary.critical_path.join(" - "))
    }

    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_writer(File::create(path)?);
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!(path = %path.display(), rows = self.rows.len(), "wrote csv report");
        Ok(())
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let path = path.as_ref();
        serde_json::to_writer_pretty(File::create(path)?, self)?;
        info!(path = %path.display(), rows = self.rows.len(), "wrote json report");
        Ok(())
    }
}

fn cell_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::Boolean(true) => "yes".to_string(),
        AnyValue::Boolean(false) => String::new(),
        other => other.to_string(),
    }
}

pub fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let row = columns
            .iter()
            .map(|col| col.get(row_idx).map(|av| cell_text(&av)).unwrap_or_default())
            .collect();
        cells.push(row);
    }

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for row in &cells {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.len());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |values: &[String]| {
        let mut line = String::from("|");
        for (ci, value) in values.iter().enumerate() {
            line.push(' ');
            line.push_str(value);
            line.push_str(&" ".repeat(widths[ci].saturating_sub(value.len())));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(col_names.as_slice()));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        out.push_str(&render_row(row.as_slice()));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}
