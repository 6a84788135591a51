pub mod activity;
pub(crate) mod activity_validation;
pub mod calculations;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod import;
pub mod input;
pub mod logging;
pub mod metadata;
pub mod registry;
pub mod report;
pub mod schedule;

pub use activity::{Activity, ActivityInput};
pub use calculations::{ScheduleSummary, compute_schedule};
pub use config::{ConfigError, CpmConfig};
pub use error::RegistryError;
pub use export::{ExportError, GraphEdge, GraphExport, GraphNode, open_in_browser};
pub use import::{
    ImportError, load_activities_from_csv, load_activities_from_json, load_activities_from_path,
};
pub use input::InputError;
pub use metadata::ScheduleMetadata;
pub use registry::ActivityRegistry;
pub use report::{ReportError, ReportRow, ScheduleReport};
pub use schedule::Schedule;
