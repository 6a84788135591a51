use super::{ImportError, ImportResult};
use crate::activity::ActivityInput;
use crate::input;
use crate::metadata::ScheduleMetadata;
use crate::schedule::Schedule;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::info;

#[derive(Deserialize)]
#[serde(untagged)]
enum ActivityFile {
    List(Vec<ActivityInput>),
    Project {
        #[serde(default)]
        metadata: Option<ScheduleMetadata>,
        activities: Vec<ActivityInput>,
    },
}

#[derive(Deserialize)]
struct ActivityCsvRecord {
    name: String,
    duration: i64,
    #[serde(default)]
    predecessors: String,
}

fn invalid_data(record: usize) -> impl Fn(input::InputError) -> ImportError {
    move |err| ImportError::InvalidData {
        record,
        message: err.to_string(),
    }
}

impl ActivityCsvRecord {
    fn into_input(self, record: usize) -> ImportResult<ActivityInput> {
        let name = input::parse_name(&self.name).map_err(invalid_data(record))?;
        // Inside a CSV field predecessors may also be separated by ';'.
        let predecessors = input::parse_predecessors(&self.predecessors.replace(';', ","))
            .map_err(invalid_data(record))?;
        Ok(ActivityInput {
            name,
            duration: self.duration,
            predecessors,
        })
    }
}

/// Applies the console's name rules to a JSON record and its predecessor list.
fn check_json_input(activity: ActivityInput, record: usize) -> ImportResult<ActivityInput> {
    let name = input::parse_name(&activity.name).map_err(invalid_data(record))?;
    let predecessors = activity
        .predecessors
        .iter()
        .map(|pred| input::parse_name(pred))
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid_data(record))?;
    Ok(ActivityInput {
        name,
        duration: activity.duration,
        predecessors,
    })
}

fn build_schedule(
    metadata: ScheduleMetadata,
    inputs: Vec<ActivityInput>,
) -> ImportResult<Schedule> {
    let mut schedule = Schedule::new_with_metadata(metadata);
    if let Err(source) = schedule.add_activities(inputs) {
        // Everything before the rejected record was accepted.
        return Err(ImportError::Registry {
            record: schedule.len() + 1,
            source,
        });
    }
    Ok(schedule)
}

/// Loads either a bare array of activities or `{ "metadata": .., "activities": [..] }`.
pub fn load_activities_from_json<P: AsRef<Path>>(path: P) -> ImportResult<Schedule> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let (metadata, inputs) = match serde_json::from_reader(file)? {
        ActivityFile::List(inputs) => (ScheduleMetadata::default(), inputs),
        ActivityFile::Project {
            metadata,
            activities,
        } => (metadata.unwrap_or_default(), activities),
    };
    let inputs = inputs
        .into_iter()
        .enumerate()
        .map(|(offset, activity)| check_json_input(activity, offset + 1))
        .collect::<ImportResult<Vec<_>>>()?;
    let schedule = build_schedule(metadata, inputs)?;
    info!(path = %path.display(), activities = schedule.len(), "imported activities from json");
    Ok(schedule)
}

/// Loads `name,duration,predecessors` rows.
pub fn load_activities_from_csv<P: AsRef<Path>>(path: P) -> ImportResult<Schedule> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    let mut inputs = Vec::new();
    for (offset, record) in reader.deserialize::<ActivityCsvRecord>().enumerate() {
        inputs.push(record?.into_input(offset + 1)?);
    }
    let schedule = build_schedule(ScheduleMetadata::default(), inputs)?;
    info!(path = %path.display(), activities = schedule.len(), "imported activities from csv");
    Ok(schedule)
}

/// Picks the loader from the file extension, defaulting to JSON.
pub fn load_activities_from_path<P: AsRef<Path>>(path: P) -> ImportResult<Schedule> {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => load_activities_from_csv(path),
        _ => load_activities_from_json(path),
    }
}
