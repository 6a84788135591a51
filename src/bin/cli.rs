use anyhow::{Context, Result};
use clap::Parser;
use cpm_schedule::{
    CpmConfig, GraphExport, Schedule, ScheduleReport, input, load_activities_from_csv,
    load_activities_from_json, load_activities_from_path, logging, open_in_browser,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(name = "cli", about = "Critical Path Method scheduler")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Activity definitions to load at startup (.json or .csv)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Prompt for each activity, then show the result menu
    #[arg(short, long)]
    guided: bool,
    /// Where to write the graph page
    #[arg(long)]
    html: Option<PathBuf>,
    /// Do not launch a browser after writing the graph page
    #[arg(long)]
    no_open: bool,
}

struct Console<R> {
    lines: R,
}

impl<R: BufRead> Console<R> {
    /// Prints `prompt` and reads one trimmed line; `None` on end of input or a read error.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.lines.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                warn!(error = %err, "failed to read console input");
                None
            }
        }
    }
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Show the schedule table and critical path\n  add <name> <duration> [preds|-]    Add an activity (preds like A,B)\n  critical                           Show the critical path\n  graph [path]                       Write the graph page and open it\n  compute                            Recompute the schedule\n  load <json|csv> <path>             Replace activities from a file\n  export <json|csv> <path>           Write the schedule table to a file\n  meta show                          Show project metadata\n  meta name <text...>                Update project name\n  meta desc <text...>                Update project description\n  meta unit <text>                   Update the time unit label\n  clear                              Remove all activities\n  quit|exit                          Exit"
    );
}

fn print_table(schedule: &Schedule) {
    let report = ScheduleReport::from_schedule(schedule);
    match report.render_text_table() {
        Ok(table) => {
            println!("\n=== PERT/CPM TABLE ({}) ===", schedule.metadata().time_unit);
            println!("{table}");
            println!("{}", report.critical_path_line());
            println!("Project finish: {}", schedule.project_finish());
        }
        Err(e) => println!("Error rendering table: {e}"),
    }
}

fn print_metadata(schedule: &Schedule) {
    let metadata = schedule.metadata();
    println!("Project name       : {}", metadata.project_name);
    println!("Project description: {}", metadata.project_description);
    println!("Time unit          : {}", metadata.time_unit);
}

fn write_graph(schedule: &Schedule, path: &Path, open: bool) {
    match GraphExport::from_schedule(schedule).write_html(path) {
        Ok(()) => {
            println!("File '{}' written. Open it in a browser.", path.display());
            if open {
                if let Err(e) = open_in_browser(path) {
                    println!("{e}");
                }
            }
        }
        Err(e) => println!("Error writing graph: {e}"),
    }
}

fn run_guided<R: BufRead>(
    console: &mut Console<R>,
    schedule: &mut Schedule,
    config: &CpmConfig,
) -> Option<()> {
    let count = loop {
        let raw = console.ask("How many activities? ")?;
        match raw.parse::<usize>() {
            Ok(n) => break n,
            Err(_) => println!("Invalid number."),
        }
    };

    for i in 0..count {
        println!("\nActivity {}:", i + 1);
        let name = loop {
            let raw = console.ask("Name: ")?;
            match input::parse_name(&raw) {
                Ok(name) if schedule.registry().resolve(&name).is_ok() => {
                    println!("Activity '{name}' already exists.")
                }
                Ok(name) => break name,
                Err(e) => println!("{e}"),
            }
        };
        let duration = loop {
            let raw = console.ask("Duration: ")?;
            match input::parse_duration(&raw) {
                Ok(d) if d < 0 => println!("Duration must not be negative."),
                Ok(d) => break d,
                Err(e) => println!("{e}"),
            }
        };
        loop {
            let raw = console.ask("Predecessors (comma separated, '-' if none): ")?;
            let preds = match input::parse_predecessors(&raw) {
                Ok(preds) => preds,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };
            match schedule.add_activity(&name, duration, preds) {
                Ok(_) => break,
                Err(e) => println!("{e}. Enter only previously declared activities."),
            }
        }
    }

    loop {
        println!("\nMENU:\n1 - Show table\n2 - Show graph\n0 - Exit");
        let choice = console.ask("Choose an option: ")?;
        match choice.as_str() {
            "1" => print_table(schedule),
            "2" => write_graph(schedule, &config.html_output, config.open_browser),
            "0" => {
                println!("Exiting...");
                return Some(());
            }
            _ => println!("Invalid option!"),
        }
    }
}

fn run_repl<R: BufRead>(console: &mut Console<R>, schedule: &mut Schedule, config: &CpmConfig) {
    println!("CPM Scheduler (CLI) - type 'help' for commands\n");
    if !schedule.is_empty() {
        print_table(schedule);
    }

    while let Some(line) = console.ask("> ") {
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => print_table(schedule),
            "critical" => println!("{}", ScheduleReport::from_schedule(schedule).critical_path_line()),
            "compute" => {
                let summary = schedule.refresh();
                println!("Refreshed ({})", summary.to_cli_summary());
            }
            "add" => {
                let rest = parts.collect::<Vec<_>>().join(" ");
                match input::parse_activity_line(&rest) {
                    Ok(activity) => match schedule.add_activity(
                        &activity.name,
                        activity.duration,
                        activity.predecessors,
                    ) {
                        Ok(_) => {
                            println!("Activity added.");
                            print_table(schedule);
                        }
                        Err(e) => println!("Error: {e}"),
                    },
                    Err(e) => println!("Error: {e}\nUsage: add <name> <duration> [preds|-]"),
                }
            }
            "graph" => {
                let path = parts
                    .next()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| config.html_output.clone());
                write_graph(schedule, &path, config.open_browser);
            }
            "load" => match (parts.next(), parts.next()) {
                (Some(format), Some(path)) => {
                    let loaded = match format {
                        "json" => load_activities_from_json(path),
                        "csv" => load_activities_from_csv(path),
                        _ => {
                            println!("Usage: load <json|csv> <path>");
                            continue;
                        }
                    };
                    match loaded {
                        Ok(new_schedule) => {
                            *schedule = new_schedule;
                            println!("Schedule loaded from {path}.");
                            print_table(schedule);
                        }
                        Err(e) => println!("Load error: {e}"),
                    }
                }
                _ => println!("Usage: load <json|csv> <path>"),
            },
            "export" => match (parts.next(), parts.next()) {
                (Some(format), Some(path)) => {
                    let report = ScheduleReport::from_schedule(schedule);
                    let result = match format {
                        "json" => report.write_json(path),
                        "csv" => report.write_csv(path),
                        _ => {
                            println!("Usage: export <json|csv> <path>");
                            continue;
                        }
                    };
                    match result {
                        Ok(()) => println!("Schedule exported to {path}."),
                        Err(e) => println!("Export error: {e}"),
                    }
                }
                _ => println!("Usage: export <json|csv> <path>"),
            },
            "meta" => {
                let sub = parts.next().unwrap_or("");
                let text = parts.collect::<Vec<_>>().join(" ");
                let mut metadata = schedule.metadata().clone();
                match sub {
                    "show" => {
                        print_metadata(schedule);
                        continue;
                    }
                    "name" if !text.is_empty() => metadata.project_name = text,
                    "desc" if !text.is_empty() => metadata.project_description = text,
                    "unit" if !text.is_empty() => metadata.time_unit = text,
                    _ => {
                        println!("Usage: meta <show|name|desc|unit> [text]");
                        continue;
                    }
                }
                schedule.set_metadata(metadata);
                println!("Metadata updated.");
            }
            "clear" => {
                schedule.clear();
                println!("All activities removed.");
            }
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = CpmConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(html) = cli.html {
        config.html_output = html;
    }
    if cli.no_open {
        config.open_browser = false;
    }
    logging::init_tracing(&config.log_filter);

    let mut schedule = match &cli.input {
        Some(path) => load_activities_from_path(path)
            .with_context(|| format!("loading activities from {}", path.display()))?,
        None => Schedule::new(),
    };

    let stdin = io::stdin();
    let mut console = Console {
        lines: stdin.lock(),
    };
    if cli.guided {
        run_guided(&mut console, &mut schedule, &config);
    } else {
        run_repl(&mut console, &mut schedule, &config);
    }
    Ok(())
}
