use std::fs;
use std::io::{self, Read, Write};

use tracing::info;

use crate::cli::commands::RunArgs;
use crate::cli::output::{format_event, format_task_list, task_list_to_json};
use crate::model::{Config, TaskStore};
use crate::ops::script::{self, Event};

/// Replay a script and print what happened.
///
/// Text mode prints a status line per command and the final list. JSON mode
/// prints only the final list on stdout; rejections still go to stderr.
pub fn cmd_run(args: &RunArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let lines = script::parse_script(&text)?;
    info!(commands = lines.len(), "replaying script");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut store = TaskStore::new();

    for line in &lines {
        let (next, event) = script::apply_command(&store, &line.command, config.tasks);
        store = next;

        if args.json {
            if let Event::Rejected(e) = &event {
                eprintln!("warning: line {}: {}", line.line, e);
            }
            continue;
        }
        match format_event(&event) {
            Some(status) => writeln!(out, "{}", status)?,
            None => writeln!(out, "{}", format_task_list(&store))?,
        }
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&task_list_to_json(&store))?)?;
    } else {
        writeln!(out, "{}", format_task_list(&store))?;
    }
    Ok(())
}
