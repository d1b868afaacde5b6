use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::cli::commands::{Cli, Commands};
use crate::cli::output::{
    StatusJson, format_archive_listing, format_task_detail, format_task_listing, task_to_json,
};
use crate::io::badge::NullBadge;
use crate::io::config_io;
use crate::io::gateway::JsonFileGateway;
use crate::store::{StoreError, TaskStore};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = PathBuf::from(cli.data_dir.as_deref().unwrap_or("."));

    let config = config_io::read_config(&data_dir)?;
    let gateway = JsonFileGateway::new(data_dir.join(&config.storage.file));
    let mut store = TaskStore::new(Box::new(gateway), Box::new(NullBadge))
        .with_badge_color(config.badge.color)
        .with_seeding(config.seed.samples);
    store.load()?;

    let now = Utc::now();

    match cli.command {
        Commands::List(args) => {
            if args.archived {
                if json {
                    let tasks: Vec<_> =
                        store.archived().iter().map(|t| task_to_json(t, now)).collect();
                    println!("{}", serde_json::to_string_pretty(&tasks)?);
                } else {
                    for line in format_archive_listing(store.archived()) {
                        println!("{}", line);
                    }
                }
            } else if json {
                let tasks: Vec<_> = store.tasks().iter().map(|t| task_to_json(t, now)).collect();
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                for line in format_task_listing(store.tasks(), now) {
                    println!("{}", line);
                }
            }
        }

        Commands::Show(args) => {
            let task = store
                .get(args.id)
                .or_else(|| store.get_archived(args.id))
                .ok_or(StoreError::NotFound(args.id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&task_to_json(task, now))?);
            } else {
                for line in format_task_detail(task, now) {
                    println!("{}", line);
                }
            }
        }

        Commands::Add(args) => {
            let deadline = args.deadline.as_deref().map(parse_deadline).transpose()?;
            let task = store.add(&args.title, args.desc, deadline)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&task_to_json(&task, now))?);
            } else {
                println!("added task {}", task.id);
            }
        }

        Commands::Edit(args) => {
            let current = store.get(args.id).ok_or(StoreError::NotFound(args.id))?;
            let title = args.title.unwrap_or_else(|| current.title.clone());
            let description = args.desc.or_else(|| current.description.clone());
            let deadline = if args.clear_deadline {
                None
            } else if let Some(raw) = args.deadline.as_deref() {
                Some(parse_deadline(raw)?)
            } else {
                current.deadline
            };
            store.update(args.id, &title, description, deadline)?;
            println!("updated task {}", args.id);
        }

        Commands::Done(args) => {
            let completed = store.toggle_completion(args.id)?;
            if completed {
                println!("task {} done", args.id);
            } else {
                println!("task {} reopened", args.id);
            }
        }

        Commands::Swap(args) => {
            store.swap_order(args.first, args.second)?;
            println!("swapped {} and {}", args.first, args.second);
        }

        Commands::Rm(args) => {
            let task = store.delete(args.id)?;
            println!("deleted task {} ({})", task.id, task.title);
        }

        Commands::Archive(args) => {
            store.archive(args.id)?;
            println!("archived task {}", args.id);
        }

        Commands::Restore(args) => {
            store.restore(args.id)?;
            println!("restored task {}", args.id);
        }

        Commands::Purge(args) => {
            let task = store.delete_permanently(args.id)?;
            println!("purged task {} ({})", task.id, task.title);
        }

        Commands::Status => {
            let status = StatusJson {
                outstanding: store.incomplete_count(),
                total: store.tasks().len(),
                archived: store.archived().len(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!(
                    "{} outstanding / {} tasks ({} archived)",
                    status.outstanding, status.total, status.archived
                );
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse "YYYY-MM-DD HH:MM" or "YYYY-MM-DD" (the latter means end of
/// that day) as a UTC deadline.
fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        return Ok(Utc.from_utc_datetime(&dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let end_of_day = date
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| format!("invalid deadline '{}'", raw))?;
        return Ok(Utc.from_utc_datetime(&end_of_day));
    }
    Err(format!(
        "invalid deadline '{}' (expected YYYY-MM-DD or \"YYYY-MM-DD HH:MM\")",
        raw
    ))
}
