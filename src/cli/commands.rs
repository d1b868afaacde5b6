use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "punch", about = concat!("[+] punchlist v", env!("CARGO_PKG_VERSION"), " - your task list, in order"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding tasks.json and punchlist.toml (default: current dir)
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks in display order
    List(ListArgs),
    /// Show task details
    Show(ShowArgs),
    /// Add a task
    Add(AddArgs),
    /// Edit a task's title, description, or deadline
    Edit(EditArgs),
    /// Toggle a task's completion
    Done(DoneArgs),
    /// Swap the manual order of two tasks
    Swap(SwapArgs),
    /// Delete a task outright
    Rm(RmArgs),
    /// Move a task to the archive
    Archive(ArchiveArgs),
    /// Restore an archived task
    Restore(RestoreArgs),
    /// Permanently delete an archived task
    Purge(PurgeArgs),
    /// Show outstanding/total counts
    Status,
}

#[derive(Args)]
pub struct ListArgs {
    /// List the archive instead of active tasks
    #[arg(long)]
    pub archived: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Longer description
    #[arg(long)]
    pub desc: Option<String>,
    /// Deadline as "YYYY-MM-DD" or "YYYY-MM-DD HH:MM" (UTC)
    #[arg(long)]
    pub deadline: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    pub id: u64,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description
    #[arg(long)]
    pub desc: Option<String>,
    /// New deadline as "YYYY-MM-DD" or "YYYY-MM-DD HH:MM" (UTC)
    #[arg(long, conflicts_with = "clear_deadline")]
    pub deadline: Option<String>,
    /// Remove the deadline
    #[arg(long)]
    pub clear_deadline: bool,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct SwapArgs {
    /// First task id
    pub first: u64,
    /// Second task id
    pub second: u64,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct ArchiveArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct RestoreArgs {
    /// Archived task id
    pub id: u64,
}

#[derive(Args)]
pub struct PurgeArgs {
    /// Archived task id
    pub id: u64,
}
