use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::deadline::{DeadlineStatus, DeadlineTier, classify_task};
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskJson {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
    pub order: usize,
    pub tier: DeadlineTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<String>,
}

#[derive(Serialize)]
pub struct StatusJson {
    pub outstanding: usize,
    pub total: usize,
    pub archived: usize,
}

pub fn task_to_json(task: &Task, now: DateTime<Utc>) -> TaskJson {
    let status = classify_task(task, now);
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        completed: task.completed,
        created_at: task.created_at,
        completed_at: task.completed_at,
        deadline: task.deadline,
        archived_at: task.archived_at,
        order: task.order,
        tier: status.tier,
        remaining: status.label,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn checkbox(task: &Task) -> char {
    if task.completed { 'x' } else { ' ' }
}

fn tier_tag(tier: DeadlineTier) -> Option<&'static str> {
    match tier {
        DeadlineTier::None | DeadlineTier::Normal => None,
        DeadlineTier::Warning => Some("warning"),
        DeadlineTier::Urgent => Some("urgent"),
        DeadlineTier::Overdue => Some("OVERDUE"),
    }
}

/// Format a single task as a one-line summary, e.g.
/// `[ ] 3  Fix roof — 2 days left (urgent)`
pub fn format_task_line(task: &Task, now: DateTime<Utc>) -> String {
    let DeadlineStatus { tier, label } = classify_task(task, now);
    let mut line = format!("[{}] {:<3} {}", checkbox(task), task.id, task.title);
    if let Some(label) = label {
        line.push_str(&format!(" - {}", label));
        if let Some(tag) = tier_tag(tier) {
            line.push_str(&format!(" ({})", tag));
        }
    }
    line
}

/// Format the full task listing: incomplete tasks, a separator, then
/// completed tasks (matching the display partition of the sort).
pub fn format_task_listing(tasks: &[Task], now: DateTime<Utc>) -> Vec<String> {
    if tasks.is_empty() {
        return vec!["no tasks".to_string()];
    }

    let mut lines = Vec::new();
    let incomplete = tasks.iter().filter(|t| !t.completed).count();
    for task in tasks.iter().filter(|t| !t.completed) {
        lines.push(format_task_line(task, now));
    }
    if incomplete > 0 && incomplete < tasks.len() {
        lines.push("---".to_string());
    }
    for task in tasks.iter().filter(|t| t.completed) {
        lines.push(format_task_line(task, now));
    }
    lines
}

/// Format the archive listing (newest-archived first, no checkbox state
/// worth showing beyond the title).
pub fn format_archive_listing(archived: &[Task]) -> Vec<String> {
    if archived.is_empty() {
        return vec!["archive is empty".to_string()];
    }
    archived
        .iter()
        .map(|task| {
            let when = task
                .archived_at
                .unwrap_or(task.created_at)
                .format("%Y-%m-%d");
            format!("{:<3} {} (archived {})", task.id, task.title, when)
        })
        .collect()
}

/// Format detailed task view
pub fn format_task_detail(task: &Task, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = vec![format_task_line(task, now)];
    if let Some(desc) = &task.description {
        lines.push(format!("  {}", desc));
    }
    lines.push(format!(
        "  created: {}",
        task.created_at.format("%Y-%m-%d %H:%M")
    ));
    if let Some(deadline) = task.deadline {
        lines.push(format!("  deadline: {}", deadline.format("%Y-%m-%d %H:%M")));
    }
    if let Some(done) = task.completed_at {
        lines.push(format!("  completed: {}", done.format("%Y-%m-%d %H:%M")));
    }
    if let Some(archived) = task.archived_at {
        lines.push(format!("  archived: {}", archived.format("%Y-%m-%d %H:%M")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample(completed: bool, deadline: Option<DateTime<Utc>>) -> Task {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let mut task = Task::new(1, "Fix roof".into(), None, deadline, created, 0);
        task.completed = completed;
        if completed {
            task.completed_at = Some(created);
        }
        task
    }

    #[test]
    fn line_shows_remaining_and_tier() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        let task = sample(false, Some(now + Duration::days(3)));
        assert_eq!(
            format_task_line(&task, now),
            "[ ] 1   Fix roof - 3 days left (warning)"
        );
    }

    #[test]
    fn line_for_no_deadline_has_no_suffix() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        let task = sample(false, None);
        assert_eq!(format_task_line(&task, now), "[ ] 1   Fix roof");
    }

    #[test]
    fn listing_separates_completed_tasks() {
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        let open = sample(false, None);
        let mut done = sample(true, None);
        done.id = 2;
        let lines = format_task_listing(&[open, done], now);
        assert_eq!(lines[1], "---");
        assert!(lines[2].starts_with("[x]"));
    }

    #[test]
    fn empty_listing_message() {
        let now = Utc::now();
        assert_eq!(format_task_listing(&[], now), vec!["no tasks"]);
    }
}
