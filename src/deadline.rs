use chrono::{DateTime, Utc};

use crate::model::task::Task;

/// Urgency tier for a task's deadline relative to now
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineTier {
    /// Completed task or no deadline
    None,
    /// More than a week out
    Normal,
    /// Due within 2-7 days
    Warning,
    /// Due today or tomorrow
    Urgent,
    /// Deadline has passed
    Overdue,
}

/// Result of classifying a deadline: an urgency tier plus a
/// human-readable remaining-time label (absent for the `None` tier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineStatus {
    pub tier: DeadlineTier,
    pub label: Option<String>,
}

impl DeadlineStatus {
    fn none() -> Self {
        DeadlineStatus {
            tier: DeadlineTier::None,
            label: None,
        }
    }
}

/// Classify a deadline against `now`.
///
/// Completed tasks and tasks without a deadline get the neutral tier with
/// no label. Day counts are calendar-day differences measured at midnight
/// boundaries, so a deadline later today is 0 days out, not a fraction;
/// when due today the label switches to hours (rounded up). A deadline
/// exactly at `now` counts as overdue.
pub fn classify(
    deadline: Option<DateTime<Utc>>,
    completed: bool,
    now: DateTime<Utc>,
) -> DeadlineStatus {
    let Some(deadline) = deadline else {
        return DeadlineStatus::none();
    };
    if completed {
        return DeadlineStatus::none();
    }

    if deadline <= now {
        let days_overdue = (now.date_naive() - deadline.date_naive()).num_days();
        return DeadlineStatus {
            tier: DeadlineTier::Overdue,
            label: Some(format!("{} overdue", plural(days_overdue, "day"))),
        };
    }

    let days_remaining = (deadline.date_naive() - now.date_naive()).num_days();
    if days_remaining <= 0 {
        // Due later today: report hours, rounded up
        let secs = (deadline - now).num_seconds();
        let hours = (secs + 3599) / 3600;
        return DeadlineStatus {
            tier: DeadlineTier::Urgent,
            label: Some(format!("{} left", plural(hours, "hour"))),
        };
    }

    let tier = if days_remaining <= 1 {
        DeadlineTier::Urgent
    } else if days_remaining <= 7 {
        DeadlineTier::Warning
    } else {
        DeadlineTier::Normal
    };
    DeadlineStatus {
        tier,
        label: Some(format!("{} left", plural(days_remaining, "day"))),
    }
}

/// Classify a task's deadline (convenience over [`classify`]).
pub fn classify_task(task: &Task, now: DateTime<Utc>) -> DeadlineStatus {
    classify(task.deadline, task.completed, now)
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
