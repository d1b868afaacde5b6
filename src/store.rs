use std::cmp::{Ordering, Reverse};

use chrono::{DateTime, Duration, Utc};

use crate::io::badge::{BadgeSink, badge_text};
use crate::io::gateway::{GatewayError, Snapshot, StorageGateway, StoredState};
use crate::model::task::Task;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("task not found: {0}")]
    NotFound(u64),
}

/// Handle returned by [`TaskStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(&[Task], &[Task])>;

/// Single source of truth for the task collections.
///
/// Every mutation runs synchronously against memory, re-sorts, notifies
/// subscribers, and then persists through the gateway. The UI-facing
/// state is therefore current before the save lands; a failed save only
/// suppresses the badge push.
pub struct TaskStore {
    tasks: Vec<Task>,
    archived: Vec<Task>,
    gateway: Box<dyn StorageGateway>,
    badge: Box<dyn BadgeSink>,
    badge_color: String,
    seed_samples: bool,
    listeners: Vec<(u64, Listener)>,
    next_subscription: u64,
}

impl TaskStore {
    pub fn new(gateway: Box<dyn StorageGateway>, badge: Box<dyn BadgeSink>) -> Self {
        TaskStore {
            tasks: Vec::new(),
            archived: Vec::new(),
            gateway,
            badge,
            badge_color: crate::io::badge::BADGE_COLOR.to_string(),
            seed_samples: true,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_badge_color(mut self, color: impl Into<String>) -> Self {
        self.badge_color = color.into();
        self
    }

    pub fn with_seeding(mut self, seed_samples: bool) -> Self {
        self.seed_samples = seed_samples;
        self
    }

    // -----------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------

    /// Fetch persisted state. On first run (nothing stored, first-use
    /// flag unset) the sample tasks are seeded; a stored-but-empty
    /// snapshot stays empty. Ends sorted, notified, and saved.
    pub fn load(&mut self) -> Result<(), GatewayError> {
        match self.gateway.load()?.state() {
            StoredState::Data { tasks, archived } => {
                self.tasks = tasks;
                self.archived = archived;
            }
            StoredState::Empty => {
                self.tasks.clear();
                self.archived.clear();
            }
            StoredState::FirstRun => {
                if self.seed_samples {
                    self.tasks = sample_tasks(Utc::now());
                }
            }
        }
        self.commit();
        Ok(())
    }

    // -----------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------

    /// Add a task at the end of the list. Returns the stored task (its
    /// position may already have moved in the sort).
    pub fn add(
        &mut self,
        title: &str,
        description: Option<String>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<Task, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let id = self.next_id();
        let task = Task::new(
            id,
            title.to_string(),
            description,
            deadline,
            Utc::now(),
            self.tasks.len(),
        );
        self.tasks.push(task);
        self.commit();

        self.get(id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Replace a task's title, description, and deadline.
    pub fn update(
        &mut self,
        id: u64,
        title: &str,
        description: Option<String>,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<(), StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let task = self.task_mut(id)?;
        task.title = title.to_string();
        task.description = description;
        task.deadline = deadline;
        self.commit();
        Ok(())
    }

    /// Flip completion. Returns the new completed state.
    pub fn toggle_completion(&mut self, id: u64) -> Result<bool, StoreError> {
        let task = self.task_mut(id)?;
        task.completed = !task.completed;
        task.completed_at = if task.completed { Some(Utc::now()) } else { None };
        let completed = task.completed;
        self.commit();
        Ok(completed)
    }

    /// Remove a task from the active list outright.
    pub fn delete(&mut self, id: u64) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let task = self.tasks.remove(idx);
        self.commit();
        Ok(task)
    }

    /// Move a task from the active list to the archive.
    pub fn archive(&mut self, id: u64) -> Result<(), StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let mut task = self.tasks.remove(idx);
        task.archived_at = Some(Utc::now());
        self.archived.push(task);
        self.commit();
        Ok(())
    }

    /// Move an archived task back to the end of the active list.
    pub fn restore(&mut self, id: u64) -> Result<(), StoreError> {
        let idx = self
            .archived
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let mut task = self.archived.remove(idx);
        task.archived_at = None;
        task.order = self.tasks.len();
        self.tasks.push(task);
        self.commit();
        Ok(())
    }

    /// Remove an archived task for good.
    pub fn delete_permanently(&mut self, id: u64) -> Result<Task, StoreError> {
        let idx = self
            .archived
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let task = self.archived.remove(idx);
        self.commit();
        Ok(task)
    }

    /// Exchange the `order` fields of two active tasks, then re-sort.
    /// This is the primitive backing manual reordering.
    pub fn swap_order(&mut self, id_a: u64, id_b: u64) -> Result<(), StoreError> {
        let a = self
            .tasks
            .iter()
            .position(|t| t.id == id_a)
            .ok_or(StoreError::NotFound(id_a))?;
        let b = self
            .tasks
            .iter()
            .position(|t| t.id == id_b)
            .ok_or(StoreError::NotFound(id_b))?;
        let order_a = self.tasks[a].order;
        self.tasks[a].order = self.tasks[b].order;
        self.tasks[b].order = order_a;
        self.commit();
        Ok(())
    }

    // -----------------------------------------------------------------
    // Subscriptions
    // -----------------------------------------------------------------

    /// Register a listener called with (active, archived) after every
    /// mutation, synchronously, once state is fully sorted.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Task], &[Task]) + 'static) -> Subscription {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription(id)
    }

    /// Remove a listener. Returns false if the handle was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription.0);
        self.listeners.len() != before
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn archived(&self) -> &[Task] {
        &self.archived
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_archived(&self, id: u64) -> Option<&Task> {
        self.archived.iter().find(|t| t.id == id)
    }

    pub fn incomplete_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    /// Next id: one past the highest id in either list, so a later
    /// restore can never collide with a newly added task.
    fn next_id(&self) -> u64 {
        self.tasks
            .iter()
            .chain(self.archived.iter())
            .map(|t| t.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    fn task_mut(&mut self, id: u64) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Sort, notify, persist — the tail of every mutation.
    fn commit(&mut self) {
        sort_active(&mut self.tasks);
        sort_archived(&mut self.archived);
        self.notify();
        self.persist();
    }

    fn notify(&mut self) {
        let Self {
            tasks,
            archived,
            listeners,
            ..
        } = self;
        for (_, listener) in listeners.iter_mut() {
            listener(tasks.as_slice(), archived.as_slice());
        }
    }

    /// Save, and push the badge count after a successful save. A failed
    /// save leaves in-memory state authoritative and skips the badge.
    fn persist(&mut self) {
        let snapshot = Snapshot {
            tasks: Some(self.tasks.clone()),
            archived_tasks: Some(self.archived.clone()),
            initialized: true,
        };
        if self.gateway.store(&snapshot).is_ok() {
            let text = badge_text(self.incomplete_count());
            self.badge.set_badge(&text, &self.badge_color);
        }
    }
}

// ---------------------------------------------------------------------
// Sort policy
// ---------------------------------------------------------------------

/// Sort the active list:
/// 1. stable sort by the manual `order` field,
/// 2. partition incomplete before completed,
/// 3. within incomplete, stable sort by deadline ascending with
///    deadline-present before deadline-absent (ties keep manual order),
/// 4. reassign `order` to the final index.
///
/// Stability is load-bearing: an unstable sort would visibly shuffle
/// same-state tasks on every render.
pub(crate) fn sort_active(tasks: &mut Vec<Task>) {
    tasks.sort_by_key(|t| t.order);

    let (mut incomplete, completed): (Vec<Task>, Vec<Task>) =
        tasks.drain(..).partition(|t| !t.completed);

    incomplete.sort_by(|a, b| match (a.deadline, b.deadline) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    tasks.extend(incomplete);
    tasks.extend(completed);
    for (index, task) in tasks.iter_mut().enumerate() {
        task.order = index;
    }
}

/// The archive is ordered newest-first by archive time (falling back to
/// creation time) and does not use the `order` field.
fn sort_archived(archived: &mut [Task]) {
    archived.sort_by_key(|t| Reverse(t.archived_at.unwrap_or(t.created_at)));
}

// ---------------------------------------------------------------------
// First-run samples
// ---------------------------------------------------------------------

/// The starter tasks seeded when no state has ever been saved.
fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let sample = |id, title: &str, description: &str, deadline, order| {
        Task::new(
            id,
            title.to_string(),
            Some(description.to_string()),
            deadline,
            now,
            order,
        )
    };
    let mut morning = sample(5, "Morning", "Morning routine tasks", None, 4);
    morning.completed = true;
    morning.completed_at = Some(now);

    vec![
        sample(
            1,
            "Start Work",
            "Begin daily tasks",
            Some(now + Duration::hours(1)),
            0,
        ),
        sample(
            2,
            "Visit Consumer",
            "Schedule meeting with client",
            Some(now + Duration::hours(5)),
            1,
        ),
        sample(
            3,
            "Status Checking",
            "Review project progress",
            Some(now + Duration::hours(7)),
            2,
        ),
        sample(
            4,
            "Finish Work",
            "Complete daily tasks",
            Some(now + Duration::hours(9)),
            3,
        ),
        morning,
    ]
}

// ---------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::badge::NullBadge;
    use crate::io::gateway::MemoryGateway;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn empty_store() -> TaskStore {
        let mut store = TaskStore::new(Box::new(MemoryGateway::default()), Box::new(NullBadge))
            .with_seeding(false);
        store.load().unwrap();
        store
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    fn assert_order_contiguous(tasks: &[Task]) {
        for (index, task) in tasks.iter().enumerate() {
            assert_eq!(task.order, index, "order gap at {} ({})", index, task.title);
        }
    }

    // --- Loading ---

    #[test]
    fn first_run_seeds_samples() {
        let mut store = TaskStore::new(Box::new(MemoryGateway::default()), Box::new(NullBadge));
        store.load().unwrap();
        assert_eq!(store.tasks().len(), 5);
        // The completed sample sorts last
        assert_eq!(store.tasks().last().unwrap().title, "Morning");
        assert_order_contiguous(store.tasks());
    }

    #[test]
    fn initialized_empty_state_does_not_reseed() {
        let mut gateway = MemoryGateway::default();
        gateway
            .store(&Snapshot {
                tasks: None,
                archived_tasks: None,
                initialized: true,
            })
            .unwrap();
        let mut store = TaskStore::new(Box::new(gateway), Box::new(NullBadge));
        store.load().unwrap();
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn seeding_can_be_disabled() {
        let store = empty_store();
        assert!(store.tasks().is_empty());
    }

    // --- Add / update ---

    #[test]
    fn add_rejects_blank_title() {
        let mut store = empty_store();
        assert!(matches!(store.add("   ", None, None), Err(StoreError::EmptyTitle)));
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn add_assigns_monotonic_ids() {
        let mut store = empty_store();
        let a = store.add("A", None, None).unwrap();
        let b = store.add("B", None, None).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn next_id_considers_archived_tasks() {
        let mut store = empty_store();
        let a = store.add("A", None, None).unwrap();
        store.add("B", None, None).unwrap();
        store.archive(a.id).unwrap();
        let c = store.add("C", None, None).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn add_trims_title_and_drops_empty_description() {
        let mut store = empty_store();
        let task = store.add("  Fix roof  ", Some("   ".into()), None).unwrap();
        assert_eq!(task.title, "Fix roof");
        assert!(task.description.is_none());
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = empty_store();
        assert!(matches!(
            store.update(99, "X", None, None),
            Err(StoreError::NotFound(99))
        ));
    }

    #[test]
    fn update_replaces_fields_and_resorts() {
        let mut store = empty_store();
        let now = Utc::now();
        store.add("A", None, None).unwrap();
        let b = store.add("B", None, None).unwrap();
        // Giving B a deadline moves it ahead of A
        store
            .update(b.id, "B", None, Some(now + Duration::days(1)))
            .unwrap();
        assert_eq!(titles(store.tasks()), vec!["B", "A"]);
    }

    // --- Sort policy ---

    #[test]
    fn deadline_present_beats_absent() {
        let mut store = empty_store();
        let now = Utc::now();
        store.add("A", None, None).unwrap();
        store.add("B", None, Some(now + Duration::days(1))).unwrap();
        assert_eq!(titles(store.tasks()), vec!["B", "A"]);
    }

    #[test]
    fn deadlines_sort_ascending_then_absent_last() {
        let mut store = empty_store();
        let now = Utc::now();
        store.add("ten", None, Some(now + Duration::days(10))).unwrap();
        store.add("three", None, Some(now + Duration::days(3))).unwrap();
        store.add("none", None, None).unwrap();
        assert_eq!(titles(store.tasks()), vec!["three", "ten", "none"]);
        assert_order_contiguous(store.tasks());
    }

    #[test]
    fn sort_is_stable_for_equal_deadline_status() {
        let mut store = empty_store();
        store.add("first", None, None).unwrap();
        store.add("second", None, None).unwrap();
        store.add("third", None, None).unwrap();
        assert_eq!(titles(store.tasks()), vec!["first", "second", "third"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut store = empty_store();
        let now = Utc::now();
        store.add("A", None, Some(now + Duration::days(2))).unwrap();
        store.add("B", None, None).unwrap();
        store.add("C", None, Some(now + Duration::days(2))).unwrap();
        let mut tasks = store.tasks().to_vec();
        let once = tasks.clone();
        sort_active(&mut tasks);
        assert_eq!(tasks, once);
    }

    #[test]
    fn completed_tasks_sort_last_regardless_of_deadline() {
        let mut store = empty_store();
        let now = Utc::now();
        let urgent = store.add("urgent", None, Some(now + Duration::hours(1))).unwrap();
        store.add("later", None, Some(now + Duration::days(30))).unwrap();
        store.toggle_completion(urgent.id).unwrap();
        assert_eq!(titles(store.tasks()), vec!["later", "urgent"]);
    }

    // --- Toggle ---

    #[test]
    fn completed_at_tracks_completed_flag() {
        let mut store = empty_store();
        let task = store.add("A", None, None).unwrap();

        assert!(store.toggle_completion(task.id).unwrap());
        let toggled = store.get(task.id).unwrap();
        assert!(toggled.completed);
        assert!(toggled.completed_at.is_some());

        assert!(!store.toggle_completion(task.id).unwrap());
        let back = store.get(task.id).unwrap();
        assert!(!back.completed);
        assert!(back.completed_at.is_none());
    }

    #[test]
    fn toggle_moves_task_to_completed_partition_and_back() {
        let mut store = empty_store();
        let now = Utc::now();
        let soon = store.add("soon", None, Some(now + Duration::days(1))).unwrap();
        store.add("later", None, Some(now + Duration::days(5))).unwrap();
        store.add("whenever", None, None).unwrap();

        store.toggle_completion(soon.id).unwrap();
        assert_eq!(titles(store.tasks()), vec!["later", "whenever", "soon"]);

        // Un-completing returns it to deadline-ordered position
        store.toggle_completion(soon.id).unwrap();
        assert_eq!(titles(store.tasks()), vec!["soon", "later", "whenever"]);
        assert_order_contiguous(store.tasks());
    }

    // --- Swap ---

    #[test]
    fn swap_order_exchanges_adjacent_tasks_exactly() {
        let mut store = empty_store();
        let a = store.add("A", None, None).unwrap();
        let b = store.add("B", None, None).unwrap();
        store.add("C", None, None).unwrap();
        store.add("D", None, None).unwrap();

        store.swap_order(a.id, b.id).unwrap();
        assert_eq!(titles(store.tasks()), vec!["B", "A", "C", "D"]);
        assert_order_contiguous(store.tasks());
    }

    #[test]
    fn swap_order_missing_id_is_not_found() {
        let mut store = empty_store();
        let a = store.add("A", None, None).unwrap();
        let before = store.tasks().to_vec();
        assert!(matches!(
            store.swap_order(a.id, 99),
            Err(StoreError::NotFound(99))
        ));
        assert_eq!(store.tasks(), &before[..]);
    }

    // --- Archive lifecycle ---

    #[test]
    fn archive_then_restore_round_trip() {
        let mut store = empty_store();
        let now = Utc::now();
        let task = store.add("A", None, Some(now + Duration::days(1))).unwrap();
        store.add("B", None, Some(now + Duration::days(5))).unwrap();

        store.archive(task.id).unwrap();
        assert!(store.get(task.id).is_none());
        let archived = store.get_archived(task.id).unwrap();
        assert!(archived.archived_at.is_some());
        assert_order_contiguous(store.tasks());

        store.restore(task.id).unwrap();
        let restored = store.get(task.id).unwrap();
        assert!(restored.archived_at.is_none());
        // Deadline is stale but still participates in the sort
        assert_eq!(titles(store.tasks()), vec!["A", "B"]);
    }

    #[test]
    fn archive_sorts_newest_first() {
        let mut store = empty_store();
        let a = store.add("A", None, None).unwrap();
        let b = store.add("B", None, None).unwrap();
        store.archive(a.id).unwrap();
        store.archive(b.id).unwrap();
        assert_eq!(titles(store.archived()), vec!["B", "A"]);
    }

    #[test]
    fn delete_permanently_only_touches_archive() {
        let mut store = empty_store();
        let a = store.add("A", None, None).unwrap();
        let b = store.add("B", None, None).unwrap();
        store.archive(a.id).unwrap();

        // Active tasks are not visible to permanent deletion
        assert!(matches!(
            store.delete_permanently(b.id),
            Err(StoreError::NotFound(_))
        ));

        let gone = store.delete_permanently(a.id).unwrap();
        assert_eq!(gone.id, a.id);
        assert!(store.archived().is_empty());
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn delete_renumbers_remaining_order() {
        let mut store = empty_store();
        store.add("A", None, None).unwrap();
        let b = store.add("B", None, None).unwrap();
        store.add("C", None, None).unwrap();
        store.delete(b.id).unwrap();
        assert_eq!(titles(store.tasks()), vec!["A", "C"]);
        assert_order_contiguous(store.tasks());
    }

    // --- Notifications ---

    #[test]
    fn listeners_see_sorted_state_after_each_mutation() {
        let mut store = empty_store();
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |tasks, _archived| {
            sink.borrow_mut()
                .push(tasks.iter().map(|t| t.title.clone()).collect());
        });

        let now = Utc::now();
        store.add("A", None, None).unwrap();
        store.add("B", None, Some(now + Duration::days(1))).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], vec!["A"]);
        assert_eq!(seen[1], vec!["B", "A"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = empty_store();
        let count = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&count);
        let handle = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        store.add("A", None, None).unwrap();
        assert!(store.unsubscribe(handle));
        assert!(!store.unsubscribe(handle));
        store.add("B", None, None).unwrap();
        assert_eq!(*count.borrow(), 1);
    }

    // --- Badge ---

    #[derive(Default)]
    struct RecordingBadge {
        pushes: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl BadgeSink for RecordingBadge {
        fn set_badge(&mut self, text: &str, color: &str) {
            self.pushes
                .borrow_mut()
                .push((text.to_string(), color.to_string()));
        }
    }

    #[test]
    fn badge_reflects_incomplete_count_after_saves() {
        let pushes = Rc::new(RefCell::new(Vec::new()));
        let badge = RecordingBadge {
            pushes: Rc::clone(&pushes),
        };
        let mut store = TaskStore::new(Box::new(MemoryGateway::default()), Box::new(badge))
            .with_seeding(false);
        store.load().unwrap();

        let task = store.add("A", None, None).unwrap();
        store.toggle_completion(task.id).unwrap();

        let pushes = pushes.borrow();
        // load, add, toggle
        assert_eq!(pushes.len(), 3);
        assert_eq!(
            pushes[0],
            ("".to_string(), crate::io::badge::BADGE_COLOR.to_string())
        );
        assert_eq!(pushes[1].0, "1");
        assert_eq!(pushes[2].0, "");
    }

    struct FailingGateway;

    impl StorageGateway for FailingGateway {
        fn load(&self) -> Result<Snapshot, GatewayError> {
            Ok(Snapshot::default())
        }

        fn store(&mut self, _snapshot: &Snapshot) -> Result<(), GatewayError> {
            Err(GatewayError::Io {
                path: "nowhere".into(),
                source: std::io::Error::other("disk on fire"),
            })
        }
    }

    #[test]
    fn failed_save_keeps_memory_state_and_skips_badge() {
        let pushes = Rc::new(RefCell::new(Vec::new()));
        let badge = RecordingBadge {
            pushes: Rc::clone(&pushes),
        };
        let mut store =
            TaskStore::new(Box::new(FailingGateway), Box::new(badge)).with_seeding(false);
        store.load().unwrap();

        let task = store.add("A", None, None).unwrap();
        assert_eq!(store.get(task.id).unwrap().title, "A");
        assert!(pushes.borrow().is_empty());
    }
}
