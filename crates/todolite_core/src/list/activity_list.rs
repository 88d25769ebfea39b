//! Ordered activity collection with change notification.
//!
//! # Responsibility
//! - Own the activity sequence and apply all mutation operations.
//! - Notify registered observers exactly once after each successful mutation.
//! - Bridge to the flat-file store for save/load.
//!
//! # Invariants
//! - Identifier resolution failures leave the list unmodified.
//! - Every operation is all-or-nothing; there is no partial mutation.
//! - Display sorting by due date is presentation-only; stored order is
//!   insertion order.

use crate::list::identifier::Identifier;
use crate::model::activity::{format_due_date, Activity};
use crate::observe::{ListObserver, ObserverRegistry};
use crate::store::text_file::{self, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::rc::Rc;

/// Name given to lists constructed without one.
pub const DEFAULT_LIST_NAME: &str = "UnnamedList";

pub type ListResult<T> = Result<T, ListError>;

/// Operation error for activity-list mutations and persistence.
#[derive(Debug)]
pub enum ListError {
    /// The raw identifier was empty or whitespace-only.
    EmptyIdentifier,
    /// A positional identifier was 0 or beyond the current length.
    IndexOutOfRange { index: usize, len: usize },
    /// No activity has the given description.
    NameNotFound(String),
    /// Several activities share the description; the caller must pick one
    /// of the 1-based candidate positions and retry by index.
    AmbiguousName { name: String, candidates: Vec<usize> },
    /// Save/load failure from the flat-file store.
    Store(StoreError),
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyIdentifier => write!(f, "identifier must not be empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for {len} activities")
            }
            Self::NameNotFound(name) => write!(f, "no activity named `{name}`"),
            Self::AmbiguousName { name, candidates } => write!(
                f,
                "{} activities named `{name}`; choose one of positions {candidates:?}",
                candidates.len()
            ),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ListError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Field changes for [`ActivityList::edit_activity`].
///
/// Only the populated fields are applied; an empty replacement description
/// is ignored rather than erasing the existing text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityEdit {
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<i64>,
}

/// Ordered, observed collection of [`Activity`] records.
pub struct ActivityList {
    name: String,
    activities: Vec<Activity>,
    observers: ObserverRegistry,
}

impl Default for ActivityList {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityList {
    /// Creates an empty list with the default sentinel name.
    pub fn new() -> Self {
        Self::with_name(DEFAULT_LIST_NAME)
    }

    /// Creates an empty list with an explicit name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read access to the stored sequence, in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Appends one activity. Always succeeds and notifies observers.
    pub fn add_activity(&mut self, activity: Activity) {
        self.activities.push(activity);
        info!(
            "event=activity_added module=list name={} total={}",
            self.name,
            self.activities.len()
        );
        self.notify_observers();
    }

    /// Removes the activity the identifier resolves to.
    ///
    /// Confirmation is the caller's concern: the core receives the decided
    /// boolean. When `confirmed` is `false` the resolved target is left in
    /// place and `Ok(None)` is returned without notification.
    ///
    /// # Errors
    /// - Any resolution failure (see [`ListError`]); the list is unmodified.
    pub fn remove_activity(
        &mut self,
        identifier: &Identifier,
        confirmed: bool,
    ) -> ListResult<Option<Activity>> {
        let slot = self.resolve(identifier)?;
        if !confirmed {
            return Ok(None);
        }
        let removed = self.activities.remove(slot);
        info!(
            "event=activity_removed module=list name={} position={} remaining={}",
            self.name,
            slot + 1,
            self.activities.len()
        );
        self.notify_observers();
        Ok(Some(removed))
    }

    /// Marks the resolved activity as completed and notifies observers.
    ///
    /// # Errors
    /// - Any resolution failure; the list is unmodified.
    pub fn mark_completed(&mut self, identifier: &Identifier) -> ListResult<()> {
        let slot = self.resolve(identifier)?;
        self.activities[slot].completed = true;
        info!(
            "event=activity_completed module=list name={} position={}",
            self.name,
            slot + 1
        );
        self.notify_observers();
        Ok(())
    }

    /// Applies the populated edit fields to the resolved activity.
    ///
    /// Returns `false` on any resolution failure so interactive callers can
    /// re-prompt and retry; returns `true` and notifies observers otherwise.
    pub fn edit_activity(&mut self, identifier: &Identifier, edit: &ActivityEdit) -> bool {
        let slot = match self.resolve(identifier) {
            Ok(slot) => slot,
            Err(err) => {
                warn!("event=activity_edit module=list name={} status=error detail={err}", self.name);
                return false;
            }
        };

        let entry = &mut self.activities[slot];
        if let Some(description) = &edit.description {
            if !description.is_empty() {
                entry.description = description.clone();
            }
        }
        if let Some(completed) = edit.completed {
            entry.completed = completed;
        }
        if let Some(due_date) = edit.due_date {
            entry.due_date = due_date;
        }
        info!(
            "event=activity_edited module=list name={} position={}",
            self.name,
            slot + 1
        );
        self.notify_observers();
        true
    }

    /// Renames the list and notifies observers.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        info!("event=list_renamed module=list name={}", self.name);
        self.notify_observers();
    }

    /// Returns all activities whose description equals `name`, in stored order.
    pub fn find_by_name(&self, name: &str) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|activity| activity.description == name)
            .cloned()
            .collect()
    }

    /// Returns all activities due exactly at `due_date`, in stored order.
    pub fn find_by_due_date(&self, due_date: i64) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|activity| activity.due_date == due_date)
            .cloned()
            .collect()
    }

    pub fn total_activities(&self) -> usize {
        self.activities.len()
    }

    /// Count of activities not yet completed.
    pub fn pending_activities(&self) -> usize {
        self.activities
            .iter()
            .filter(|activity| !activity.completed)
            .count()
    }

    /// Writes the list to `path` in stored order, overwriting.
    ///
    /// # Errors
    /// - [`ListError::Store`] when the file cannot be written. Propagated,
    ///   not swallowed; no in-memory state is lost either way.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> ListResult<()> {
        text_file::save_activities(path, &self.activities)?;
        Ok(())
    }

    /// Replaces the whole sequence with the contents of `path`.
    ///
    /// Observers are notified once, after the full replacement. On any error
    /// the in-memory sequence is left untouched.
    ///
    /// # Errors
    /// - [`ListError::Store`] on open/read failure or a malformed line.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> ListResult<()> {
        let loaded = text_file::load_activities(path)?;
        self.activities = loaded;
        info!(
            "event=list_loaded module=list name={} total={}",
            self.name,
            self.activities.len()
        );
        self.notify_observers();
        Ok(())
    }

    /// Registers a display listener. Duplicate registration is a no-op.
    pub fn add_observer(&mut self, observer: Rc<dyn ListObserver>) {
        self.observers.add(observer);
    }

    /// Deregisters a display listener. Unknown handles are a no-op.
    pub fn remove_observer(&mut self, observer: &Rc<dyn ListObserver>) {
        self.observers.remove(observer);
    }

    /// Invokes every registered listener with the current list state, in
    /// registration order.
    pub fn notify_observers(&self) {
        self.observers.notify_all(self);
    }

    /// Resolves an identifier to a 0-based slot in the stored sequence.
    ///
    /// Shared by remove/mark/edit so index and name policy live in one place.
    fn resolve(&self, identifier: &Identifier) -> ListResult<usize> {
        match identifier {
            Identifier::ByIndex(index) => {
                if *index == 0 || *index > self.activities.len() {
                    return Err(ListError::IndexOutOfRange {
                        index: *index,
                        len: self.activities.len(),
                    });
                }
                Ok(index - 1)
            }
            Identifier::ByName(name) => {
                let candidates: Vec<usize> = self
                    .activities
                    .iter()
                    .enumerate()
                    .filter(|(_, activity)| activity.description == *name)
                    .map(|(slot, _)| slot + 1)
                    .collect();
                match candidates.as_slice() {
                    [] => Err(ListError::NameNotFound(name.clone())),
                    [only] => Ok(only - 1),
                    _ => Err(ListError::AmbiguousName {
                        name: name.clone(),
                        candidates,
                    }),
                }
            }
        }
    }
}

impl Display for ActivityList {
    /// Deterministic rendering: header, then entries sorted by ascending due
    /// date (stable, so ties keep stored order). Presentation only.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Todo list: {}", self.name)?;
        if self.activities.is_empty() {
            return writeln!(f, "No activities to display");
        }

        let mut slots: Vec<usize> = (0..self.activities.len()).collect();
        slots.sort_by_key(|&slot| self.activities[slot].due_date);

        for (position, &slot) in slots.iter().enumerate() {
            let activity = &self.activities[slot];
            writeln!(
                f,
                "{}. {} [{}] (due {})",
                position + 1,
                activity.description,
                if activity.completed { "Done" } else { "Not Done" },
                format_due_date(activity.due_date)
            )?;
        }
        Ok(())
    }
}
