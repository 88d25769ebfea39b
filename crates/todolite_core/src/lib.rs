//! Core domain logic for todolite.
//! This crate is the single source of truth for list-management invariants.

pub mod list;
pub mod logging;
pub mod model;
pub mod observe;
pub mod store;

pub use list::activity_list::{
    ActivityEdit, ActivityList, ListError, ListResult, DEFAULT_LIST_NAME,
};
pub use list::identifier::Identifier;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{format_due_date, Activity, ActivityParseError};
pub use observe::{ListObserver, ObserverRegistry};
pub use store::text_file::{load_activities, save_activities, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
