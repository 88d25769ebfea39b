use std::cell::Cell;
use std::rc::Rc;
use todolite_core::{Activity, ActivityEdit, ActivityList, Identifier, ListObserver};

/// Test double counting `on_change` invocations.
struct CountingObserver {
    calls: Cell<usize>,
}

impl CountingObserver {
    fn new() -> Rc<Self> {
        Rc::new(Self { calls: Cell::new(0) })
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ListObserver for CountingObserver {
    fn on_change(&self, _list: &ActivityList) {
        self.calls.set(self.calls.get() + 1);
    }
}

#[test]
fn add_notifies_every_observer_exactly_once() {
    let mut list = ActivityList::new();
    let first = CountingObserver::new();
    let second = CountingObserver::new();
    list.add_observer(first.clone());
    list.add_observer(second.clone());

    list.add_activity(Activity::new("water plants"));

    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 1);
}

#[test]
fn every_successful_mutation_notifies_once() {
    let mut list = ActivityList::new();
    let observer = CountingObserver::new();
    list.add_observer(observer.clone());

    list.add_activity(Activity::new("a"));
    list.add_activity(Activity::new("b"));
    list.mark_completed(&Identifier::ByIndex(1)).unwrap();
    let edit = ActivityEdit {
        due_date: Some(1_700_000_000),
        ..ActivityEdit::default()
    };
    assert!(list.edit_activity(&Identifier::ByIndex(2), &edit));
    list.rename("chores");
    list.remove_activity(&Identifier::ByIndex(1), true).unwrap();

    assert_eq!(observer.calls(), 6);
}

#[test]
fn failed_operations_do_not_notify() {
    let mut list = ActivityList::new();
    list.add_activity(Activity::new("only"));

    let observer = CountingObserver::new();
    list.add_observer(observer.clone());

    list.remove_activity(&Identifier::ByIndex(0), true).unwrap_err();
    list.mark_completed(&Identifier::ByName("missing".to_string()))
        .unwrap_err();
    assert!(!list.edit_activity(&Identifier::ByIndex(9), &ActivityEdit::default()));
    // Declined confirmation resolves fine but mutates nothing.
    assert!(list
        .remove_activity(&Identifier::ByIndex(1), false)
        .unwrap()
        .is_none());

    assert_eq!(observer.calls(), 0);
}

#[test]
fn duplicate_registration_is_ignored() {
    let mut list = ActivityList::new();
    let observer = CountingObserver::new();
    list.add_observer(observer.clone());
    list.add_observer(observer.clone());

    list.add_activity(Activity::new("once"));

    assert_eq!(observer.calls(), 1);
}

#[test]
fn removed_observer_is_no_longer_notified() {
    let mut list = ActivityList::new();
    let kept = CountingObserver::new();
    let dropped = CountingObserver::new();
    list.add_observer(kept.clone());
    list.add_observer(dropped.clone());

    list.add_activity(Activity::new("first"));

    let handle: Rc<dyn ListObserver> = dropped.clone();
    list.remove_observer(&handle);
    list.add_activity(Activity::new("second"));

    assert_eq!(kept.calls(), 2);
    assert_eq!(dropped.calls(), 1);
}

#[test]
fn removing_an_unregistered_observer_is_a_noop() {
    let mut list = ActivityList::new();
    let registered = CountingObserver::new();
    let stranger: Rc<dyn ListObserver> = CountingObserver::new();
    list.add_observer(registered.clone());

    list.remove_observer(&stranger);
    list.add_activity(Activity::new("still notifies"));

    assert_eq!(registered.calls(), 1);
}

#[test]
fn observer_sees_post_mutation_state() {
    struct SnapshotObserver {
        last_total: Cell<usize>,
    }
    impl ListObserver for SnapshotObserver {
        fn on_change(&self, list: &ActivityList) {
            self.last_total.set(list.total_activities());
        }
    }

    let mut list = ActivityList::new();
    let observer = Rc::new(SnapshotObserver {
        last_total: Cell::new(usize::MAX),
    });
    list.add_observer(observer.clone());

    list.add_activity(Activity::new("a"));
    assert_eq!(observer.last_total.get(), 1);

    list.remove_activity(&Identifier::ByIndex(1), true).unwrap();
    assert_eq!(observer.last_total.get(), 0);
}
