// Observable state cells.
//
// A cell holds one value, a version stamp, and a list of subscribers
// invoked on every committed write. Single-threaded by design: the
// calculator has exactly one writer, and readers either poll the value,
// compare versions, or register a subscription.

use std::fmt;

/// A mutable state cell with change notification.
pub struct Observed<T> {
    value: T,
    version: u64,
    subscribers: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Observed<T> {
    /// Create a cell holding `value`, at version 0 with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            subscribers: Vec::new(),
        }
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Version stamp, incremented on every committed write. Readers that
    /// poll can compare stamps instead of values.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Register a callback invoked with the new value after every
    /// committed write.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Write a new value, bump the version, and notify subscribers.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.version += 1;
        for subscriber in &mut self.subscribers {
            subscriber(&self.value);
        }
    }
}

impl<T: PartialEq> Observed<T> {
    /// Write a new value only if it differs from the current one.
    /// Returns whether a write happened; an equal value leaves the
    /// version untouched and notifies nobody.
    pub fn set_if_changed(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.set(value);
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for Observed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observed")
            .field("value", &self.value)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn get_and_set() {
        let mut cell = Observed::new("0".to_string());
        assert_eq!(cell.get(), "0");
        cell.set("15".to_string());
        assert_eq!(cell.get(), "15");
    }

    #[test]
    fn version_bumps_on_every_set() {
        let mut cell = Observed::new(0);
        assert_eq!(cell.version(), 0);
        cell.set(1);
        cell.set(1);
        assert_eq!(cell.version(), 2);
    }

    #[test]
    fn subscribers_see_each_write() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut cell = Observed::new("0".to_string());
        cell.subscribe(move |v: &String| sink.borrow_mut().push(v.clone()));

        cell.set("1".to_string());
        cell.set("12".to_string());
        assert_eq!(*seen.borrow(), vec!["1".to_string(), "12".to_string()]);
    }

    #[test]
    fn set_if_changed_skips_equal_values() {
        let count = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&count);

        let mut cell = Observed::new(7);
        cell.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(!cell.set_if_changed(7));
        assert_eq!(cell.version(), 0);
        assert_eq!(*count.borrow(), 0);

        assert!(cell.set_if_changed(8));
        assert_eq!(cell.version(), 1);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn multiple_subscribers_all_notified() {
        let a = Rc::new(RefCell::new(0usize));
        let b = Rc::new(RefCell::new(0usize));
        let (sink_a, sink_b) = (Rc::clone(&a), Rc::clone(&b));

        let mut cell = Observed::new(0);
        cell.subscribe(move |_| *sink_a.borrow_mut() += 1);
        cell.subscribe(move |_| *sink_b.borrow_mut() += 1);

        cell.set(1);
        assert_eq!((*a.borrow(), *b.borrow()), (1, 1));
    }

    #[test]
    fn debug_omits_subscriber_closures() {
        let cell = Observed::new(42);
        let rendered = format!("{cell:?}");
        assert!(rendered.contains("value: 42"));
        assert!(rendered.contains("subscribers: 0"));
    }
}
