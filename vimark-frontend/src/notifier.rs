use crate::mark::Mark;

/// Receives the complete, sorted mark list of the active pane on every change.
pub trait MarkObserver {
    fn marks_changed(&mut self, marks: &[Mark]);
}

impl<F> MarkObserver for F
where
    F: FnMut(&[Mark]),
{
    fn marks_changed(&mut self, marks: &[Mark]) {
        self(marks)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubscriptionId(usize);

#[derive(Default)]
pub struct ChangeNotifier {
    current: Vec<Mark>,
    next_id: usize,
    observers: Vec<(SubscriptionId, Box<dyn MarkObserver>)>,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ChangeNotifier {
    pub fn subscribe(&mut self, observer: impl MarkObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));

        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let count = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        count != self.observers.len()
    }

    /// Last published list. Observers attaching late read it here.
    pub fn current(&self) -> &[Mark] {
        &self.current
    }

    pub fn publish(&mut self, marks: &[Mark]) {
        tracing::trace!("publishing {} marks", marks.len());

        self.current = marks.to_vec();
        for (_, observer) in self.observers.iter_mut() {
            observer.marks_changed(marks);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn recording(log: &Rc<RefCell<Vec<(usize, Vec<Mark>)>>>, tag: usize) -> impl MarkObserver {
        let log = log.clone();
        move |marks: &[Mark]| log.borrow_mut().push((tag, marks.to_vec()))
    }

    #[test]
    fn publish_reaches_observers_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::default();
        notifier.subscribe(recording(&log, 1));
        notifier.subscribe(recording(&log, 2));

        notifier.publish(&[Mark::new('a', 0, 0)]);

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], (1, vec![Mark::new('a', 0, 0)]));
        assert_eq!(log[1], (2, vec![Mark::new('a', 0, 0)]));
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::default();
        let id = notifier.subscribe(recording(&log, 1));

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));

        notifier.publish(&[]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn current_holds_last_publish_for_late_observers() {
        let mut notifier = ChangeNotifier::default();
        assert!(notifier.current().is_empty());

        notifier.publish(&[Mark::new('b', 4, 8)]);

        assert_eq!(notifier.current(), &[Mark::new('b', 4, 8)]);
    }
}
