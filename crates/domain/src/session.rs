use crate::WorkoutSection;

type Observer = Box<dyn Fn(Option<WorkoutSection>)>;

/// The section currently selected during an active session. Owned by the
/// session that creates it, not a process-wide singleton: create on session
/// start, clear on teardown. A single last-writer-wins slot with synchronous
/// observer notification.
#[derive(Default)]
pub struct SectionSelection {
    current: Option<WorkoutSection>,
    observers: Vec<Observer>,
}

impl SectionSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<WorkoutSection> {
        self.current
    }

    pub fn select(&mut self, section: WorkoutSection) {
        self.current = Some(section);
        self.notify();
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.notify();
    }

    pub fn subscribe(&mut self, observer: impl Fn(Option<WorkoutSection>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(self.current);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_last_writer_wins() {
        let mut selection = SectionSelection::new();
        assert_eq!(selection.current(), None);

        selection.select(WorkoutSection::WarmUp);
        selection.select(WorkoutSection::MainLift);
        assert_eq!(selection.current(), Some(WorkoutSection::MainLift));

        selection.clear();
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_observers_notified_synchronously() {
        let seen: Rc<RefCell<Vec<Option<WorkoutSection>>>> = Rc::new(RefCell::new(Vec::new()));
        let mut selection = SectionSelection::new();

        let observer_seen = Rc::clone(&seen);
        selection.subscribe(move |section| observer_seen.borrow_mut().push(section));

        selection.select(WorkoutSection::Cardio);
        selection.clear();

        assert_eq!(
            *seen.borrow(),
            vec![Some(WorkoutSection::Cardio), None]
        );
    }
}
