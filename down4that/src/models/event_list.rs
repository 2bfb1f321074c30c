use std::fmt::Display;

use tracing::{debug, warn};

use super::event::{compare_events, Event};
use crate::error::{Down4Error, Down4Result};

/// Events kept in their canonical order, with no two equal events.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventList {
    events: Vec<Event>,
}
impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `event` at its sorted position.
    ///
    /// Fails with [`Down4Error::DuplicateEvent`] if an equal event is already listed.
    pub fn add_event(&mut self, event: Event) -> Down4Result<()> {
        match self.events.binary_search_by(|e| compare_events(e, &event)) {
            Ok(_) => {
                warn!(event = %event.name(), "duplicate event rejected");
                Err(Down4Error::DuplicateEvent(String::from(event.name())))
            }
            Err(index) => {
                debug!(event = %event.name(), index, "event added");
                self.events.insert(index, event);
                Ok(())
            }
        }
    }

    /// Removes the event equal to `event`, returning it.
    pub fn delete_event(&mut self, event: &Event) -> Option<Event> {
        let index = self.position(event)?;
        debug!(event = %event.name(), index, "event deleted");
        Some(self.events.remove(index))
    }

    /// Applies `edit` to the listed event equal to `event`, then re-sorts it.
    ///
    /// If the edited event collides with another listed event the edit is
    /// rolled back and [`Down4Error::DuplicateEvent`] is returned.
    pub fn modify<F>(&mut self, event: &Event, edit: F) -> Down4Result<()>
    where
        F: FnOnce(&mut Event),
    {
        let index = self
            .position(event)
            .ok_or_else(|| Down4Error::EventNotFound(String::from(event.name())))?;
        let original = self.events.remove(index);
        let mut edited = original.clone();
        edit(&mut edited);

        if let Err(err) = self.add_event(edited) {
            self.events.insert(index, original);
            return Err(err);
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.events.len()
    }
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
    pub fn contains(&self, event: &Event) -> bool {
        self.position(event).is_some()
    }
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// One numbered line per event, earliest first.
    pub fn display_events(&self) -> String {
        self.to_string()
    }

    fn position(&self, event: &Event) -> Option<usize> {
        self.events
            .binary_search_by(|e| compare_events(e, event))
            .ok()
    }
}

impl Display for EventList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.events.is_empty() {
            return write!(f, "No events.");
        }
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {event}", i + 1)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
