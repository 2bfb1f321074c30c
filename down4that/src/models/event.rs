use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
};

use chrono::NaiveDateTime;
use tracing::debug;

use super::{AuthorId, Vote};
use crate::error::{Down4Error, Down4Result};

/// Pattern callers use to type in an event time, `dd-MM-yyyy HH:mm`.
pub const EVENT_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Medium date and time rendering, e.g. `May 8, 2021, 2:00:00 PM`.
///
/// Month names and the AM/PM marker are always English so the output does not
/// depend on the host locale.
pub const DISPLAY_TIME_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";

/// Parses a date-time written with [`EVENT_TIME_FORMAT`].
///
/// Surrounding whitespace is ignored.
pub fn parse_event_time(input: &str) -> Down4Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), EVENT_TIME_FORMAT).map_err(|source| {
        Down4Error::InvalidDateTime {
            input: String::from(input),
            source,
        }
    })
}

/// Canonical ordering of events: date-time first, then name, then location.
///
/// Two events comparing [`Ordering::Equal`] are the same event, regardless of
/// who logged them or how they were voted on.
pub fn compare_events(a: &Event, b: &Event) -> Ordering {
    a.logged_time
        .cmp(&b.logged_time)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.location.cmp(&b.location))
}

/// Something someone wants to do, somewhere, at some time.
///
/// An `Event` owns the votes cast on it. Its identity for equality, ordering and
/// hashing is the `(date-time, name, location)` triple only, so changing any of
/// those through a setter changes where the event sorts.
#[derive(Debug, Clone)]
pub struct Event {
    author_id: AuthorId,
    name: String,
    location: String,
    logged_time: NaiveDateTime,
    votes: Vec<Vote>,
}
impl Event {
    pub fn new(
        author_id: impl Into<AuthorId>,
        name: &str,
        location: &str,
        logged_time: NaiveDateTime,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            name: String::from(name),
            location: String::from(location),
            logged_time,
            votes: Vec::new(),
        }
    }

    pub fn author_id(&self) -> &AuthorId {
        &self.author_id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_name(&mut self, name: &str) {
        self.name = String::from(name);
    }
    pub fn location(&self) -> &str {
        &self.location
    }
    pub fn set_location(&mut self, location: &str) {
        self.location = String::from(location);
    }
    pub fn date_time(&self) -> NaiveDateTime {
        self.logged_time
    }
    /// The event time rendered with [`DISPLAY_TIME_FORMAT`].
    pub fn event_date_time(&self) -> String {
        self.logged_time.format(DISPLAY_TIME_FORMAT).to_string()
    }
    pub fn set_event_date_time(&mut self, logged_time: NaiveDateTime) {
        self.logged_time = logged_time;
    }

    /// Appends a vote. The same author may vote more than once.
    pub fn add_vote(&mut self, vote: Vote) {
        debug!(event = %self.name, author = %vote.author_id(), up = vote.value(), "vote added");
        self.votes.push(vote);
    }
    /// Removes the earliest vote cast by `author_id`, if there is one.
    pub fn remove_vote_by_id(&mut self, author_id: &str) -> Option<Vote> {
        let index = self.votes.iter().position(|v| v.author_id() == author_id)?;
        debug!(event = %self.name, author = author_id, "vote removed");
        Some(self.votes.remove(index))
    }
    pub fn remove_vote_by_index(&mut self, index: usize) -> Down4Result<Vote> {
        if index >= self.votes.len() {
            return Err(Down4Error::VoteIndexOutOfRange {
                index,
                len: self.votes.len(),
            });
        }
        Ok(self.votes.remove(index))
    }
    pub fn total_votes(&self) -> usize {
        self.votes.len()
    }
    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }
    pub fn tally(&self) -> VoteTally {
        let up = self.votes.iter().filter(|v| v.value()).count();
        VoteTally {
            up,
            down: self.votes.len() - up,
        }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        compare_events(self, other) == Ordering::Equal
    }
}
impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_events(self, other)
    }
}

// Must hash exactly the fields `compare_events` looks at.
impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.logged_time.hash(state);
        self.name.hash(state);
        self.location.hash(state);
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tally = self.tally();
        write!(
            f,
            "{} @ {}, {} (by {}, {} up / {} down)",
            self.name,
            self.location,
            self.event_date_time(),
            self.author_id,
            tally.up,
            tally.down
        )
    }
}

/// Up and down vote counts of an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub up: usize,
    pub down: usize,
}
impl VoteTally {
    /// Up votes minus down votes.
    pub fn score(&self) -> i64 {
        self.up as i64 - self.down as i64
    }
}

/// Builds an [`Event`] one field at a time.
///
/// Unlike [`Event::new`], nothing is required up front; [`EventBuilder::build`]
/// reports the first field left unset.
#[derive(Debug, Default)]
pub struct EventBuilder {
    author_id: Option<AuthorId>,
    name: Option<String>,
    location: Option<String>,
    logged_time: Option<NaiveDateTime>,
    votes: Vec<Vote>,
}
impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn author(mut self, author_id: impl Into<AuthorId>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(String::from(name));
        self
    }
    pub fn location(mut self, location: &str) -> Self {
        self.location = Some(String::from(location));
        self
    }
    pub fn at(mut self, logged_time: NaiveDateTime) -> Self {
        self.logged_time = Some(logged_time);
        self
    }
    pub fn votes<I>(mut self, votes: I) -> Self
    where
        I: IntoIterator<Item = Vote>,
    {
        self.votes.extend(votes);
        self
    }
    pub fn build(self) -> Down4Result<Event> {
        Ok(Event {
            author_id: self.author_id.ok_or(Down4Error::MissingField("author"))?,
            name: self.name.ok_or(Down4Error::MissingField("name"))?,
            location: self.location.ok_or(Down4Error::MissingField("location"))?,
            logged_time: self.logged_time.ok_or(Down4Error::MissingField("date-time"))?,
            votes: self.votes,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        parse_event_time(s).unwrap()
    }

    fn juan() -> Event {
        Event::new("User_1", "Event Juan", "Juan's House", at("08-05-2021 14:00"))
    }

    #[test]
    fn parses_input_pattern() {
        let t = at("08-05-2021 14:00");
        assert_eq!(t.format("%Y-%m-%d %H:%M").to_string(), "2021-05-08 14:00");
    }

    #[test]
    fn rejects_other_patterns() {
        let err = parse_event_time("2021-05-08 14:00").unwrap_err();
        assert!(matches!(err, Down4Error::InvalidDateTime { .. }));
        assert!(parse_event_time("08-05-2021").is_err());
        assert!(parse_event_time("32-05-2021 14:00").is_err());
    }

    #[test]
    fn renders_medium_date_time() {
        assert_eq!(juan().event_date_time(), "May 8, 2021, 2:00:00 PM");
    }

    #[test]
    fn setters_replace_fields() {
        let mut ev = juan();
        ev.set_name("");
        ev.set_location("Park");
        ev.set_event_date_time(at("01-01-2022 09:30"));

        assert_eq!(ev.name(), "");
        assert_eq!(ev.location(), "Park");
        assert_eq!(ev.event_date_time(), "Jan 1, 2022, 9:30:00 AM");
        assert_eq!(ev.author_id(), "User_1");
    }

    #[test]
    fn votes_are_counted() {
        let mut ev = juan();
        ev.add_vote(Vote::up("a"));
        ev.add_vote(Vote::down("b"));
        ev.add_vote(Vote::up("a"));

        assert_eq!(ev.total_votes(), 3);
        assert_eq!(ev.tally(), VoteTally { up: 2, down: 1 });
        assert_eq!(ev.tally().score(), 1);
    }

    #[test]
    fn remove_by_id_takes_first_match_only() {
        let mut ev = juan();
        ev.add_vote(Vote::down("a"));
        ev.add_vote(Vote::up("b"));
        ev.add_vote(Vote::up("a"));

        let removed = ev.remove_vote_by_id("a").unwrap();
        assert!(!removed.value());
        assert_eq!(ev.total_votes(), 2);
        assert_eq!(ev.votes()[1].author_id(), "a");
    }

    #[test]
    fn remove_by_unknown_id_is_a_no_op() {
        let mut ev = juan();
        ev.add_vote(Vote::up("a"));

        assert!(ev.remove_vote_by_id("nobody").is_none());
        assert_eq!(ev.total_votes(), 1);
    }

    #[test]
    fn remove_by_index_checks_bounds() {
        let mut ev = juan();
        ev.add_vote(Vote::up("a"));
        ev.add_vote(Vote::up("b"));

        let err = ev.remove_vote_by_index(2).unwrap_err();
        assert!(matches!(
            err,
            Down4Error::VoteIndexOutOfRange { index: 2, len: 2 }
        ));
        assert_eq!(ev.total_votes(), 2);

        assert_eq!(ev.remove_vote_by_index(0).unwrap().author_id(), "a");
        assert_eq!(ev.total_votes(), 1);
    }

    #[test]
    fn ordering_uses_time_then_name_then_location() {
        let base = juan();
        let later = Event::new("x", "A", "A", at("08-05-2021 15:00"));
        let same_time_other_name = Event::new("x", "Event Zed", "A", at("08-05-2021 14:00"));
        let same_name_other_place = Event::new("x", "Event Juan", "Park", at("08-05-2021 14:00"));

        assert_eq!(compare_events(&base, &later), Ordering::Less);
        assert_eq!(compare_events(&base, &same_time_other_name), Ordering::Less);
        assert_eq!(compare_events(&base, &same_name_other_place), Ordering::Less);
        assert_eq!(compare_events(&later, &base), Ordering::Greater);
    }

    #[test]
    fn equality_ignores_author_and_votes() {
        let a = juan();
        let mut b = Event::new("User_9", "Event Juan", "Juan's House", at("08-05-2021 14:00"));
        b.add_vote(Vote::up("User_1"));

        assert_eq!(a, b);
        let set: HashSet<Event> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn mutation_changes_identity() {
        let snapshot = juan();
        let mut ev = snapshot.clone();
        ev.set_location("Elsewhere");

        assert_ne!(ev, snapshot);
    }

    #[test]
    fn display_lists_fields() {
        let mut ev = juan();
        ev.add_vote(Vote::up("User_2"));

        assert_eq!(
            ev.to_string(),
            "Event Juan @ Juan's House, May 8, 2021, 2:00:00 PM (by User_1, 1 up / 0 down)"
        );
    }

    #[test]
    fn builder_requires_every_field() {
        let err = EventBuilder::new()
            .author("User_1")
            .name("Party")
            .at(at("01-04-2021 15:00"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Down4Error::MissingField("location")));

        let ev = EventBuilder::new()
            .author("User_2")
            .name("Party")
            .location("Apple Gate")
            .at(at("01-04-2021 15:00"))
            .votes([Vote::up("User_1"), Vote::down("User_3")])
            .build()
            .unwrap();
        assert_eq!(ev.total_votes(), 2);
        assert_eq!(ev.location(), "Apple Gate");
    }
}
