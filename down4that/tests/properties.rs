use std::{
    cmp::Ordering,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use chrono::{NaiveDate, NaiveDateTime};
use down4that::models::{event::compare_events, Event, EventList, Vote};
use proptest::prelude::*;

fn date_time() -> impl Strategy<Value = NaiveDateTime> {
    // A narrow range makes equal times likely enough to exercise the tie-breakers
    (0i64..4, 0u32..3, 0u32..2).prop_map(|(day, hour, half)| {
        NaiveDate::from_ymd_opt(2021, 5, 1)
            .unwrap()
            .and_hms_opt(hour * 5, half * 30, 0)
            .unwrap()
            + chrono::Duration::days(day)
    })
}

fn event() -> impl Strategy<Value = Event> {
    ("[ab]{1,2}", "[ab]{1,2}", "[xy]{1,2}", date_time())
        .prop_map(|(author, name, location, when)| Event::new(author, &name, &location, when))
}

fn hash_of(event: &Event) -> u64 {
    let mut hasher = DefaultHasher::new();
    event.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn comparison_follows_first_differing_key(a in event(), b in event()) {
        let expected = a
            .date_time()
            .cmp(&b.date_time())
            .then(a.name().cmp(b.name()))
            .then(a.location().cmp(b.location()));

        prop_assert_eq!(compare_events(&a, &b), expected);
        prop_assert_eq!(compare_events(&b, &a), expected.reverse());
    }

    #[test]
    fn equality_matches_comparison(a in event(), b in event()) {
        prop_assert_eq!(a == b, compare_events(&a, &b) == Ordering::Equal);
    }

    #[test]
    fn equal_events_hash_equal(a in event(), b in event()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn comparison_is_transitive(a in event(), b in event(), c in event()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn vote_counts_track_add_and_remove(
        authors in prop::collection::vec("[abc]", 0..8),
        target in "[abcd]",
        ev in event(),
    ) {
        let mut ev = ev;
        for (i, author) in authors.iter().enumerate() {
            let before = ev.total_votes();
            ev.add_vote(Vote::new(author.as_str(), i % 2 == 0));
            prop_assert_eq!(ev.total_votes(), before + 1);
        }

        let before = ev.total_votes();
        let removed = ev.remove_vote_by_id(&target);
        let expected = if authors.contains(&target) { before - 1 } else { before };
        prop_assert_eq!(removed.is_some(), authors.contains(&target));
        prop_assert_eq!(ev.total_votes(), expected);
    }

    #[test]
    fn switching_twice_is_identity(value in any::<bool>()) {
        let mut vote = Vote::new("test_user", value);
        vote.switch_value();
        vote.switch_value();
        prop_assert_eq!(vote.value(), value);
    }

    #[test]
    fn list_stays_sorted_and_unique(events in prop::collection::vec(event(), 0..12)) {
        let mut list = EventList::new();
        for ev in events {
            let before = list.size();
            let was_listed = list.contains(&ev);
            let added = list.add_event(ev).is_ok();
            prop_assert_eq!(added, !was_listed);
            prop_assert_eq!(list.size(), before + usize::from(added));
        }

        let listed: Vec<_> = list.iter().collect();
        for pair in listed.windows(2) {
            prop_assert_eq!(compare_events(pair[0], pair[1]), Ordering::Less);
        }
    }
}
