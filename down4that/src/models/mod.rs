pub mod event;
mod event_list;
mod id;
mod vote;

pub use self::event::{Event, EventBuilder, VoteTally};
pub use self::event_list::EventList;
pub use self::id::AuthorId;
pub use self::vote::Vote;
