//! Down4That helps a group settle on what to do together.
//!
//! Anyone can propose an [`Event`], saying what it is, where it happens and when.
//! Everyone else casts a [`Vote`] on it to say whether they are down for it or not.
//!
//! [`Event`] values are identified by what, where and when only. Two events with the
//! same date-time, name and location are the same event no matter who logged them or
//! how they were voted on; that same triple is what orders them.
//!
//! [`EventList`] gathers events in that order and refuses duplicates. It is what a
//! front-end, like the `down4` binary, lists back to its users.
//!
//! Times are typed in with the [`EVENT_TIME_FORMAT`] pattern (`dd-MM-yyyy HH:mm`) and
//! shown with [`DISPLAY_TIME_FORMAT`].
//!
//! To see it in action you can look at `examples/basic_usage.rs`.
//!
//! [`Event`]: crate::models::Event
//! [`Vote`]: crate::models::Vote
//! [`EventList`]: crate::models::EventList
//! [`EVENT_TIME_FORMAT`]: crate::models::event::EVENT_TIME_FORMAT
//! [`DISPLAY_TIME_FORMAT`]: crate::models::event::DISPLAY_TIME_FORMAT

/// Errors returned by this crate.
pub mod error;
/// This module holds the data model of down4that.
pub mod models;

pub use error::{Down4Error, Down4Result};
