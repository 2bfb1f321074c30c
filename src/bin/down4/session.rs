use std::io::Write;

use anyhow::{anyhow, Context};
use down4that::models::{Event, EventList, Vote};
use tracing::info;

use crate::command::{Command, HELP};

/// The events of one sitting at the terminal, all acted on as a single author.
pub struct Session {
    author: String,
    events: EventList,
}

impl Session {
    pub fn new(author: String) -> Self {
        Self {
            author,
            events: EventList::new(),
        }
    }

    pub fn events(&self) -> &EventList {
        &self.events
    }

    /// Runs one command, writing whatever the user should see to `out`.
    ///
    /// `Quit` is left to the caller.
    pub fn run<W: Write>(&mut self, command: Command, out: &mut W) -> anyhow::Result<()> {
        match command {
            Command::Add {
                name,
                location,
                when,
            } => {
                let event = Event::new(self.author.as_str(), &name, &location, when);
                self.events.add_event(event)?;
                info!(%name, "event proposed");
                writeln!(out, "{}", self.events)?;
            }
            Command::Delete(n) => {
                let event = self.nth(n)?;
                self.events.delete_event(&event);
                writeln!(out, "Deleted {}", event.name())?;
            }
            Command::Rename(n, name) => self.edit(n, out, |e| e.set_name(&name))?,
            Command::Move(n, location) => self.edit(n, out, |e| e.set_location(&location))?,
            Command::Reschedule(n, when) => self.edit(n, out, |e| e.set_event_date_time(when))?,
            Command::Vote(n, up) => {
                let author = self.author.clone();
                self.edit(n, out, |e| {
                    // One vote per author per event from this front-end
                    e.remove_vote_by_id(&author);
                    e.add_vote(Vote::new(author.as_str(), up));
                })?
            }
            Command::Unvote(n) => {
                let author = self.author.clone();
                let mut removed = false;
                self.edit(n, out, |e| removed = e.remove_vote_by_id(&author).is_some())?;
                if !removed {
                    writeln!(out, "You had not voted on that event")?;
                }
            }
            Command::List => writeln!(out, "{}", self.events.display_events())?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn nth(&self, n: usize) -> anyhow::Result<Event> {
        self.events
            .get(n)
            .cloned()
            .ok_or_else(|| anyhow!("There is no event number {}", n + 1))
    }

    fn edit<W, F>(&mut self, n: usize, out: &mut W, edit: F) -> anyhow::Result<()>
    where
        W: Write,
        F: FnOnce(&mut Event),
    {
        let event = self.nth(n)?;
        self.events
            .modify(&event, edit)
            .with_context(|| format!("Could not update {}", event.name()))?;
        writeln!(out, "{}", self.events)?;
        Ok(())
    }
}
