use chrono::NaiveDateTime;
use down4that::models::event::parse_event_time;

pub const HELP: &str = "\
add <name> | <location> | <dd-MM-yyyy HH:mm>
delete <n>
rename <n> <new name>
move <n> <new location>
reschedule <n> <dd-MM-yyyy HH:mm>
up <n> | down <n> | unvote <n>
list | help | quit";

/// One line typed by the user. Positions are 0-based here, 1-based on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        location: String,
        when: NaiveDateTime,
    },
    Delete(usize),
    Rename(usize, String),
    Move(usize, String),
    Reschedule(usize, NaiveDateTime),
    Vote(usize, bool),
    Unvote(usize),
    List,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match word {
        "add" => parse_add(rest),
        "delete" => Ok(Command::Delete(position(rest)?)),
        "rename" => {
            let (n, name) = position_and_text(rest)?;
            Ok(Command::Rename(n, name))
        }
        "move" => {
            let (n, location) = position_and_text(rest)?;
            Ok(Command::Move(n, location))
        }
        "reschedule" => {
            let (n, when) = position_and_text(rest)?;
            Ok(Command::Reschedule(n, time(&when)?))
        }
        "up" => Ok(Command::Vote(position(rest)?, true)),
        "down" => Ok(Command::Vote(position(rest)?, false)),
        "unvote" => Ok(Command::Unvote(position(rest)?)),
        "list" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{other}', try 'help'")),
    }
}

fn parse_add(rest: &str) -> Result<Command, String> {
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    match fields.as_slice() {
        [name, location, when] => Ok(Command::Add {
            name: String::from(*name),
            location: String::from(*location),
            when: time(when)?,
        }),
        _ => Err(String::from(
            "Expected: add <name> | <location> | <dd-MM-yyyy HH:mm>",
        )),
    }
}

fn position(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(format!("Invalid event number '{s}'")),
    }
}

fn position_and_text(s: &str) -> Result<(usize, String), String> {
    let (n, text) = s.split_once(' ').unwrap_or((s, ""));
    let text = text.trim();
    if text.is_empty() {
        return Err(String::from("Missing value after the event number"));
    }
    Ok((position(n)?, String::from(text)))
}

fn time(s: &str) -> Result<NaiveDateTime, String> {
    parse_event_time(s).map_err(|e| e.to_string())
}
