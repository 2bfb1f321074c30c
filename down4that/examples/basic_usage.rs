use down4that::models::{
    event::{parse_event_time, Event, EventBuilder},
    EventList, Vote,
};

fn main() -> Result<(), down4that::Down4Error> {
    // Times are typed in as dd-MM-yyyy HH:mm
    let juans = Event::new(
        "User_1",
        "Event Juan",
        "Juan's House",
        parse_event_time("08-05-2021 14:00")?,
    );
    // The builder tells us which field we forgot instead of needing all of them up front
    let party = EventBuilder::new()
        .author("User_2")
        .name("Party")
        .location("Apple Gate")
        .at(parse_event_time("01-04-2021 15:00")?)
        .build()?;

    let mut list = EventList::new();
    list.add_event(juans.clone())?;
    list.add_event(party)?;

    // Events inside a list are changed through it so it can keep them in order
    list.modify(&juans, |e| {
        e.add_vote(Vote::up("User_2"));
        e.add_vote(Vote::down("User_3"));
    })?;

    // The party comes first since it happens earlier
    println!("{}", list.display_events());

    list.delete_event(&juans);
    println!("{} event(s) left", list.size());
    Ok(())
}
