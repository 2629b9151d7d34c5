//! The interactive expedition loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use darwin_expedition::{Command, CurrentLocation, Expedition, Mode, Reply, narrator, parser};
use miette::IntoDiagnostic;

/// Run the interactive loop over stdin.
pub fn run(world: Option<&Path>, start: Option<&str>, quiet: bool) -> miette::Result<()> {
    let island = super::load_island(world)?;
    let mut session = match start {
        Some(id) => Expedition::at_cell(island, id).into_diagnostic()?,
        None => Expedition::new(island),
    };

    if !quiet {
        println!("{}", session.island().meta().name.bold());
        if !session.island().meta().description.is_empty() {
            println!("{}", session.island().meta().description);
        }
        println!();
        describe(&session);
    }

    let stdin = io::stdin();
    print_prompt()?;
    for line in stdin.lock().lines() {
        let line = line.into_diagnostic()?;
        match parser::parse_command(&line) {
            Command::Quit => {
                println!("You close your journal.");
                return Ok(());
            }
            command => dispatch(&mut session, command),
        }
        print_prompt()?;
    }
    println!();
    Ok(())
}

fn print_prompt() -> miette::Result<()> {
    print!("> ");
    io::stdout().flush().into_diagnostic()
}

fn dispatch(session: &mut Expedition, command: Command) {
    match command {
        Command::Move(direction) => {
            let reply = session.handle_move(direction.name());
            print_reply(&reply);
        }
        Command::Goto(target) => {
            // Inside, a named target is a room; outside, a cell id.
            let reply = if session.state().mode() == Mode::Interior {
                session.move_in_interior(&target)
            } else {
                session.travel_to(&target)
            };
            print_reply(&reply);
        }
        Command::Enter(name) => {
            let id = resolve_interior(session, &name);
            let reply = session.enter_interior(&id, None);
            print_reply(&reply);
        }
        Command::Exit => {
            let reply = session.exit_interior();
            print_reply(&reply);
        }
        Command::Look => describe(session),
        Command::Where => where_am_i(session),
        Command::Map => println!("{}", super::map::table(session.island())),
        Command::Directions => {
            let directions = session.valid_directions();
            if directions.is_empty() {
                println!("No paths lead from here; you are under a roof.");
            } else {
                println!("Paths lead {}.", join_directions(&directions));
            }
        }
        Command::Help => help(),
        Command::Quit => {}
        Command::FreeText(text) => match session.scan_free_text(&text) {
            Some(reply) => print_reply(&reply),
            None => println!("You note it in your journal; the island keeps its counsel."),
        },
    }
}

/// Accept an interior's registry key or its display name.
fn resolve_interior(session: &Expedition, name: &str) -> String {
    let interiors = session.island().interiors();
    if interiors.get(name).is_some() {
        return name.to_string();
    }
    interiors
        .layouts()
        .find(|l| l.name.eq_ignore_ascii_case(name))
        .map(|l| l.id.to_string())
        .unwrap_or_else(|| name.to_string())
}

fn print_reply(reply: &Reply) {
    if reply.success {
        println!("{}", reply.message);
        if reply.fatigue > 0 {
            println!("{}", format!("Fatigue +{}", reply.fatigue).dimmed());
        }
        if let Some(line) = narrator::specimens_line(&reply.specimens) {
            println!("{}", line.green());
        }
        for line in narrator::npc_lines(&reply.npcs) {
            println!("{}", line.cyan());
        }
    } else {
        println!("{}", reply.message.yellow());
    }
}

fn describe(session: &Expedition) {
    let Some(location) = session.current_location() else {
        println!("{}", "You cannot make out your surroundings.".yellow());
        return;
    };

    println!("{}", location.name().bold());
    if !location.description().is_empty() {
        println!("{}", location.description());
    }
    if let Some(line) = narrator::specimens_line(location.specimens()) {
        println!("{}", line.green());
    }
    for line in narrator::npc_lines(location.npcs()) {
        println!("{}", line.cyan());
    }

    match location {
        CurrentLocation::Exterior(cell) => {
            let directions = session.valid_directions();
            if !directions.is_empty() {
                println!("Paths lead {}.", join_directions(&directions));
            }
            for layout in session.island().interiors().layouts_at(cell.id.as_str()) {
                println!("You could enter {} ({}).", layout.name, layout.id);
            }
        }
        CurrentLocation::Interior { layout, .. } => {
            let rooms: Vec<&str> = layout.rooms.iter().map(|r| r.id.as_str()).collect();
            println!("Parts of {}: {}.", layout.name, rooms.join(", "));
        }
    }
}

fn join_directions(directions: &[darwin_core::Direction]) -> String {
    directions
        .iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn where_am_i(session: &Expedition) {
    let state = session.state();
    match &state.interior {
        Some(presence) => println!(
            "You are within {}, in {}.",
            presence.layout_name, presence.room_id
        ),
        None => println!(
            "You are at {}, grid {}.",
            state.exterior_cell_id, state.exterior_position
        ),
    }
}

fn help() {
    println!(
        "Movement: north, south, east, west and the diagonals (or n, ne, e, ...)\n\
         go <direction> — step that way\n\
         travel <cell id> — make directly for a place on the map\n\
         go <room id> — move between parts of a ship or building (inside)\n\
         enter <interior> / board <interior> — go inside\n\
         exit / leave / disembark — step back outside\n\
         look — describe your surroundings\n\
         where — report your position\n\
         map — the island's location table\n\
         directions — which ways you can walk\n\
         quit — close the journal\n\
         Anything else is noted in your journal; a plain statement of\n\
         intent (\"head north\") will be acted on."
    );
}
