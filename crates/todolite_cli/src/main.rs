//! Interactive menu over the todolite core.
//!
//! # Responsibility
//! - Own all prompt/confirmation/disambiguation I/O; the core only ever
//!   receives pre-decided values.
//! - Register the console display observer at startup and deregister it on
//!   teardown.

use chrono::NaiveDateTime;
use log::info;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use todolite_core::{
    default_log_level, init_logging, Activity, ActivityEdit, ActivityList, Identifier,
    ListObserver,
};

/// Default store filename, passed explicitly to every load/save call.
const DEFAULT_STORE_FILE: &str = "activities.txt";

const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Display observer printing the rendered list after every change.
struct ConsoleDisplay;

impl ListObserver for ConsoleDisplay {
    fn on_change(&self, list: &ActivityList) {
        println!("\n{list}");
    }
}

fn main() {
    // Best effort: the menu works without file logging.
    let log_dir = std::env::temp_dir().join("todolite-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    let mut list = ActivityList::with_name("My Tasks");
    let display = Rc::new(ConsoleDisplay);
    list.add_observer(display.clone());

    match list.load_from_file(DEFAULT_STORE_FILE) {
        Ok(()) => println!("Loaded tasks from {DEFAULT_STORE_FILE}"),
        Err(err) => eprintln!("Starting with an empty list ({err})"),
    }

    if let Err(err) = run_menu(&mut list) {
        eprintln!("input error: {err}");
    }

    let handle: Rc<dyn ListObserver> = display;
    list.remove_observer(&handle);
    println!("Exiting...");
}

fn run_menu(list: &mut ActivityList) -> io::Result<()> {
    loop {
        println!();
        println!("Todo List");
        println!("1. Add Activity");
        println!("2. Remove Activity");
        println!("3. Edit Activity");
        println!("4. Mark Activity as Completed");
        println!("5. Find Activities by Name");
        println!("6. Save to File");
        println!("7. Load from File");
        println!("8. Rename List");
        println!("0. Exit");

        let choice = prompt("Choose an option: ")?;
        match choice.trim() {
            "1" => add_activity(list)?,
            "2" => remove_activity(list)?,
            "3" => edit_activity(list)?,
            "4" => mark_completed(list)?,
            "5" => find_by_name(list)?,
            "6" => save(list)?,
            "7" => load(list)?,
            "8" => rename(list)?,
            "0" => {
                let confirm = prompt("Are you sure you want to exit? (y/n): ")?;
                if confirm.trim().eq_ignore_ascii_case("y") {
                    return Ok(());
                }
            }
            other => println!("Invalid choice `{other}`. Try again."),
        }
    }
}

fn add_activity(list: &mut ActivityList) -> io::Result<()> {
    let description = prompt("Enter activity description: ")?;
    let description = description.trim();
    if description.is_empty() {
        println!("Description must not be empty.");
        return Ok(());
    }
    let due_date = prompt_due_date()?;
    list.add_activity(Activity::with_details(description, false, due_date));
    Ok(())
}

fn remove_activity(list: &mut ActivityList) -> io::Result<()> {
    let Some(identifier) = prompt_identifier(list)? else {
        return Ok(());
    };
    let confirm = prompt("Remove this activity? (y/n): ")?;
    let confirmed = confirm.trim().eq_ignore_ascii_case("y");

    match list.remove_activity(&identifier, confirmed) {
        Ok(Some(removed)) => info!(
            "event=cli_remove module=cli status=ok description={}",
            removed.description
        ),
        Ok(None) => println!("Removal cancelled."),
        Err(err) => println!("Could not remove: {err}"),
    }
    Ok(())
}

fn edit_activity(list: &mut ActivityList) -> io::Result<()> {
    let Some(identifier) = prompt_identifier(list)? else {
        return Ok(());
    };

    let description = prompt("New description (leave empty to keep): ")?;
    let description = description.trim();
    let completed = prompt("Completed? (y/n, leave empty to keep): ")?;
    let due_date_raw = prompt(&format!(
        "New due date ({DUE_DATE_FORMAT}, leave empty to keep): "
    ))?;

    let edit = ActivityEdit {
        description: (!description.is_empty()).then(|| description.to_string()),
        completed: match completed.trim() {
            "" => None,
            value => Some(value.eq_ignore_ascii_case("y")),
        },
        due_date: match due_date_raw.trim() {
            "" => None,
            value => Some(parse_due_date(value)),
        },
    };

    if !list.edit_activity(&identifier, &edit) {
        println!("Could not edit that activity; check the identifier and retry.");
    }
    Ok(())
}

fn mark_completed(list: &mut ActivityList) -> io::Result<()> {
    let Some(identifier) = prompt_identifier(list)? else {
        return Ok(());
    };
    if let Err(err) = list.mark_completed(&identifier) {
        println!("Could not mark as completed: {err}");
    }
    Ok(())
}

fn find_by_name(list: &mut ActivityList) -> io::Result<()> {
    let name = prompt("Enter the exact description to search for: ")?;
    let matches = list.find_by_name(name.trim());
    if matches.is_empty() {
        println!("No matching activities.");
        return Ok(());
    }
    for activity in matches {
        println!(
            "- {} [{}]",
            activity.description,
            if activity.completed { "Done" } else { "Not Done" }
        );
    }
    Ok(())
}

fn save(list: &mut ActivityList) -> io::Result<()> {
    let path = prompt_path()?;
    match list.save_to_file(&path) {
        Ok(()) => println!("Saved to {path}"),
        Err(err) => println!("Could not save: {err}"),
    }
    Ok(())
}

fn load(list: &mut ActivityList) -> io::Result<()> {
    let path = prompt_path()?;
    if let Err(err) = list.load_from_file(&path) {
        println!("Could not load: {err}");
    }
    Ok(())
}

fn rename(list: &mut ActivityList) -> io::Result<()> {
    let name = prompt("Enter the new list name: ")?;
    let name = name.trim();
    if name.is_empty() {
        println!("Name must not be empty.");
        return Ok(());
    }
    list.rename(name);
    Ok(())
}

/// Reads and classifies an identifier, resolving ambiguity interactively.
///
/// Returns `None` when the user gave unusable input and should pick a menu
/// option again.
fn prompt_identifier(list: &ActivityList) -> io::Result<Option<Identifier>> {
    let raw = prompt("Enter activity number or exact description: ")?;
    let identifier = match Identifier::parse(&raw) {
        Ok(identifier) => identifier,
        Err(err) => {
            println!("{err}");
            return Ok(None);
        }
    };

    // Probe the name case for ambiguity so the user decides, not the core.
    if let Identifier::ByName(name) = &identifier {
        let candidates = candidate_positions(list, name);
        if candidates.len() > 1 {
            return disambiguate(list, name, &candidates);
        }
    }
    Ok(Some(identifier))
}

fn disambiguate(
    list: &ActivityList,
    name: &str,
    candidates: &[usize],
) -> io::Result<Option<Identifier>> {
    println!("Several activities are named `{name}`:");
    for position in candidates {
        let activity = &list.activities()[position - 1];
        println!(
            "  {position}. {} [{}]",
            activity.description,
            if activity.completed { "Done" } else { "Not Done" }
        );
    }

    let choice = prompt("Pick one of the listed positions: ")?;
    match choice.trim().parse::<usize>() {
        Ok(position) if candidates.contains(&position) => {
            Ok(Some(Identifier::ByIndex(position)))
        }
        _ => {
            println!("Not one of the listed positions.");
            Ok(None)
        }
    }
}

// Mirrors the positions the core reports in `ListError::AmbiguousName`.
fn candidate_positions(list: &ActivityList, name: &str) -> Vec<usize> {
    list.activities()
        .iter()
        .enumerate()
        .filter(|(_, activity)| activity.description == name)
        .map(|(slot, _)| slot + 1)
        .collect()
}

fn prompt_path() -> io::Result<String> {
    let path = prompt(&format!("Enter filename (empty for {DEFAULT_STORE_FILE}): "))?;
    let path = path.trim();
    Ok(if path.is_empty() {
        DEFAULT_STORE_FILE.to_string()
    } else {
        path.to_string()
    })
}

fn prompt_due_date() -> io::Result<i64> {
    let raw = prompt(&format!(
        "Enter due date ({DUE_DATE_FORMAT}, empty for none): "
    ))?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    Ok(parse_due_date(raw))
}

fn parse_due_date(raw: &str) -> i64 {
    match NaiveDateTime::parse_from_str(raw, DUE_DATE_FORMAT) {
        Ok(moment) => moment.and_utc().timestamp(),
        Err(_) => {
            println!("Unrecognized date `{raw}`; storing as unset.");
            0
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line)
}
