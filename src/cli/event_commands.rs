use serde::Serialize;

use crate::cli::context::CLIContext;
use crate::db::event_repo;
use crate::model::{Id, Participant};
use crate::ops::{event_ops, matchmake_ops};
use crate::queries::pair_queries;

pub fn list(ctx: &CLIContext) {
    match event_repo::all(&ctx.conn) {
        Ok(events) if events.is_empty() => println!("No events yet."),
        Ok(events) => {
            let today = CLIContext::today();
            for e in events {
                let status = if e.is_active(today) {
                    "active"
                } else if e.is_upcoming(today) {
                    "upcoming"
                } else {
                    "ended"
                };
                println!(
                    "  {:<24} {} .. {}  [{}]  {} participant(s)",
                    e.title,
                    e.starts_on,
                    e.ends_on,
                    status,
                    e.participant_ids.len()
                );
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}

/// `event add` (interactive)
pub fn add(ctx: &CLIContext) {
    let Some(title) = ctx.prompt("Title: ") else { return };
    let Some(description) = ctx.prompt("Description (optional): ") else { return };
    let Some(starts_on) = ctx.prompt_date("Starts on (YYYY-MM-DD): ") else { return };
    let Some(ends_on) = ctx.prompt_date("Ends on (YYYY-MM-DD): ") else { return };

    let description = if description.is_empty() { None } else { Some(description.as_str()) };

    match event_ops::create_event(&ctx.conn, &title, description, starts_on, ends_on, Vec::new()) {
        Ok(e) => println!("Created event '{}'", e.title),
        Err(e) => ctx.print_error(&e),
    }
}

/// `event show <title>`
pub fn show(ctx: &CLIContext, args: &str) {
    let Some(event) = ctx.find_event(args) else { return };

    println!("{} ({} .. {})", event.title, event.starts_on, event.ends_on);
    if let Some(desc) = &event.description {
        println!("  {}", desc);
    }

    println!("Roster:");
    for p in ctx.roster_of(&event) {
        println!("  {:<16} {}", p.username, p.display_name());
    }

    match pair_queries::unpaired_participants(&ctx.conn, event.id) {
        Ok(unpaired) if !unpaired.is_empty() => {
            println!("Not yet shuffled:");
            for p in unpaired {
                println!("  {}", p.username);
            }
        }
        Ok(_) => {}
        Err(e) => ctx.print_error(&e),
    }
}

/// `event delete <title>`
pub fn delete(ctx: &CLIContext, args: &str) {
    let Some(event) = ctx.find_event(args) else { return };

    match event_ops::delete_event(&ctx.conn, event.id) {
        Ok(()) => println!("Deleted event '{}'", event.title),
        Err(e) => ctx.print_error(&e),
    }
}

/// `roster <title> add|remove <username>...`
pub fn roster(ctx: &CLIContext, args: &str) {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() < 3 {
        println!("Usage: roster <event> add|remove <username>...");
        return;
    }

    let Some(event) = ctx.find_event(parts[0]) else { return };
    let Some(ids) = resolve_usernames(ctx, &parts[2..]) else { return };

    let result = match parts[1] {
        "add" => event_ops::add_participants(&ctx.conn, event.id, ids),
        "remove" => event_ops::remove_participants(&ctx.conn, event.id, ids),
        other => {
            println!("Unknown roster action '{}'", other);
            return;
        }
    };

    match result {
        Ok(updated) => println!(
            "Roster of '{}' now has {} participant(s)",
            updated.title,
            updated.participant_ids.len()
        ),
        Err(e) => ctx.print_error(&e),
    }
}

/// `shuffle <title> [<username>...]` — no usernames means the whole roster.
pub fn shuffle(ctx: &CLIContext, args: &str) {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.is_empty() {
        println!("Usage: shuffle <event> [<username>...]");
        return;
    }

    let Some(event) = ctx.find_event(parts[0]) else { return };
    let mut rng = rand::thread_rng();

    let result = if parts.len() == 1 {
        matchmake_ops::matchmake_all(&ctx.conn, event.id, &mut rng)
    } else {
        let Some(ids) = resolve_usernames(ctx, &parts[1..]) else { return };
        matchmake_ops::matchmake(&ctx.conn, event.id, &ids, &mut rng)
    };

    match result {
        Ok(()) => {
            println!("Shuffled participants!");
            pairs(ctx, parts[0]);
        }
        Err(e) => ctx.print_error(&e),
    }
}

/// `pairs <title>`
pub fn pairs(ctx: &CLIContext, args: &str) {
    let Some(event) = ctx.find_event(args) else { return };

    match pair_queries::assignments_for_event(&ctx.conn, event.id) {
        Ok(assignments) if assignments.is_empty() => println!("No pairs yet; run shuffle first."),
        Ok(assignments) => {
            for (gifter, giftee) in assignments {
                println!("  {} -> {}", gifter.display_name(), giftee.display_name());
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}

#[derive(Serialize)]
struct ExportRow {
    gifter: String,
    giftee: String,
}

/// `export <title>` — assignments as JSON on stdout.
pub fn export(ctx: &CLIContext, args: &str) {
    let Some(event) = ctx.find_event(args) else { return };

    match pair_queries::assignments_for_event(&ctx.conn, event.id) {
        Ok(assignments) => {
            let rows: Vec<ExportRow> = assignments
                .into_iter()
                .map(|(gifter, giftee)| ExportRow {
                    gifter: gifter.username,
                    giftee: giftee.username,
                })
                .collect();
            match serde_json::to_string_pretty(&rows) {
                Ok(json) => println!("{}", json),
                Err(e) => ctx.print_error(&e.into()),
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}

fn resolve_usernames(ctx: &CLIContext, usernames: &[&str]) -> Option<Vec<Id<Participant>>> {
    let mut ids = Vec::with_capacity(usernames.len());
    for username in usernames {
        ids.push(ctx.find_participant(username)?.id);
    }
    Some(ids)
}
