use crate::cli::context::CLIContext;
use crate::db::participant_repo;
use crate::ops::participant_ops;

pub fn list(ctx: &CLIContext) {
    match participant_repo::all(&ctx.conn) {
        Ok(participants) if participants.is_empty() => println!("No participants yet."),
        Ok(participants) => {
            for p in participants {
                let child = if p.is_child() { " (child)" } else { "" };
                println!("  {:<16} {}{}", p.username, p.display_name(), child);
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}

/// `participant add <username> <first> <last>`
pub fn add(ctx: &CLIContext, args: &str) {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() != 3 {
        println!("Usage: participant add <username> <first> <last>");
        return;
    }

    match participant_ops::register(&ctx.conn, parts[0], parts[1], parts[2]) {
        Ok(p) => println!("Registered {} ({})", p.display_name(), p.username),
        Err(e) => ctx.print_error(&e),
    }
}

/// `participant child <parent-username> <username> <first> <last>`
pub fn add_child(ctx: &CLIContext, args: &str) {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() != 4 {
        println!("Usage: participant child <parent-username> <username> <first> <last>");
        return;
    }

    let Some(parent) = ctx.find_participant(parts[0]) else {
        return;
    };

    match participant_ops::register_child(&ctx.conn, parent.id, parts[1], parts[2], parts[3]) {
        Ok(p) => println!(
            "Registered child {} ({}) under {}",
            p.display_name(),
            p.username,
            parent.username
        ),
        Err(e) => ctx.print_error(&e),
    }
}

/// `participant remove <username>`
pub fn remove(ctx: &CLIContext, args: &str) {
    let Some(participant) = ctx.find_participant(args) else {
        return;
    };

    match participant_ops::delete_participant(&ctx.conn, participant.id) {
        Ok(()) => println!("Removed {}", participant.username),
        Err(e) => ctx.print_error(&e),
    }
}
