pub mod context;
pub mod event_commands;
pub mod participant_commands;

use std::path::Path;

use rusqlite::Connection;

use crate::cli::context::CLIContext;
use crate::db::schema;

pub fn run(db_path: &Path) {
    let conn = match Connection::open(db_path) {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Failed to open {}: {}", db_path.display(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = schema::initialize(&conn) {
        eprintln!("Failed to initialize schema: {}", e);
        std::process::exit(1);
    }

    let ctx = CLIContext::new(conn);
    println!("gifted - gift exchange organizer. Type 'help' for commands.");

    loop {
        let Some(line) = ctx.read_line("gifted> ") else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "help" => print_help(),
            "quit" | "exit" => break,
            "participants" => participant_commands::list(&ctx),
            "participant" => dispatch_participant(&ctx, args),
            "events" => event_commands::list(&ctx),
            "event" => dispatch_event(&ctx, args),
            "roster" => event_commands::roster(&ctx, args),
            "shuffle" => event_commands::shuffle(&ctx, args),
            "pairs" => event_commands::pairs(&ctx, args),
            "export" => event_commands::export(&ctx, args),
            other => println!("Unknown command '{}'. Type 'help' for commands.", other),
        }
    }
}

fn dispatch_participant(ctx: &CLIContext, args: &str) {
    let (action, rest) = match args.split_once(char::is_whitespace) {
        Some((action, rest)) => (action, rest.trim()),
        None => (args, ""),
    };

    match action {
        "add" => participant_commands::add(ctx, rest),
        "child" => participant_commands::add_child(ctx, rest),
        "remove" => participant_commands::remove(ctx, rest),
        _ => println!("Usage: participant add|child|remove ..."),
    }
}

fn dispatch_event(ctx: &CLIContext, args: &str) {
    let (action, rest) = match args.split_once(char::is_whitespace) {
        Some((action, rest)) => (action, rest.trim()),
        None => (args, ""),
    };

    match action {
        "add" => event_commands::add(ctx),
        "show" => event_commands::show(ctx, rest),
        "delete" => event_commands::delete(ctx, rest),
        _ => println!("Usage: event add|show|delete ..."),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  participants                                list everyone");
    println!("  participant add <username> <first> <last>   register a participant");
    println!("  participant child <parent> <username> <first> <last>");
    println!("  participant remove <username>");
    println!("  events                                      list events");
    println!("  event add                                   create an event (interactive)");
    println!("  event show <title>");
    println!("  event delete <title>");
    println!("  roster <event> add|remove <username>...");
    println!("  shuffle <event> [<username>...]             assign gifters (subset or all)");
    println!("  pairs <event>                               show who buys for whom");
    println!("  export <event>                              assignments as JSON");
    println!("  quit");
}
