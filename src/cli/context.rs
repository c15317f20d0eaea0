use chrono::{Local, NaiveDate};
use rusqlite::Connection;
use std::io::{self, Write};

use crate::model::{Event, Participant};
use crate::queries::event_queries;

pub struct CLIContext {
    pub conn: Connection,
}

impl CLIContext {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Read a date in YYYY-MM-DD form. Prints an error on bad input.
    pub fn prompt_date(&self, prompt: &str) -> Option<NaiveDate> {
        let raw = self.prompt(prompt)?;
        match raw.parse() {
            Ok(date) => Some(date),
            Err(_) => {
                println!("Expected a date like 2026-12-24, got '{}'", raw);
                None
            }
        }
    }

    /// Find an event by title query. Prints error if not found or ambiguous.
    pub fn find_event(&self, args: &str) -> Option<Event> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let events = crate::db::event_repo::all(&self.conn).unwrap_or_default();
        let lower = query.to_lowercase();
        let matches: Vec<&Event> = events
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&lower))
            .collect();

        match matches.len() {
            0 => {
                println!("No event found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                if let Some(exact) = matches.iter().find(|e| e.title.eq_ignore_ascii_case(query)) {
                    return Some((*exact).clone());
                }
                println!("Multiple matches found:");
                for e in &matches {
                    println!("  {}", e.title);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Find a participant by exact username.
    pub fn find_participant(&self, username: &str) -> Option<Participant> {
        match crate::db::participant_repo::find_by_username(&self.conn, username.trim()) {
            Ok(Some(p)) => Some(p),
            Ok(None) => {
                println!("No participant with username '{}'", username.trim());
                None
            }
            Err(e) => {
                self.print_error(&e);
                None
            }
        }
    }

    /// Roster of an event, for display.
    pub fn roster_of(&self, event: &Event) -> Vec<Participant> {
        event_queries::roster(&self.conn, event.id).unwrap_or_default()
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::GiftedError) {
        println!("Error: {}", e);
    }
}
