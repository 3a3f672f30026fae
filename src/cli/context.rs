use rusqlite::Connection;
use std::io::{self, Write};

use crate::db::member_repo;
use crate::error::ShopError;
use crate::model::*;
use crate::queries::member_queries;

pub struct CLIContext {
    pub conn: Connection,
    pub actor: Option<String>,
}

impl CLIContext {
    pub fn new(conn: Connection, actor: Option<String>) -> Self {
        Self { conn, actor }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
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

    /// Find a member by `#<id>` or by name query. Prints an error if not
    /// found or ambiguous.
    pub fn find_member(&self, args: &str) -> Option<Member> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(raw_id) = query.strip_prefix('#') {
            let Ok(id) = Id::parse(raw_id) else {
                println!("No member with id {}", raw_id);
                return None;
            };
            return match member_repo::find_by_id(&self.conn, id) {
                Ok(Some(member)) => Some(member),
                Ok(None) => {
                    println!("No member with id {}", raw_id);
                    None
                }
                Err(e) => {
                    self.print_error(&e);
                    None
                }
            };
        }

        let matches = member_queries::search(&self.conn, query).unwrap_or_default();
        match matches.len() {
            0 => {
                println!("No member found matching '{}'", query);
                None
            }
            1 => matches.into_iter().next(),
            _ => {
                if let Some(exact) = matches.iter().find(|m| m.name().eq_ignore_ascii_case(query)) {
                    return Some(exact.clone());
                }
                println!("Multiple matches found:");
                for m in &matches {
                    println!("  #{} {}", display_id(m.id()), m.name());
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    pub fn print_error(&self, e: &ShopError) {
        println!("Error: {}", e);
    }
}

pub fn display_id<T>(id: Option<Id<T>>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "?".into())
}
