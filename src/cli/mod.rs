pub mod context;
pub mod member_commands;
pub mod order_commands;

use std::path::Path;
use rusqlite::Connection;
use tracing::{error, info};

use crate::db::schema;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(db_path: &Path, actor: Option<String>) {
    println!("jpashop");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let conn = match Connection::open(db_path) {
        Ok(c) => c,
        Err(e) => {
            error!(path = %db_path.display(), error = %e, "failed to open database");
            eprintln!("Error opening database: {}", e);
            return;
        }
    };

    if let Err(e) = schema::initialize(&conn) {
        error!(error = %e, "failed to initialize schema");
        eprintln!("Error initializing database: {}", e);
        return;
    }

    info!(path = %db_path.display(), "database ready");
    let ctx = CLIContext::new(conn, actor);
    repl_loop(&ctx);
}

fn repl_loop(ctx: &CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "members" | "list" | "ls" => member_commands::list(ctx),
            "show" | "view" => member_commands::show(ctx, args),
            "join" => member_commands::join(ctx, args),
            "rename" => member_commands::rename(ctx, args),
            "remove" => member_commands::remove(ctx, args),

            "order" => order_commands::order(ctx, args),
            "cancel" => order_commands::cancel(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into the command word and the rest.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Members:
    members                 List all members
    show <name>             Show a member and their orders
    join [name]             Register a new member
    rename <name>           Change a member's name
    remove <name>           Delete a member without orders

  Orders:
    order <name>            Place an order for a member
    cancel <order id>       Cancel an order

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Names are case-insensitive and partial matches work
  - Use #<id> to pick a member by id"#);
}
