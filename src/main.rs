use jpashop::config::{self, Action, Config};
use tracing::error;

fn main() {
    jpashop::logging::setup_tracing();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if config.action == Action::Help {
        println!("{}", config::usage());
        return;
    }

    if let Some(dir) = config.db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: cannot create {}: {}", dir.display(), e);
            std::process::exit(1);
        }
    }

    match &config.action {
        Action::Import(json_path) => {
            println!("Importing from {}...", json_path.display());
            if config.db_path.exists() {
                eprintln!("Error: Database file {} already exists.", config.db_path.display());
                eprintln!("Remove it first or use --file to specify a different path.");
                std::process::exit(1);
            }
            match jpashop::migrate::import_json(json_path, &config.db_path, config.actor()) {
                Ok(stats) => {
                    println!("Import complete!");
                    println!("  Members: {}", stats.members);
                    println!("  Orders: {}", stats.orders);
                }
                Err(e) => {
                    error!(error = %e, "import failed");
                    eprintln!("Import failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Action::Export(json_path) => {
            let result = jpashop::migrate::export_database(&config.db_path, json_path);
            match result {
                Ok(count) => println!("Exported {} member(s) to {}", count, json_path.display()),
                Err(e) => {
                    error!(error = %e, "export failed");
                    eprintln!("Export failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Action::Repl => jpashop::cli::run(&config.db_path, config.actor.clone()),
        Action::Help => {}
    }
}
