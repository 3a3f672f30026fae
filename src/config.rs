use std::path::PathBuf;

use crate::error::{ShopError, ShopResult};

pub const DB_ENV: &str = "JPASHOP_DB";
pub const USER_ENV: &str = "JPASHOP_USER";
pub const DEFAULT_DB_PATH: &str = ".data/jpashop.db";

/// What the binary should do once configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Repl,
    Import(PathBuf),
    Export(PathBuf),
    Help,
}

/// Runtime configuration: command line flags first, then environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// Recorded as `created_by` / `last_modified_by` on writes.
    pub actor: Option<String>,
    pub action: Action,
}

impl Config {
    pub fn from_env() -> ShopResult<Self> {
        Self::from_args(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    pub fn from_args<I, F>(args: I, env: F) -> ShopResult<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let mut db_path: Option<PathBuf> = None;
        let mut actor: Option<String> = None;
        let mut action = Action::Repl;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" | "-f" => {
                    db_path = Some(PathBuf::from(require_value(&mut args, "--file", "a path")?));
                }
                "--user" | "-u" => {
                    actor = Some(require_value(&mut args, "--user", "a name")?);
                }
                "--import" => {
                    action = Action::Import(PathBuf::from(require_value(&mut args, "--import", "a JSON file path")?));
                }
                "--export" => {
                    action = Action::Export(PathBuf::from(require_value(&mut args, "--export", "a JSON file path")?));
                }
                "--help" | "-h" => action = Action::Help,
                other => {
                    return Err(ShopError::Other(format!("Unknown argument: {}", other)));
                }
            }
        }

        let db_path = db_path
            .or_else(|| env(DB_ENV).filter(|s| !s.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));
        let actor = actor.or_else(|| env(USER_ENV)).filter(|s| !s.trim().is_empty());

        Ok(Self { db_path, actor, action })
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

fn require_value(args: &mut impl Iterator<Item = String>, flag: &str, what: &str) -> ShopResult<String> {
    args.next()
        .ok_or_else(|| ShopError::Other(format!("{} requires {} argument", flag, what)))
}

pub fn usage() -> &'static str {
    "jpashop - member and order store

Usage: jpashop [OPTIONS]

Options:
  -f, --file <PATH>      Database file path (default: .data/jpashop.db, env JPASHOP_DB)
  -u, --user <NAME>      Name recorded on created/modified records (env JPASHOP_USER)
  --import <JSON_PATH>   Import members and orders into a new database
  --export <JSON_PATH>   Export members and orders as JSON
  -h, --help             Show this help"
}
