use std::collections::HashSet;
use std::path::Path;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::{member_repo, order_repo, schema};
use crate::error::{ShopError, ShopResult};
use crate::model::{Member, Order};
use crate::validation::{self, normalize_address};

/// Everything in the store, as written by `export_json`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub members: Vec<Member>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub members: usize,
    pub orders: usize,
}

pub fn export_snapshot(conn: &Connection) -> ShopResult<Snapshot> {
    Ok(Snapshot {
        members: member_repo::find_all(conn)?,
    })
}

/// Writes every member, with its orders, to `json_path`.
pub fn export_json(conn: &Connection, json_path: &Path) -> ShopResult<usize> {
    let snapshot = export_snapshot(conn)?;
    std::fs::write(json_path, serde_json::to_string_pretty(&snapshot)?)?;
    info!(path = %json_path.display(), members = snapshot.members.len(), "exported");
    Ok(snapshot.members.len())
}

/// Exports the existing database at `db_path`. A missing database is an
/// error rather than an empty export.
pub fn export_database(db_path: &Path, json_path: &Path) -> ShopResult<usize> {
    if !db_path.exists() {
        return Err(ShopError::NotFound {
            entity_type: "Database".into(),
            id: db_path.display().to_string(),
        });
    }

    let conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;
    export_json(&conn, json_path)
}

/// Loads a JSON snapshot into the database at `db_path` in one transaction.
pub fn import_json(json_path: &Path, db_path: &Path, actor: Option<&str>) -> ShopResult<ImportStats> {
    let json_str = std::fs::read_to_string(json_path)?;
    let snapshot: Snapshot = serde_json::from_str(&json_str)?;

    let mut conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;

    let tx = conn.transaction()?;
    let stats = import_snapshot(&tx, actor, &snapshot)?;
    tx.commit()?;

    info!(path = %json_path.display(), members = stats.members, orders = stats.orders, "imported");
    Ok(stats)
}

/// Inserts the snapshot's members and orders. Ids are reassigned by the
/// store; each order is re-pointed at its member's new id.
///
/// Names go through the same rules as `member_ops::join`: non-blank and
/// unique both within the snapshot and against the target store. Nothing
/// is written unless every name passes.
pub fn import_snapshot(conn: &Connection, actor: Option<&str>, snapshot: &Snapshot) -> ShopResult<ImportStats> {
    let names = validate_names(conn, snapshot)?;
    let mut stats = ImportStats::default();

    for (source, name) in snapshot.members.iter().zip(names) {
        let mut member = Member::create(name, normalize_address(source.address().cloned()));
        let member_id = member_repo::insert(conn, actor, &mut member)?;
        stats.members += 1;

        for source_order in source.orders() {
            let mut order = Order {
                id: None,
                member_id,
                ..source_order.clone()
            };
            order_repo::insert(conn, actor, &mut order)?;
            stats.orders += 1;
        }
    }

    Ok(stats)
}

fn validate_names(conn: &Connection, snapshot: &Snapshot) -> ShopResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(snapshot.members.len());

    for source in &snapshot.members {
        let name = validation::non_blank(source.name(), "name")?;
        if !seen.insert(name.clone()) || !member_repo::find_by_name(conn, &name)?.is_empty() {
            return Err(ShopError::AlreadyExists {
                entity_type: "Member".into(),
                identifier: name,
            });
        }
        names.push(name);
    }

    Ok(names)
}
