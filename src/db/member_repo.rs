use rusqlite::{params, Connection, Row};
use tracing::debug;

use crate::db::{format_timestamp, order_repo, parse_timestamp};
use crate::error::{ShopError, ShopResult};
use crate::model::{Address, Audit, Id, Member};

const SELECT_MEMBER: &str = "SELECT member_id, name, city, street, zipcode,
        created_by, created_at, last_modified_by, last_modified_at
     FROM members";

type MemberRow = (
    i64,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    String,
    Option<String>,
    String,
);

/// Insert a new member and assign the generated id to it.
pub fn insert(conn: &Connection, actor: Option<&str>, member: &mut Member) -> ShopResult<Id<Member>> {
    if let Some(id) = member.id() {
        return Err(ShopError::AlreadyPersisted {
            entity_type: "Member".into(),
            id: id.to_string(),
        });
    }

    *member.audit_mut() = Audit::now(actor);
    let address = member.address();
    let audit = member.audit();
    conn.execute(
        "INSERT INTO members (name, city, street, zipcode, created_by, created_at, last_modified_by, last_modified_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            member.name(),
            address.map(|a| a.city.as_str()),
            address.map(|a| a.street.as_str()),
            address.map(|a| a.zipcode.as_str()),
            audit.created_by,
            format_timestamp(audit.created_at),
            audit.last_modified_by,
            format_timestamp(audit.last_modified_at),
        ],
    )?;

    let id = Id::new(conn.last_insert_rowid());
    member.set_id(id);
    debug!(%id, name = member.name(), "member inserted");
    Ok(id)
}

pub fn update(conn: &Connection, actor: Option<&str>, member: &mut Member) -> ShopResult<()> {
    let id = member.id().ok_or_else(|| ShopError::NotPersisted {
        entity_type: "Member".into(),
    })?;

    member.audit_mut().touch(actor);
    let address = member.address();
    let audit = member.audit();
    let changed = conn.execute(
        "UPDATE members SET name = ?1, city = ?2, street = ?3, zipcode = ?4,
         last_modified_by = ?5, last_modified_at = ?6
         WHERE member_id = ?7",
        params![
            member.name(),
            address.map(|a| a.city.as_str()),
            address.map(|a| a.street.as_str()),
            address.map(|a| a.zipcode.as_str()),
            audit.last_modified_by,
            format_timestamp(audit.last_modified_at),
            id.value,
        ],
    )?;

    if changed == 0 {
        return Err(ShopError::NotFound {
            entity_type: "Member".into(),
            id: id.to_string(),
        });
    }
    debug!(%id, "member updated");
    Ok(())
}

pub fn delete(conn: &Connection, id: Id<Member>) -> ShopResult<()> {
    conn.execute("DELETE FROM members WHERE member_id = ?1", params![id.value])?;
    debug!(%id, "member deleted");
    Ok(())
}

pub fn find_by_id(conn: &Connection, id: Id<Member>) -> ShopResult<Option<Member>> {
    let mut stmt = conn.prepare(&format!("{} WHERE member_id = ?1", SELECT_MEMBER))?;

    let result = stmt.query_row(params![id.value], read_row);

    match result {
        Ok(row) => Ok(Some(into_member(conn, row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn find_all(conn: &Connection) -> ShopResult<Vec<Member>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY member_id", SELECT_MEMBER))?;

    let rows = stmt
        .query_map([], read_row)?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter().map(|row| into_member(conn, row)).collect()
}

/// Members whose name matches exactly.
pub fn find_by_name(conn: &Connection, name: &str) -> ShopResult<Vec<Member>> {
    let mut stmt = conn.prepare(&format!("{} WHERE name = ?1 ORDER BY member_id", SELECT_MEMBER))?;

    let rows = stmt
        .query_map(params![name], read_row)?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter().map(|row| into_member(conn, row)).collect()
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<MemberRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
    ))
}

fn into_member(conn: &Connection, row: MemberRow) -> ShopResult<Member> {
    let (id, name, city, street, zipcode, created_by, created_at, last_modified_by, last_modified_at) = row;
    let member_id = Id::new(id);
    let audit = Audit {
        created_by,
        created_at: parse_timestamp(&created_at)?,
        last_modified_by,
        last_modified_at: parse_timestamp(&last_modified_at)?,
    };
    let orders = order_repo::find_by_member(conn, member_id)?;

    Ok(Member::hydrate(
        member_id,
        name,
        Address::from_columns(city, street, zipcode),
        audit,
        orders,
    ))
}
