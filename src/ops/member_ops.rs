use rusqlite::Connection;
use tracing::info;

use crate::db::member_repo;
use crate::error::{ShopError, ShopResult};
use crate::model::{Address, Id, Member};
use crate::validation::{self, normalize_address};

/// Register a new member. Names must be non-blank and unique.
pub fn join(
    conn: &Connection,
    actor: Option<&str>,
    name: &str,
    address: Option<Address>,
) -> ShopResult<Member> {
    let valid_name = validation::non_blank(name, "name")?;
    ensure_name_free(conn, &valid_name, None)?;

    let mut member = Member::create(valid_name, normalize_address(address));
    let id = member_repo::insert(conn, actor, &mut member)?;
    info!(%id, name = member.name(), "member joined");
    Ok(member)
}

pub fn rename(
    conn: &Connection,
    actor: Option<&str>,
    member_id: Id<Member>,
    name: &str,
) -> ShopResult<Member> {
    let mut member = find_member(conn, member_id)?;
    let valid_name = validation::non_blank(name, "name")?;
    ensure_name_free(conn, &valid_name, Some(member_id))?;

    member.set_name(valid_name);
    member_repo::update(conn, actor, &mut member)?;
    info!(id = %member_id, name = member.name(), "member renamed");
    Ok(member)
}

/// Delete a member. Members that still have orders cannot be removed.
pub fn remove(conn: &Connection, member_id: Id<Member>) -> ShopResult<()> {
    let member = find_member(conn, member_id)?;
    if !member.orders().is_empty() {
        return Err(ShopError::HasOrders {
            id: member_id.to_string(),
            count: member.orders().len(),
        });
    }

    member_repo::delete(conn, member_id)?;
    info!(id = %member_id, "member removed");
    Ok(())
}

pub fn find_member(conn: &Connection, member_id: Id<Member>) -> ShopResult<Member> {
    member_repo::find_by_id(conn, member_id)?.ok_or_else(|| ShopError::NotFound {
        entity_type: "Member".into(),
        id: member_id.to_string(),
    })
}

fn ensure_name_free(conn: &Connection, name: &str, except: Option<Id<Member>>) -> ShopResult<()> {
    let taken = member_repo::find_by_name(conn, name)?
        .iter()
        .any(|m| m.id() != except);
    if taken {
        return Err(ShopError::AlreadyExists {
            entity_type: "Member".into(),
            identifier: name.to_string(),
        });
    }
    Ok(())
}
