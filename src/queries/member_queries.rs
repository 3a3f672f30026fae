use rusqlite::Connection;

use crate::db::member_repo;
use crate::error::ShopResult;
use crate::model::Member;

pub fn all_members(conn: &Connection) -> ShopResult<Vec<Member>> {
    member_repo::find_all(conn)
}

/// Case-insensitive substring search over member names.
pub fn search(conn: &Connection, query: &str) -> ShopResult<Vec<Member>> {
    let lower = query.trim().to_lowercase();
    Ok(all_members(conn)?
        .into_iter()
        .filter(|m| m.name().to_lowercase().contains(&lower))
        .collect())
}

/// Number of orders on the member that have not been cancelled.
pub fn active_order_count(member: &Member) -> usize {
    member.orders().iter().filter(|o| !o.is_cancelled()).count()
}
