use rusqlite::{params, Connection, Row};
use tracing::debug;

use crate::db::{format_timestamp, parse_timestamp};
use crate::error::{ShopError, ShopResult};
use crate::model::{Audit, Id, Member, Order, OrderStatus};

const SELECT_ORDER: &str = "SELECT order_id, member_id, order_date, status,
        created_by, created_at, last_modified_by, last_modified_at
     FROM orders";

type OrderRow = (i64, i64, String, String, Option<String>, String, Option<String>, String);

/// Insert a new order and assign the generated id to it.
pub fn insert(conn: &Connection, actor: Option<&str>, order: &mut Order) -> ShopResult<Id<Order>> {
    if let Some(id) = order.id {
        return Err(ShopError::AlreadyPersisted {
            entity_type: "Order".into(),
            id: id.to_string(),
        });
    }

    order.audit = Audit::now(actor);
    conn.execute(
        "INSERT INTO orders (member_id, order_date, status, created_by, created_at, last_modified_by, last_modified_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            order.member_id.value,
            format_timestamp(order.order_date),
            order.status.to_db_str(),
            order.audit.created_by,
            format_timestamp(order.audit.created_at),
            order.audit.last_modified_by,
            format_timestamp(order.audit.last_modified_at),
        ],
    )?;

    let id = Id::new(conn.last_insert_rowid());
    order.id = Some(id);
    debug!(%id, member_id = %order.member_id, "order inserted");
    Ok(id)
}

pub fn update(conn: &Connection, actor: Option<&str>, order: &mut Order) -> ShopResult<()> {
    let id = order.id.ok_or_else(|| ShopError::NotPersisted {
        entity_type: "Order".into(),
    })?;

    order.audit.touch(actor);
    let changed = conn.execute(
        "UPDATE orders SET status = ?1, last_modified_by = ?2, last_modified_at = ?3 WHERE order_id = ?4",
        params![
            order.status.to_db_str(),
            order.audit.last_modified_by,
            format_timestamp(order.audit.last_modified_at),
            id.value,
        ],
    )?;

    if changed == 0 {
        return Err(ShopError::NotFound {
            entity_type: "Order".into(),
            id: id.to_string(),
        });
    }
    debug!(%id, status = order.status.to_db_str(), "order updated");
    Ok(())
}

pub fn delete(conn: &Connection, id: Id<Order>) -> ShopResult<()> {
    conn.execute("DELETE FROM orders WHERE order_id = ?1", params![id.value])?;
    Ok(())
}

pub fn find_by_id(conn: &Connection, id: Id<Order>) -> ShopResult<Option<Order>> {
    let mut stmt = conn.prepare(&format!("{} WHERE order_id = ?1", SELECT_ORDER))?;

    let result = stmt.query_row(params![id.value], read_row);

    match result {
        Ok(row) => Ok(Some(into_order(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All orders referencing a member, oldest first.
pub fn find_by_member(conn: &Connection, member_id: Id<Member>) -> ShopResult<Vec<Order>> {
    let mut stmt = conn.prepare(&format!("{} WHERE member_id = ?1 ORDER BY order_id", SELECT_ORDER))?;

    let rows = stmt
        .query_map(params![member_id.value], read_row)?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter().map(into_order).collect()
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<OrderRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
    ))
}

fn into_order(row: OrderRow) -> ShopResult<Order> {
    let (id, member_id, order_date, status, created_by, created_at, last_modified_by, last_modified_at) = row;
    let status = OrderStatus::from_db_str(&status)
        .ok_or_else(|| ShopError::Other(format!("Unknown order status: {}", status)))?;

    Ok(Order {
        id: Some(Id::new(id)),
        member_id: Id::new(member_id),
        order_date: parse_timestamp(&order_date)?,
        status,
        audit: Audit {
            created_by,
            created_at: parse_timestamp(&created_at)?,
            last_modified_by,
            last_modified_at: parse_timestamp(&last_modified_at)?,
        },
    })
}
