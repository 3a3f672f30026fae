use rusqlite::Connection;
use tracing::info;

use crate::db::{member_repo, order_repo};
use crate::error::{ShopError, ShopResult};
use crate::model::{Id, Member, Order, OrderStatus};

pub fn place_order(conn: &Connection, actor: Option<&str>, member_id: Id<Member>) -> ShopResult<Order> {
    member_repo::find_by_id(conn, member_id)?.ok_or_else(|| ShopError::NotFound {
        entity_type: "Member".into(),
        id: member_id.to_string(),
    })?;

    let mut order = Order::create(member_id);
    let id = order_repo::insert(conn, actor, &mut order)?;
    info!(%id, %member_id, "order placed");
    Ok(order)
}

pub fn cancel_order(conn: &Connection, actor: Option<&str>, order_id: Id<Order>) -> ShopResult<Order> {
    let mut order = order_repo::find_by_id(conn, order_id)?.ok_or_else(|| ShopError::NotFound {
        entity_type: "Order".into(),
        id: order_id.to_string(),
    })?;

    if order.is_cancelled() {
        return Err(ShopError::AlreadyCancelled {
            id: order_id.to_string(),
        });
    }

    order.status = OrderStatus::Cancel;
    order_repo::update(conn, actor, &mut order)?;
    info!(id = %order_id, "order cancelled");
    Ok(order)
}
