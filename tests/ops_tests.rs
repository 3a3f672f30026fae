use jpashop::db::*;
use jpashop::error::ShopError;
use jpashop::model::*;
use jpashop::ops::*;
use jpashop::queries::*;

fn setup() -> rusqlite::Connection {
    schema::test_connection()
}

// ==========================================================================
// MEMBER OPS TESTS
// ==========================================================================

#[test]
fn join_persists_member() {
    let conn = setup();
    let member = member_ops::join(&conn, Some("admin"), "Kim", None).unwrap();

    let id = member.id().unwrap();
    let found = member_repo::find_by_id(&conn, id).unwrap().unwrap();
    assert_eq!(found.name(), "Kim");
}

#[test]
fn join_trims_name_and_address() {
    let conn = setup();
    let member = member_ops::join(
        &conn,
        None,
        "  Kim  ",
        Some(Address::new(" Seoul ", " Teheran-ro 1", "06236 ")),
    )
    .unwrap();
    assert_eq!(member.name(), "Kim");
    assert_eq!(member.address(), Some(&Address::new("Seoul", "Teheran-ro 1", "06236")));
}

#[test]
fn join_treats_blank_address_as_none() {
    let conn = setup();
    let member = member_ops::join(&conn, None, "Kim", Some(Address::new("", " ", ""))).unwrap();
    assert!(member.address().is_none());
}

#[test]
fn join_rejects_blank_name() {
    let conn = setup();
    let result = member_ops::join(&conn, None, "   ", None);
    assert!(matches!(result, Err(ShopError::BlankField { .. })));
}

#[test]
fn join_rejects_duplicate_name() {
    let conn = setup();
    member_ops::join(&conn, None, "Kim", None).unwrap();

    let result = member_ops::join(&conn, None, " Kim ", None);
    assert!(matches!(result, Err(ShopError::AlreadyExists { .. })));
    assert_eq!(member_queries::all_members(&conn).unwrap().len(), 1);
}

#[test]
fn rename_updates_name() {
    let conn = setup();
    let member = member_ops::join(&conn, None, "Kim", None).unwrap();
    let id = member.id().unwrap();

    let renamed = member_ops::rename(&conn, Some("clerk"), id, "Kim Minsu").unwrap();
    assert_eq!(renamed.name(), "Kim Minsu");
    assert_eq!(renamed.audit().last_modified_by.as_deref(), Some("clerk"));

    let found = member_ops::find_member(&conn, id).unwrap();
    assert_eq!(found.name(), "Kim Minsu");
}

#[test]
fn rename_to_own_name_is_allowed() {
    let conn = setup();
    let member = member_ops::join(&conn, None, "Kim", None).unwrap();
    assert!(member_ops::rename(&conn, None, member.id().unwrap(), "Kim").is_ok());
}

#[test]
fn rename_to_taken_name_is_rejected() {
    let conn = setup();
    member_ops::join(&conn, None, "Kim", None).unwrap();
    let lee = member_ops::join(&conn, None, "Lee", None).unwrap();

    let result = member_ops::rename(&conn, None, lee.id().unwrap(), "Kim");
    assert!(matches!(result, Err(ShopError::AlreadyExists { .. })));
}

#[test]
fn rename_missing_member_is_not_found() {
    let conn = setup();
    let result = member_ops::rename(&conn, None, Id::new(77), "Ghost");
    assert!(matches!(result, Err(ShopError::NotFound { .. })));
}

#[test]
fn remove_member_without_orders() {
    let conn = setup();
    let member = member_ops::join(&conn, None, "Kim", None).unwrap();
    let id = member.id().unwrap();

    member_ops::remove(&conn, id).unwrap();
    assert!(member_repo::find_by_id(&conn, id).unwrap().is_none());
}

#[test]
fn remove_member_with_orders_is_rejected() {
    let conn = setup();
    let member = member_ops::join(&conn, None, "Kim", None).unwrap();
    let id = member.id().unwrap();
    order_ops::place_order(&conn, None, id).unwrap();

    let result = member_ops::remove(&conn, id);
    assert!(matches!(result, Err(ShopError::HasOrders { count: 1, .. })));
}

#[test]
fn remove_missing_member_is_not_found() {
    let conn = setup();
    let result = member_ops::remove(&conn, Id::new(5));
    assert!(matches!(result, Err(ShopError::NotFound { .. })));
}

// ==========================================================================
// ORDER OPS TESTS
// ==========================================================================

#[test]
fn place_order_shows_up_on_member() {
    let conn = setup();
    let member = member_ops::join(&conn, None, "Kim", None).unwrap();
    let id = member.id().unwrap();

    let order = order_ops::place_order(&conn, Some("admin"), id).unwrap();
    assert!(order.id.is_some());
    assert_eq!(order.status, OrderStatus::Order);

    // The in-memory member is not refreshed; reload to see the inverse side.
    assert!(member.orders().is_empty());
    let reloaded = member_ops::find_member(&conn, id).unwrap();
    assert_eq!(reloaded.orders().len(), 1);
    assert_eq!(reloaded.orders()[0].id, order.id);
}

#[test]
fn place_order_for_missing_member_is_not_found() {
    let conn = setup();
    let result = order_ops::place_order(&conn, None, Id::new(12));
    assert!(matches!(result, Err(ShopError::NotFound { .. })));
}

#[test]
fn cancel_order_sets_status() {
    let conn = setup();
    let member = member_ops::join(&conn, None, "Kim", None).unwrap();
    let order = order_ops::place_order(&conn, None, member.id().unwrap()).unwrap();

    let cancelled = order_ops::cancel_order(&conn, Some("clerk"), order.id.unwrap()).unwrap();
    assert!(cancelled.is_cancelled());
    assert_eq!(cancelled.audit.last_modified_by.as_deref(), Some("clerk"));
}

#[test]
fn cancel_order_twice_is_rejected() {
    let conn = setup();
    let member = member_ops::join(&conn, None, "Kim", None).unwrap();
    let order = order_ops::place_order(&conn, None, member.id().unwrap()).unwrap();
    let order_id = order.id.unwrap();

    order_ops::cancel_order(&conn, None, order_id).unwrap();
    let result = order_ops::cancel_order(&conn, None, order_id);
    assert!(matches!(result, Err(ShopError::AlreadyCancelled { .. })));
}

#[test]
fn cancel_missing_order_is_not_found() {
    let conn = setup();
    let result = order_ops::cancel_order(&conn, None, Id::new(3));
    assert!(matches!(result, Err(ShopError::NotFound { .. })));
}

// ==========================================================================
// QUERY TESTS
// ==========================================================================

#[test]
fn search_is_case_insensitive_substring() {
    let conn = setup();
    for name in ["Kim Minsu", "Lee Jiwon", "kimchi fan"] {
        member_ops::join(&conn, None, name, None).unwrap();
    }

    let results = member_queries::search(&conn, "KIM").unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn active_order_count_skips_cancelled() {
    let conn = setup();
    let member = member_ops::join(&conn, None, "Kim", None).unwrap();
    let id = member.id().unwrap();
    order_ops::place_order(&conn, None, id).unwrap();
    let second = order_ops::place_order(&conn, None, id).unwrap();
    order_ops::cancel_order(&conn, None, second.id.unwrap()).unwrap();

    let reloaded = member_ops::find_member(&conn, id).unwrap();
    assert_eq!(reloaded.orders().len(), 2);
    assert_eq!(member_queries::active_order_count(&reloaded), 1);
}
