use jpashop::model::*;

// ==========================================================================
// MEMBER TESTS
// ==========================================================================

#[test]
fn new_member_has_no_id_and_empty_orders() {
    let member = Member::new();
    assert_eq!(member.id(), None);
    assert_eq!(member.name(), "");
    assert!(member.orders().is_empty());
}

#[test]
fn member_id_round_trips_through_setter() {
    let mut member = Member::new();
    member.set_id(Id::new(42));
    assert_eq!(member.id(), Some(Id::new(42)));
}

#[test]
fn member_name_round_trips_through_setter() {
    let mut member = Member::new();
    member.set_name("Hong Gildong");
    assert_eq!(member.name(), "Hong Gildong");

    // No validation at the model level.
    member.set_name("");
    assert_eq!(member.name(), "");
}

#[test]
fn create_keeps_address_and_starts_unsaved() {
    let address = Address::new("Seoul", "Teheran-ro 1", "06236");
    let member = Member::create("Kim".into(), Some(address.clone()));
    assert_eq!(member.address(), Some(&address));
    assert!(member.orders().is_empty());
    assert!(!member.is_persisted());
}

// ==========================================================================
// ADDRESS TESTS
// ==========================================================================

#[test]
fn addresses_compare_by_value() {
    let a = Address::new("Seoul", "Teheran-ro 1", "06236");
    let b = Address::new("Seoul", "Teheran-ro 1", "06236");
    assert_eq!(a, b);
    assert_ne!(a, Address::new("Busan", "Teheran-ro 1", "06236"));
}

#[test]
fn address_from_all_null_columns_is_none() {
    assert_eq!(Address::from_columns(None, None, None), None);
}

#[test]
fn address_from_partial_columns_fills_blanks() {
    let addr = Address::from_columns(Some("Seoul".into()), None, None).unwrap();
    assert_eq!(addr.city, "Seoul");
    assert_eq!(addr.street, "");
    assert_eq!(addr.zipcode, "");
}

#[test]
fn address_display() {
    let addr = Address::new("Seoul", "Teheran-ro 1", "06236");
    assert_eq!(addr.to_string(), "Teheran-ro 1, Seoul (06236)");
}

// ==========================================================================
// ORDER TESTS
// ==========================================================================

#[test]
fn order_create_points_at_member() {
    let order = Order::create(Id::new(9));
    assert_eq!(order.member_id, Id::new(9));
    assert_eq!(order.status, OrderStatus::Order);
}

#[test]
fn order_status_display_names() {
    assert_eq!(OrderStatus::Order.display_name(), "Ordered");
    assert_eq!(OrderStatus::Cancel.display_name(), "Cancelled");
}

#[test]
fn member_serializes_orders_as_array() {
    let member = Member::create("Lee".into(), None);
    let json = serde_json::to_value(&member).unwrap();
    assert_eq!(json["orders"], serde_json::json!([]));
    assert!(json["id"].is_null());
}
