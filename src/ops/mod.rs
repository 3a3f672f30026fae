pub mod member_ops;
pub mod order_ops;
