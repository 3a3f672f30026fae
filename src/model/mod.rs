pub mod ids;
pub mod audit;
pub mod address;
pub mod member;
pub mod order;

// Re-exports for convenience
pub use ids::Id;
pub use audit::Audit;
pub use address::Address;
pub use member::Member;
pub use order::{Order, OrderStatus};
