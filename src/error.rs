use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("{entity_type} already persisted with id {id}")]
    AlreadyPersisted { entity_type: String, id: String },

    #[error("{entity_type} has not been persisted yet")]
    NotPersisted { entity_type: String },

    #[error("Member {id} still has {count} order(s)")]
    HasOrders { id: String, count: usize },

    #[error("Order {id} is already cancelled")]
    AlreadyCancelled { id: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type ShopResult<T> = Result<T, ShopError>;
