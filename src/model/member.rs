use serde::{Deserialize, Serialize};

use super::address::Address;
use super::audit::Audit;
use super::ids::Id;
use super::order::Order;

/// A registered shop member.
///
/// `id` stays `None` until the member is first saved; the store assigns it.
/// `orders` is the inverse side of the order relationship: it is filled in
/// when a member is loaded and is never absent, only empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Member {
    id: Option<Id<Member>>,
    name: String,
    address: Option<Address>,
    #[serde(default)]
    orders: Vec<Order>,
    #[serde(default)]
    audit: Audit,
}

impl Member {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(name: String, address: Option<Address>) -> Self {
        Self {
            name,
            address,
            ..Self::default()
        }
    }

    /// Rebuild a member read back from storage.
    pub(crate) fn hydrate(
        id: Id<Member>,
        name: String,
        address: Option<Address>,
        audit: Audit,
        orders: Vec<Order>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            address,
            orders,
            audit,
        }
    }

    pub fn id(&self) -> Option<Id<Member>> {
        self.id
    }

    pub fn set_id(&mut self, id: Id<Member>) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn audit(&self) -> &Audit {
        &self.audit
    }

    pub(crate) fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
