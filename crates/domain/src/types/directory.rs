//! Directory entities referenced by appointments
//!
//! Customers, contacts and staff members all share an id and a display name.
//! That shape lives in [`NamedEntity`] and is embedded by composition; the
//! entity-specific extras stay on the outer structs.

use serde::{Deserialize, Serialize};

use super::appointment::{ContactId, CustomerId, StaffId};

/// Id plus display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Directory identity
    pub id: i64,
    /// Display name
    pub name: String,
}

impl NamedEntity {
    /// Entity with `id` and display `name`
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    /// `"<id>: <name>"`, the label used in pick lists and reports
    pub fn label(&self) -> String {
        format!("{}: {}", self.id, self.name)
    }
}

/// A customer appointments are billed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Shared id and name
    #[serde(flatten)]
    pub entity: NamedEntity,
    /// Street address
    #[serde(default)]
    pub address: Option<String>,
    /// Postal code
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
}

impl Customer {
    /// Customer with no address or phone details
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self { entity: NamedEntity::new(id, name), address: None, postal_code: None, phone: None }
    }

    /// Directory identity
    pub fn id(&self) -> CustomerId {
        self.entity.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.entity.name
    }
}

/// A person met during an appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Shared id and name
    #[serde(flatten)]
    pub entity: NamedEntity,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

impl Contact {
    /// Contact without an email address
    pub fn new(id: ContactId, name: impl Into<String>) -> Self {
        Self { entity: NamedEntity::new(id, name), email: None }
    }

    /// Directory identity
    pub fn id(&self) -> ContactId {
        self.entity.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.entity.name
    }
}

/// A staff member appointments are booked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Shared id and name
    #[serde(flatten)]
    pub entity: NamedEntity,
}

impl StaffMember {
    /// Staff member with `id` and display `name`
    pub fn new(id: StaffId, name: impl Into<String>) -> Self {
        Self { entity: NamedEntity::new(id, name) }
    }

    /// Directory identity
    pub fn id(&self) -> StaffId {
        self.entity.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.entity.name
    }
}
