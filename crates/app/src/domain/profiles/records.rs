//! Profile Records

use jiff::Timestamp;

use crate::auth::UserId;

/// Profile Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub user_id: UserId,

    /// Canonical `XX XXX XXX XXX` form.
    pub abn: String,
    pub name: String,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub address: Option<Address>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A complete postal address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub address: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
}
