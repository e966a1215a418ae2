//! Profile Data

use crate::{auth::UserId, domain::profiles::records::Address};

/// New Profile Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub user_id: UserId,
    pub details: ProfileDetails,
}

/// Profile Details Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    pub abn: String,
    pub name: String,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub address: Option<Address>,
}
