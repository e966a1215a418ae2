//! Get Profile Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use ordering_app::domain::profiles::records::ProfileRecord;

use crate::{
    extensions::*,
    profiles::errors::into_api_error,
    responses::{ApiError, ResponseKind},
    state::State,
};

/// Profile Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileResponse {
    /// The identity provider user who owns the profile
    pub user: String,

    /// Australian Business Number, `XX XXX XXX XXX`
    pub abn: String,

    /// Business name
    pub name: String,

    pub phone: Option<String>,

    pub fax: Option<String>,

    /// Street address
    pub address: Option<String>,

    pub suburb: Option<String>,

    pub state: Option<String>,

    pub post_code: Option<String>,

    /// The date and time the profile was created
    pub created_at: String,

    /// The date and time the profile was last updated
    pub updated_at: String,
}

impl From<ProfileRecord> for ProfileResponse {
    fn from(profile: ProfileRecord) -> Self {
        let (address, suburb, state, post_code) = match profile.address {
            Some(address) => (
                Some(address.address),
                Some(address.suburb),
                Some(address.state),
                Some(address.postcode),
            ),
            None => (None, None, None, None),
        };

        Self {
            user: profile.user_id.into_inner(),
            abn: profile.abn,
            name: profile.name,
            phone: profile.phone,
            fax: profile.fax,
            address,
            suburb,
            state,
            post_code,
            created_at: profile.created_at.to_string(),
            updated_at: profile.updated_at.to_string(),
        }
    }
}

/// Profile Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileEnvelope {
    pub profile: ProfileResponse,

    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

/// Get Profile Handler
///
/// Returns the business profile.
#[endpoint(tags("profile"), summary = "Get Profile")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProfileEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let profile = state
        .app
        .profiles
        .get_profile()
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProfileEnvelope {
        profile: profile.into(),
        kind: ResponseKind::Success,
    }))
}
