//! Profile request bodies.

use serde::Deserialize;

use ordering_app::{
    domain::profiles::data::ProfileDetails,
    validation::{FieldErrors, optional_text, required_text, validate_abn, validate_address},
};

use crate::requests::loose_string;

/// Profile create and update body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileRequest {
    #[serde(default, deserialize_with = "loose_string")]
    pub abn: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "loose_string")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "loose_string")]
    pub fax: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub suburb: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default, deserialize_with = "loose_string")]
    pub post_code: Option<String>,
}

impl ProfileRequest {
    pub(crate) fn validate(self) -> Result<ProfileDetails, FieldErrors> {
        let mut errors = FieldErrors::new();

        let abn = validate_abn(&mut errors, self.abn.as_deref());
        let name = required_text(&mut errors, "name", self.name.as_deref(), "Name is required");
        let address = validate_address(
            &mut errors,
            self.address.as_deref(),
            self.suburb.as_deref(),
            self.state.as_deref(),
            self.post_code.as_deref(),
        );

        match (abn, name) {
            (Some(abn), Some(name)) if errors.is_empty() => Ok(ProfileDetails {
                abn,
                name,
                phone: optional_text(self.phone.as_deref()),
                fax: optional_text(self.fax.as_deref()),
                address,
            }),
            _ => Err(errors),
        }
    }
}
