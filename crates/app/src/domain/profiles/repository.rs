//! Profile Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, Row, Transaction,
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    query_as,
};

use crate::{
    auth::UserId,
    domain::profiles::{
        data::ProfileDetails,
        records::{Address, ProfileRecord},
    },
};

const GET_PROFILE_SQL: &str = include_str!("sql/get_profile.sql");
const CREATE_PROFILE_SQL: &str = include_str!("sql/create_profile.sql");
const UPDATE_PROFILE_SQL: &str = include_str!("sql/update_profile.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProfilesRepository;

/// Bind `$1` (the owner) through `$9` in column order.
fn bind_details<'q>(
    sql: &'q str,
    user: &'q UserId,
    details: &'q ProfileDetails,
) -> QueryAs<'q, Postgres, ProfileRecord, PgArguments> {
    let address = details.address.as_ref();

    query_as::<Postgres, ProfileRecord>(sql)
        .bind(user.as_str())
        .bind(&details.abn)
        .bind(&details.name)
        .bind(details.phone.as_deref())
        .bind(details.fax.as_deref())
        .bind(address.map(|address| address.address.as_str()))
        .bind(address.map(|address| address.suburb.as_str()))
        .bind(address.map(|address| address.state.as_str()))
        .bind(address.map(|address| address.postcode.as_str()))
}

impl PgProfilesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_profile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<ProfileRecord>, sqlx::Error> {
        query_as::<Postgres, ProfileRecord>(GET_PROFILE_SQL)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_profile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        details: &ProfileDetails,
    ) -> Result<ProfileRecord, sqlx::Error> {
        bind_details(CREATE_PROFILE_SQL, user, details)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_profile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        details: &ProfileDetails,
    ) -> Result<ProfileRecord, sqlx::Error> {
        bind_details(UPDATE_PROFILE_SQL, user, details)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProfileRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let address: Option<String> = row.try_get("address")?;
        let suburb: Option<String> = row.try_get("suburb")?;
        let state: Option<String> = row.try_get("state")?;
        let postcode: Option<String> = row.try_get("postcode")?;

        let address = match (address, suburb, state, postcode) {
            (Some(address), Some(suburb), Some(state), Some(postcode)) => Some(Address {
                address,
                suburb,
                state,
                postcode,
            }),
            _ => None,
        };

        Ok(Self {
            user_id: UserId::new(row.try_get::<String, _>("user_id")?),
            abn: row.try_get("abn")?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            fax: row.try_get("fax")?,
            address,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
