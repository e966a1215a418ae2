//! Profiles service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::UserId,
    database::Db,
    domain::profiles::{
        data::{NewProfile, ProfileDetails},
        errors::ProfilesServiceError,
        records::ProfileRecord,
        repository::PgProfilesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProfilesService {
    db: Db,
    repository: PgProfilesRepository,
}

impl PgProfilesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProfilesRepository::new(),
        }
    }
}

#[async_trait]
impl ProfilesService for PgProfilesService {
    async fn get_profile(&self) -> Result<ProfileRecord, ProfilesServiceError> {
        let mut tx = self.db.begin().await?;

        let profile = self.repository.get_profile(&mut tx).await?;

        tx.commit().await?;

        profile.ok_or(ProfilesServiceError::NotFound)
    }

    async fn create_profile(
        &self,
        profile: NewProfile,
    ) -> Result<ProfileRecord, ProfilesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_profile(&mut tx, &profile.user_id, &profile.details)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_profile(
        &self,
        user: &UserId,
        details: ProfileDetails,
    ) -> Result<ProfileRecord, ProfilesServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_profile(&mut tx, user, &details)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait ProfilesService: Send + Sync {
    /// The business profile.
    async fn get_profile(&self) -> Result<ProfileRecord, ProfilesServiceError>;

    /// Create the business profile. Only one may exist.
    async fn create_profile(&self, profile: NewProfile)
    -> Result<ProfileRecord, ProfilesServiceError>;

    /// Replace the profile owned by `user`. Fails with
    /// [`ProfilesServiceError::NotFound`] when `user` does not own it.
    async fn update_profile(
        &self,
        user: &UserId,
        details: ProfileDetails,
    ) -> Result<ProfileRecord, ProfilesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::profiles::records::Address, test::TestContext};

    use super::*;

    fn details(name: &str, address: Option<Address>) -> ProfileDetails {
        ProfileDetails {
            abn: "60 579 663 101".to_string(),
            name: name.to_string(),
            phone: Some("03 9000 0000".to_string()),
            fax: None,
            address,
        }
    }

    fn address() -> Address {
        Address {
            address: "1 Main St".to_string(),
            suburb: "Richmond".to_string(),
            state: "VIC".to_string(),
            postcode: "3121".to_string(),
        }
    }

    #[tokio::test]
    async fn get_profile_without_profile_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.profiles.get_profile().await;

        assert!(
            matches!(result, Err(ProfilesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn created_profile_is_returned() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.profiles
            .create_profile(NewProfile {
                user_id: UserId::new("auth0|admin"),
                details: details("Corner Cafe", Some(address())),
            })
            .await?;

        let profile = ctx.profiles.get_profile().await?;

        assert_eq!(profile.user_id, UserId::new("auth0|admin"));
        assert_eq!(profile.abn, "60 579 663 101");
        assert_eq!(profile.name, "Corner Cafe");
        assert_eq!(profile.address, Some(address()));
        assert_eq!(profile.fax, None);

        Ok(())
    }

    #[tokio::test]
    async fn second_profile_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.profiles
            .create_profile(NewProfile {
                user_id: UserId::new("auth0|admin"),
                details: details("Corner Cafe", None),
            })
            .await?;

        let result = ctx
            .profiles
            .create_profile(NewProfile {
                user_id: UserId::new("auth0|other"),
                details: details("Another Cafe", None),
            })
            .await;

        assert!(
            matches!(result, Err(ProfilesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn owner_can_update_profile() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = UserId::new("auth0|admin");

        ctx.profiles
            .create_profile(NewProfile {
                user_id: owner.clone(),
                details: details("Corner Cafe", Some(address())),
            })
            .await?;

        let updated = ctx
            .profiles
            .update_profile(&owner, details("Corner Cafe & Bar", None))
            .await?;

        assert_eq!(updated.name, "Corner Cafe & Bar");
        assert_eq!(updated.address, None);

        Ok(())
    }

    #[tokio::test]
    async fn non_owner_update_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.profiles
            .create_profile(NewProfile {
                user_id: UserId::new("auth0|admin"),
                details: details("Corner Cafe", None),
            })
            .await?;

        let result = ctx
            .profiles
            .update_profile(&UserId::new("auth0|other"), details("Taken Over", None))
            .await;

        assert!(
            matches!(result, Err(ProfilesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert_eq!(ctx.profiles.get_profile().await?.name, "Corner Cafe");

        Ok(())
    }
}
