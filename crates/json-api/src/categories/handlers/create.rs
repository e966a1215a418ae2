//! Create Category Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::Deserialize;

use ordering_app::{
    domain::categories::{data::NewCategory, records::CategoryUuid},
    validation::{FieldErrors, required_text},
};

use crate::{
    auth::require_admin,
    categories::errors::into_api_error,
    extensions::*,
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Create Category Request
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateCategoryRequest {
    #[serde(default)]
    pub title: Option<String>,
}

impl CreateCategoryRequest {
    fn validate(self) -> Result<NewCategory, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = required_text(
            &mut errors,
            "title",
            self.title.as_deref(),
            "Title is required",
        );

        match title {
            Some(title) if errors.is_empty() => Ok(NewCategory {
                uuid: CategoryUuid::new(),
                title,
            }),
            _ => Err(errors),
        }
    }
}

/// Create Category Handler
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    require_admin(state, &user).await?;

    let category = req
        .body_or_default::<CreateCategoryRequest>()
        .await?
        .validate()?;

    state
        .app
        .categories
        .create_category(category)
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Category created."))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use ordering_app::auth::MockAuthService;

    use crate::test_helpers::{Mocks, TEST_ADMIN, TEST_USER, make_category};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("category").post(handler))
    }

    #[tokio::test]
    async fn test_create_category_success() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .categories
            .expect_create_category()
            .once()
            .withf(|new| new.title == "Drinks")
            .return_once(|_| Ok(make_category("Drinks")));

        let mut res = TestClient::post("http://example.com/category")
            .json(&json!({ "user": TEST_ADMIN, "title": "  Drinks " }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({ "message": "Category created.", "type": "success" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_escapes_title() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .categories
            .expect_create_category()
            .once()
            .withf(|new| new.title == "Fish &amp; Chips")
            .return_once(|_| Ok(make_category("Fish &amp; Chips")));

        let res = TestClient::post("http://example.com/category")
            .json(&json!({ "user": TEST_ADMIN, "title": "Fish & Chips" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_without_title_returns_400() -> TestResult {
        let mocks = Mocks::new();

        let mut res = TestClient::post("http://example.com/category")
            .json(&json!({ "user": TEST_ADMIN, "title": " " }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["errors"][0]["param"], "title");
        assert_eq!(body["errors"][0]["msg"], "Title is required");
        assert_eq!(body["errors"][0]["location"], "body");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_as_user_returns_401() -> TestResult {
        let mocks = Mocks::new();

        let mut res = TestClient::post("http://example.com/category")
            .json(&json!({ "user": TEST_USER, "title": "Drinks" }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(
            body,
            json!({ "message": "Unauthorized action.", "type": "error" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_anonymous_returns_401_without_role_lookup() -> TestResult {
        let mut mocks = Mocks::new();
        let mut auth = MockAuthService::new();

        auth.expect_is_admin().never();
        mocks.auth = auth;

        let res = TestClient::post("http://example.com/category")
            .json(&json!({ "title": "" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
