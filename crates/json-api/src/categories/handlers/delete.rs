//! Delete Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use ordering_app::domain::categories::records::CategoryUuid;

use crate::{
    auth::require_admin,
    categories::errors::into_api_error,
    extensions::*,
    responses::{ApiError, MessageResponse},
    state::State,
};

/// Delete Category Handler
///
/// Categories still referenced by products are kept and reported as in use.
#[endpoint(
    tags("categories"),
    summary = "Delete Category",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    require_admin(state, &user).await?;

    let category: CategoryUuid = id.parse_or_400()?;

    state
        .app
        .categories
        .delete_category(category)
        .await
        .map_err(into_api_error)?;

    Ok(MessageResponse::success("Category deleted."))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use ordering_app::domain::categories::CategoriesServiceError;

    use crate::test_helpers::{Mocks, TEST_ADMIN, TEST_USER};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("category/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_category_success() -> TestResult {
        let mut mocks = Mocks::new();
        let category = CategoryUuid::new();

        mocks
            .categories
            .expect_delete_category()
            .once()
            .withf(move |uuid| *uuid == category)
            .return_once(|_| Ok(()));

        let mut res = TestClient::delete(format!("http://example.com/category/{category}"))
            .json(&json!({ "user": TEST_ADMIN }))
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["message"], "Category deleted.");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_category_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .categories
            .expect_delete_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::NotFound));

        let mut res = TestClient::delete(format!(
            "http://example.com/category/{}",
            CategoryUuid::new()
        ))
        .json(&json!({ "user": TEST_ADMIN }))
        .send(&make_service(mocks))
        .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body["message"], "Category not found.");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_in_use_returns_409() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .categories
            .expect_delete_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::InUse));

        let mut res = TestClient::delete(format!(
            "http://example.com/category/{}",
            CategoryUuid::new()
        ))
        .json(&json!({ "user": TEST_ADMIN }))
        .send(&make_service(mocks))
        .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert_eq!(body["message"], "Category is in use.");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_as_user_returns_401_even_when_missing() -> TestResult {
        let mocks = Mocks::new();

        let res = TestClient::delete(format!(
            "http://example.com/category/{}",
            CategoryUuid::new()
        ))
        .json(&json!({ "user": TEST_USER }))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_malformed_id_returns_400() -> TestResult {
        let mocks = Mocks::new();

        let res = TestClient::delete("http://example.com/category/not-a-uuid")
            .json(&json!({ "user": TEST_ADMIN }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
