//! Category Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::domain::categories::records::CategoryRecord;

use crate::{
    categories::errors::into_api_error,
    extensions::*,
    responses::{ApiError, ResponseKind},
    state::State,
};

/// Category Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub uuid: Uuid,

    /// The category title
    pub title: String,

    /// The date and time the category was created
    pub created_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        Self {
            uuid: category.uuid.into_uuid(),
            title: category.title,
            created_at: category.created_at.to_string(),
        }
    }
}

/// Categories Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    pub categories: Vec<CategoryResponse>,

    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

/// List Categories Handler
///
/// Returns every category ordered by title.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .map_err(into_api_error)?;

    if categories.is_empty() {
        return Err(ApiError::not_found("Categories not found."));
    }

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(CategoryResponse::from).collect(),
        kind: ResponseKind::Success,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use ordering_app::domain::categories::CategoriesServiceError;

    use crate::test_helpers::{Mocks, make_category};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("category").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_categories() -> TestResult {
        let mut mocks = Mocks::new();
        let drinks = make_category("Drinks");
        let expected = drinks.uuid.into_uuid();

        mocks
            .categories
            .expect_list_categories()
            .once()
            .return_once(move || Ok(vec![drinks]));

        let mut res = TestClient::get("http://example.com/category")
            .send(&make_service(mocks))
            .await;

        let body: CategoriesResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.kind, ResponseKind::Success);
        let categories: Vec<_> = body
            .categories
            .iter()
            .map(|category| (category.uuid, category.title.as_str()))
            .collect();

        assert_eq!(categories, [(expected, "Drinks")]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .categories
            .expect_list_categories()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/category")
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body["message"], "Categories not found.");
        assert_eq!(body["type"], "error");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_rejection_returns_500() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .categories
            .expect_list_categories()
            .once()
            .return_once(|| Err(CategoriesServiceError::InvalidData));

        let res = TestClient::get("http://example.com/category")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
