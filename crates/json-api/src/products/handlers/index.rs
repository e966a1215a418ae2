//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    products::{errors::into_api_error, get::ProductResponse},
    responses::{ApiError, ResponseKind},
    state::State,
};

/// Products Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    pub products: Vec<ProductResponse>,

    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

/// List Products Handler
///
/// Returns every product with its options.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_api_error)?;

    if products.is_empty() {
        return Err(ApiError::not_found("Products not found."));
    }

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(ProductResponse::from).collect(),
        kind: ResponseKind::Success,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_product};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.service(Router::with_path("product").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_products() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![make_product("Latte", 500), make_product("Tea", 350)]));

        let mut res = TestClient::get("http://example.com/product")
            .send(&make_service(mocks))
            .await;

        let body: ProductsResponse = res.take_json().await?;

        let names: Vec<_> = body
            .products
            .iter()
            .map(|product| (product.name.as_str(), product.price.as_str()))
            .collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(names, [("Latte", "5.00"), ("Tea", "3.50")]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_returns_404() -> TestResult {
        let mut mocks = Mocks::new();

        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/product")
            .send(&make_service(mocks))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body["message"], "Products not found.");

        Ok(())
    }
}
