//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ordering_app::{
    domain::products::records::{ProductOptionRecord, ProductRecord, ProductUuid},
    validation::format_price,
};

use crate::{
    extensions::*,
    products::errors::into_api_error,
    responses::{ApiError, ResponseKind},
    state::State,
};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// The category the product is listed under
    pub category_uuid: Option<Uuid>,

    /// The product name
    pub name: String,

    /// The price with two decimal places
    pub price: String,

    /// The product description
    pub description: Option<String>,

    /// Purchasable options in display order
    pub options: Vec<ProductOptionResponse>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            uuid: product.uuid.into_uuid(),
            category_uuid: product.category_uuid.map(|uuid| uuid.into_uuid()),
            name: product.name,
            price: format_price(product.price),
            description: product.description,
            options: product
                .options
                .into_iter()
                .map(ProductOptionResponse::from)
                .collect(),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Product Option Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductOptionResponse {
    /// The unique identifier of the option
    pub uuid: Uuid,

    /// The option name
    pub name: String,

    /// The option price with two decimal places
    pub price: String,
}

impl From<ProductOptionRecord> for ProductOptionResponse {
    fn from(option: ProductOptionRecord) -> Self {
        Self {
            uuid: option.uuid.into_uuid(),
            name: option.name,
            price: format_price(option.price),
        }
    }
}

/// Single Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductEnvelope {
    pub product: ProductResponse,

    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

/// Get Product Handler
///
/// Returns a product with its options.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product: ProductUuid = id.parse_or_400()?;

    let product = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductEnvelope {
        product: product.into(),
        kind: ResponseKind::Success,
    }))
}
