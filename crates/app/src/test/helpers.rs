//! Test Helpers

use crate::{
    auth::UserId,
    domain::{
        carts::{
            CartsService, CartsServiceError,
            data::{Checkout, NewCartItem},
        },
        categories::{
            CategoriesService, CategoriesServiceError,
            data::NewCategory,
            records::{CategoryRecord, CategoryUuid},
        },
        orders::records::{OrderItemRecord, OrderItemUuid, OrderRecord, OrderUuid},
        products::{
            ProductsService, ProductsServiceError,
            data::{NewProduct, ProductDetails},
            records::{ProductRecord, ProductUuid},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_category(
    ctx: &TestContext,
    title: &str,
) -> Result<CategoryRecord, CategoriesServiceError> {
    ctx.categories
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            title: title.to_string(),
        })
        .await
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    category: Option<CategoryUuid>,
    name: &str,
    price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            details: ProductDetails {
                category_uuid: category,
                name: name.to_string(),
                price,
                description: None,
                options: Vec::new(),
            },
        })
        .await
}

pub(crate) async fn add_item(
    ctx: &TestContext,
    user: &str,
    product: ProductUuid,
    quantity: u32,
) -> Result<OrderItemRecord, CartsServiceError> {
    ctx.carts
        .add_item(
            &UserId::new(user),
            NewCartItem {
                uuid: OrderItemUuid::new(),
                product_uuid: product,
                quantity,
                cart_uuid: OrderUuid::new(),
            },
        )
        .await
}

pub(crate) async fn checkout(
    ctx: &TestContext,
    user: &str,
) -> Result<OrderRecord, CartsServiceError> {
    ctx.carts
        .checkout(
            &UserId::new(user),
            Checkout {
                order_type: "pickup".to_string(),
                notes: None,
            },
        )
        .await
}
