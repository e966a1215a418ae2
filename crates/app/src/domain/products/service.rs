//! Products service.

use std::collections::HashMap;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductOptionRecord, ProductRecord, ProductUuid},
        repositories::{PgProductOptionsRepository, PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    products: PgProductsRepository,
    options: PgProductOptionsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            options: PgProductOptionsRepository::new(),
        }
    }
}

fn attach_options(products: &mut [ProductRecord], options: Vec<ProductOptionRecord>) {
    let mut by_product: HashMap<ProductUuid, Vec<ProductOptionRecord>> = HashMap::new();

    for option in options {
        by_product.entry(option.product_uuid).or_default().push(option);
    }

    for product in products {
        product.options = by_product.remove(&product.uuid).unwrap_or_default();
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut products = self.products.list_products(&mut tx).await?;

        let uuids: Vec<ProductUuid> = products.iter().map(|product| product.uuid).collect();
        let options = self.options.list_options(&mut tx, &uuids).await?;

        tx.commit().await?;

        attach_options(&mut products, options);

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut product = self.products.get_product(&mut tx, product).await?;
        product.options = self.options.list_options(&mut tx, &[product.uuid]).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut created = self
            .products
            .create_product(&mut tx, product.uuid, &product.details)
            .await?;

        created.options = self
            .options
            .create_options(&mut tx, created.uuid, &product.details.options)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut updated = self
            .products
            .update_product(&mut tx, product, &update.details)
            .await?;

        self.options.delete_options(&mut tx, product).await?;

        updated.options = self
            .options
            .create_options(&mut tx, product, &update.details.options)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.options.delete_options(&mut tx, product).await?;

        let rows_affected = self
            .products
            .delete_product(&mut tx, product)
            .await
            .map_err(|error| match ProductsServiceError::from(error) {
                ProductsServiceError::InvalidReference => ProductsServiceError::InUse,
                other => other,
            })?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products with their options.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product with its options.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a product and its options together.
    async fn create_product(&self, product: NewProduct)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces a product's fields and its whole option list.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product with its options.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            categories::records::CategoryUuid,
            products::{
                data::{NewProductOption, ProductDetails},
                records::ProductOptionUuid,
            },
        },
        test::{
            TestContext,
            helpers::{add_item, create_category, create_product},
        },
    };

    use super::*;

    fn details(name: &str, price: u64, options: &[(&str, u64)]) -> ProductDetails {
        ProductDetails {
            category_uuid: None,
            name: name.to_string(),
            price,
            description: None,
            options: options
                .iter()
                .map(|(name, price)| NewProductOption {
                    uuid: ProductOptionUuid::new(),
                    name: (*name).to_string(),
                    price: *price,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn create_product_returns_fields_and_options() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let product = ctx
            .products
            .create_product(NewProduct {
                uuid,
                details: details("Latte", 450, &[("Oat milk", 80), ("Extra shot", 50)]),
            })
            .await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.name, "Latte");
        assert_eq!(product.price, 450);

        let options: Vec<_> = product
            .options
            .iter()
            .map(|option| (option.name.as_str(), option.price))
            .collect();

        assert_eq!(options, [("Oat milk", 80), ("Extra shot", 50)]);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_keeps_option_order() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products
            .create_product(NewProduct {
                uuid,
                details: details("Mocha", 500, &[("Large", 100), ("Almond", 80), ("Cream", 60)]),
            })
            .await?;

        let product = ctx.products.get_product(uuid).await?;

        let names: Vec<_> = product.options.iter().map(|o| o.name.as_str()).collect();

        assert_eq!(names, ["Large", "Almond", "Cream"]);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_with_unknown_category_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let mut details = details("Latte", 450, &[]);
        details.category_uuid = Some(CategoryUuid::new());

        let result = ctx
            .products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                details,
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_attaches_each_products_options() -> TestResult {
        let ctx = TestContext::new().await;
        let category = create_category(&ctx, "Drinks").await?;

        let mut latte = details("Latte", 450, &[("Oat milk", 80)]);
        latte.category_uuid = Some(category.uuid);

        ctx.products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                details: latte,
            })
            .await?;

        ctx.products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                details: details("Brownie", 400, &[]),
            })
            .await?;

        let products = ctx.products.list_products().await?;

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Brownie");
        assert!(products[0].options.is_empty());
        assert_eq!(products[1].name, "Latte");
        assert_eq!(products[1].category_uuid, Some(category.uuid));
        assert_eq!(products[1].options.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_replaces_options() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products
            .create_product(NewProduct {
                uuid,
                details: details("Latte", 450, &[("Oat milk", 80), ("Soy milk", 80)]),
            })
            .await?;

        let updated = ctx
            .products
            .update_product(
                uuid,
                ProductUpdate {
                    details: details("Flat White", 470, &[("Extra shot", 50)]),
                },
            )
            .await?;

        assert_eq!(updated.name, "Flat White");
        assert_eq!(updated.price, 470);

        let fetched = ctx.products.get_product(uuid).await?;
        let names: Vec<_> = fetched.options.iter().map(|o| o.name.as_str()).collect();

        assert_eq!(names, ["Extra shot"]);

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_product_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(
                ProductUuid::new(),
                ProductUpdate {
                    details: details("Latte", 450, &[]),
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_product_removes_product_and_options() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products
            .create_product(NewProduct {
                uuid,
                details: details("Latte", 450, &[("Oat milk", 80)]),
            })
            .await?;

        ctx.products.delete_product(uuid).await?;

        let result = ctx.products.get_product(uuid).await;

        assert!(matches!(result, Err(ProductsServiceError::NotFound)));

        let options: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_options")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(options, 0);

        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_product_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.delete_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_ordered_product_returns_in_use() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, None, "Latte", 450).await?;

        add_item(&ctx, "auth0|user", product.uuid, 1).await?;

        let result = ctx.products.delete_product(product.uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::InUse)),
            "expected InUse, got {result:?}"
        );

        Ok(())
    }
}
