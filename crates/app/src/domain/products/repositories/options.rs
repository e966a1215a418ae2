//! Product Options Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    prices,
    products::{
        data::NewProductOption,
        records::{ProductOptionRecord, ProductOptionUuid, ProductUuid},
    },
};

const LIST_PRODUCT_OPTIONS_SQL: &str = include_str!("../sql/list_product_options.sql");
const CREATE_PRODUCT_OPTION_SQL: &str = include_str!("../sql/create_product_option.sql");
const DELETE_PRODUCT_OPTIONS_SQL: &str = include_str!("../sql/delete_product_options.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductOptionsRepository;

impl PgProductOptionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Options for every given product, grouped by product and in position order.
    pub(crate) async fn list_options(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<Vec<ProductOptionRecord>, sqlx::Error> {
        let products: Vec<Uuid> = products.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, ProductOptionRecord>(LIST_PRODUCT_OPTIONS_SQL)
            .bind(products)
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert options in the order given.
    pub(crate) async fn create_options(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        options: &[NewProductOption],
    ) -> Result<Vec<ProductOptionRecord>, sqlx::Error> {
        let mut created = Vec::with_capacity(options.len());

        for (position, option) in (0_i32..).zip(options) {
            let record = query_as::<Postgres, ProductOptionRecord>(CREATE_PRODUCT_OPTION_SQL)
                .bind(option.uuid.into_uuid())
                .bind(product.into_uuid())
                .bind(position)
                .bind(&option.name)
                .bind(prices::to_column(option.price, "price")?)
                .fetch_one(&mut **tx)
                .await?;

            created.push(record);
        }

        Ok(created)
    }

    pub(crate) async fn delete_options(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_OPTIONS_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductOptionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductOptionUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            name: row.try_get("name")?,
            price: prices::from_row(row, "price")?,
        })
    }
}
