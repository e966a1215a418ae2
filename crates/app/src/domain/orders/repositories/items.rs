//! Order Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    orders::records::{OrderItemRecord, OrderItemUuid, OrderUuid},
    prices,
    products::records::ProductUuid,
};

const LIST_ITEMS_SQL: &str = include_str!("../sql/list_items.sql");
const GET_ITEM_SQL: &str = include_str!("../sql/get_item.sql");
const CREATE_ITEM_SQL: &str = include_str!("../sql/create_item.sql");
const UPDATE_ITEM_QUANTITY_SQL: &str = include_str!("../sql/update_item_quantity.sql");
const DELETE_ITEM_SQL: &str = include_str!("../sql/delete_item.sql");

fn quantity_column(quantity: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
        index: "quantity".to_string(),
        source: Box::new(e),
    })
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Items of every given order, in the order they were added.
    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        let orders: Vec<Uuid> = orders.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, OrderItemRecord>(LIST_ITEMS_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: OrderItemUuid,
    ) -> Result<OrderItemRecord, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(GET_ITEM_SQL)
            .bind(item.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Add a product line, capturing the product's current price.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] when the product does not exist.
    pub(crate) async fn create_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: OrderItemUuid,
        order: OrderUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<OrderItemRecord, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(CREATE_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(order.into_uuid())
            .bind(product.into_uuid())
            .bind(quantity_column(quantity)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: OrderItemUuid,
        quantity: u32,
    ) -> Result<OrderItemRecord, sqlx::Error> {
        query_as::<Postgres, OrderItemRecord>(UPDATE_ITEM_QUANTITY_SQL)
            .bind(item.into_uuid())
            .bind(quantity_column(quantity)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: OrderItemUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ITEM_SQL)
            .bind(item.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: OrderItemUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            quantity,
            price: prices::from_row(row, "price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
