//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    auth::UserId,
    domain::{
        orders::{
            records::{OrderRecord, OrderUuid},
            status::OrderStatus,
        },
        prices,
    },
};

const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const LIST_USER_ORDERS_SQL: &str = include_str!("../sql/list_user_orders.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const FIND_CART_SQL: &str = include_str!("../sql/find_cart.sql");
const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const ENSURE_CART_SQL: &str = include_str!("../sql/ensure_cart.sql");
const CHECKOUT_CART_SQL: &str = include_str!("../sql/checkout_cart.sql");
const UPDATE_ORDER_SQL: &str = include_str!("../sql/update_order.sql");
const SET_ORDER_PRICE_SQL: &str = include_str!("../sql/set_order_price.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Every placed order, newest first. Carts are excluded.
    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_user_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_USER_ORDERS_SQL)
            .bind(user.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// The user's cart, locked until the transaction ends.
    ///
    /// Every cart mutation goes through this lock so item writes and the
    /// stored total are serialised per cart.
    pub(crate) async fn find_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(FIND_CART_SQL)
            .bind(user.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: OrderUuid,
        user: &UserId,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_CART_SQL)
            .bind(cart.into_uuid())
            .bind(user.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Create a cart for the user unless one already exists, then return the
    /// cart locked.
    ///
    /// A checkout committing between the insert and the lock leaves no cart to
    /// lock, so the insert is attempted a second time.
    pub(crate) async fn ensure_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: OrderUuid,
        user: &UserId,
    ) -> Result<OrderRecord, sqlx::Error> {
        for _ in 0..2 {
            query(ENSURE_CART_SQL)
                .bind(cart.into_uuid())
                .bind(user.as_str())
                .execute(&mut **tx)
                .await?;

            if let Some(found) = self.find_cart(tx, user).await? {
                return Ok(found);
            }
        }

        Err(sqlx::Error::RowNotFound)
    }

    pub(crate) async fn checkout_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: OrderUuid,
        order_type: &str,
        notes: Option<&str>,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CHECKOUT_CART_SQL)
            .bind(cart.into_uuid())
            .bind(order_type)
            .bind(notes)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
        notes: Option<&str>,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .bind(notes)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_order_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        price: u64,
    ) -> Result<(), sqlx::Error> {
        query(SET_ORDER_PRICE_SQL)
            .bind(order.into_uuid())
            .bind(prices::to_column(price, "price")?)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_id: UserId::new(row.try_get::<String, _>("user_id")?),
            status,
            order_type: row.try_get("type")?,
            notes: row.try_get("notes")?,
            price: prices::from_row(row, "price")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
