//! Orders service.

use std::collections::HashMap;

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    auth::UserId,
    database::Db,
    domain::orders::{
        data::OrderUpdate,
        errors::OrdersServiceError,
        pricing::order_total,
        records::{OrderItemRecord, OrderRecord, OrderUuid},
        repositories::{PgOrderItemsRepository, PgOrdersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders: PgOrdersRepository,
    items: PgOrderItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders: PgOrdersRepository::new(),
            items: PgOrderItemsRepository::new(),
        }
    }
}

/// Load and attach the items of each order.
pub(crate) async fn attach_items(
    items: &PgOrderItemsRepository,
    tx: &mut Transaction<'_, Postgres>,
    orders: &mut [OrderRecord],
) -> Result<(), sqlx::Error> {
    let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

    let mut by_order: HashMap<OrderUuid, Vec<OrderItemRecord>> = HashMap::new();

    for item in items.list_items(tx, &uuids).await? {
        by_order.entry(item.order_uuid).or_default().push(item);
    }

    for order in orders {
        order.items = by_order.remove(&order.uuid).unwrap_or_default();
    }

    Ok(())
}

/// Recompute and store an order's total from its current items.
pub(crate) async fn refresh_total(
    orders: &PgOrdersRepository,
    items: &PgOrderItemsRepository,
    tx: &mut Transaction<'_, Postgres>,
    order: OrderUuid,
) -> Result<u64, sqlx::Error> {
    let total = order_total(&items.list_items(tx, &[order]).await?);

    orders.set_order_price(tx, order, total).await?;

    Ok(total)
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = self.orders.list_orders(&mut tx).await?;
        attach_items(&self.items, &mut tx, &mut orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_user_orders(
        &self,
        user: &UserId,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = self.orders.list_user_orders(&mut tx, user).await?;
        attach_items(&self.items, &mut tx, &mut orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.orders.get_order(&mut tx, order).await?;
        attach_items(&self.items, &mut tx, std::slice::from_mut(&mut order)).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn update_order(
        &self,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self
            .orders
            .update_order(&mut tx, order, update.status, update.notes.as_deref())
            .await?;

        attach_items(&self.items, &mut tx, std::slice::from_mut(&mut order)).await?;

        tx.commit().await?;

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Every placed order with items, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// The user's placed orders with items, newest first.
    async fn list_user_orders(&self, user: &UserId)
    -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// A single order (or cart) with its items.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Move an order to a new status, optionally replacing its notes.
    async fn update_order(
        &self,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError>;
}
