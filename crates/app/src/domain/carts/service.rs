//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    auth::UserId,
    database::Db,
    domain::{
        carts::{
            data::{Checkout, NewCart, NewCartItem},
            errors::CartsServiceError,
        },
        orders::{
            records::{OrderItemRecord, OrderItemUuid, OrderRecord},
            repositories::{PgOrderItemsRepository, PgOrdersRepository},
            service::{attach_items, refresh_total},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    orders: PgOrdersRepository,
    items: PgOrderItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders: PgOrdersRepository::new(),
            items: PgOrderItemsRepository::new(),
        }
    }

    async fn cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<OrderRecord, CartsServiceError> {
        self.orders
            .find_cart(tx, user)
            .await?
            .ok_or(CartsServiceError::NotFound)
    }

    /// Fetch an item, checking that it sits in the user's cart.
    ///
    /// The cart row is locked before the item is read.
    async fn owned_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        item: OrderItemUuid,
    ) -> Result<OrderItemRecord, CartsServiceError> {
        let cart = self.orders.find_cart(tx, user).await?;

        let item = match self.items.get_item(tx, item).await {
            Ok(item) => item,
            Err(sqlx::Error::RowNotFound) => return Err(CartsServiceError::ItemNotFound),
            Err(error) => return Err(error.into()),
        };

        let cart = cart.ok_or(CartsServiceError::NotOwner)?;

        if item.order_uuid != cart.uuid {
            return Err(CartsServiceError::NotOwner);
        }

        Ok(item)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: &UserId) -> Result<OrderRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut cart = self.cart(&mut tx, user).await?;
        attach_items(&self.items, &mut tx, std::slice::from_mut(&mut cart)).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn create_cart(
        &self,
        user: &UserId,
        cart: NewCart,
    ) -> Result<OrderRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.orders.create_cart(&mut tx, cart.uuid, user).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn checkout(
        &self,
        user: &UserId,
        checkout: Checkout,
    ) -> Result<OrderRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.cart(&mut tx, user).await?;

        let mut order = self
            .orders
            .checkout_cart(
                &mut tx,
                cart.uuid,
                &checkout.order_type,
                checkout.notes.as_deref(),
            )
            .await?;

        attach_items(&self.items, &mut tx, std::slice::from_mut(&mut order)).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn get_item(
        &self,
        user: &UserId,
        item: OrderItemUuid,
    ) -> Result<OrderItemRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self.owned_item(&mut tx, user, item).await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn add_item(
        &self,
        user: &UserId,
        item: NewCartItem,
    ) -> Result<OrderItemRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.orders.ensure_cart(&mut tx, item.cart_uuid, user).await?;

        let created = match self
            .items
            .create_item(
                &mut tx,
                item.uuid,
                cart.uuid,
                item.product_uuid,
                item.quantity,
            )
            .await
        {
            Ok(created) => created,
            Err(sqlx::Error::RowNotFound) => return Err(CartsServiceError::ProductNotFound),
            Err(error) => return Err(error.into()),
        };

        refresh_total(&self.orders, &self.items, &mut tx, cart.uuid).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_item(
        &self,
        user: &UserId,
        item: OrderItemUuid,
        quantity: u32,
    ) -> Result<OrderItemRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self.owned_item(&mut tx, user, item).await?;
        let updated = self.items.update_quantity(&mut tx, item, quantity).await?;

        refresh_total(&self.orders, &self.items, &mut tx, existing.order_uuid).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_item(&self, user: &UserId, item: OrderItemUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self.owned_item(&mut tx, user, item).await?;

        self.items.delete_item(&mut tx, item).await?;

        refresh_total(&self.orders, &self.items, &mut tx, existing.order_uuid).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The user's cart with its items.
    async fn get_cart(&self, user: &UserId) -> Result<OrderRecord, CartsServiceError>;

    /// Create an empty cart. Fails with [`CartsServiceError::AlreadyExists`] when
    /// the user already has one.
    async fn create_cart(&self, user: &UserId, cart: NewCart)
    -> Result<OrderRecord, CartsServiceError>;

    /// Place the cart as an open order.
    async fn checkout(
        &self,
        user: &UserId,
        checkout: Checkout,
    ) -> Result<OrderRecord, CartsServiceError>;

    /// A single item from the user's cart.
    async fn get_item(
        &self,
        user: &UserId,
        item: OrderItemUuid,
    ) -> Result<OrderItemRecord, CartsServiceError>;

    /// Add a product to the user's cart, creating the cart when needed.
    async fn add_item(
        &self,
        user: &UserId,
        item: NewCartItem,
    ) -> Result<OrderItemRecord, CartsServiceError>;

    /// Change the quantity of an item in the user's cart.
    async fn update_item(
        &self,
        user: &UserId,
        item: OrderItemUuid,
        quantity: u32,
    ) -> Result<OrderItemRecord, CartsServiceError>;

    /// Remove an item from the user's cart.
    async fn remove_item(&self, user: &UserId, item: OrderItemUuid)
    -> Result<(), CartsServiceError>;
}
