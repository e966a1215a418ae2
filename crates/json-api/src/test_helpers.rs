//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use ordering_app::{
    auth::{MockAuthService, UserId},
    context::AppContext,
    domain::{
        carts::MockCartsService,
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        orders::{
            MockOrdersService,
            records::{OrderItemRecord, OrderItemUuid, OrderRecord, OrderUuid},
            status::OrderStatus,
        },
        products::{
            MockProductsService,
            records::{ProductOptionRecord, ProductOptionUuid, ProductRecord, ProductUuid},
        },
        profiles::{MockProfilesService, records::ProfileRecord},
    },
};

use crate::{auth, state::State};

pub(crate) const TEST_ADMIN: &str = "auth0|admin";
pub(crate) const TEST_USER: &str = "auth0|user";

/// Service mocks backing a test app. Unexpected calls panic.
pub(crate) struct Mocks {
    pub(crate) categories: MockCategoriesService,
    pub(crate) products: MockProductsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) carts: MockCartsService,
    pub(crate) profiles: MockProfilesService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    /// Mocks where only [`TEST_ADMIN`] holds the admin role.
    pub(crate) fn new() -> Self {
        let mut auth = MockAuthService::new();

        auth.expect_is_admin()
            .returning(|user| user.as_str() == TEST_ADMIN);

        Self {
            categories: MockCategoriesService::new(),
            products: MockProductsService::new(),
            orders: MockOrdersService::new(),
            carts: MockCartsService::new(),
            profiles: MockProfilesService::new(),
            auth,
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            categories: Arc::new(self.categories),
            products: Arc::new(self.products),
            orders: Arc::new(self.orders),
            carts: Arc::new(self.carts),
            profiles: Arc::new(self.profiles),
            auth: Arc::new(self.auth),
            db: None,
        })
    }

    /// Serve `route` with callers identified by the `user` body field.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(auth::body::handler)
                .push(route),
        )
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks {
        auth,
        ..Mocks::new()
    }
    .into_state()
}

pub(crate) fn make_category(title: &str) -> CategoryRecord {
    CategoryRecord {
        uuid: CategoryUuid::new(),
        title: title.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(name: &str, price: u64) -> ProductRecord {
    let uuid = ProductUuid::new();

    ProductRecord {
        uuid,
        category_uuid: None,
        name: name.to_string(),
        price,
        description: None,
        options: vec![ProductOptionRecord {
            uuid: ProductOptionUuid::new(),
            product_uuid: uuid,
            name: "Large".to_string(),
            price: 150,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_item(order: OrderUuid, quantity: u32, price: u64) -> OrderItemRecord {
    OrderItemRecord {
        uuid: OrderItemUuid::new(),
        order_uuid: order,
        product_uuid: ProductUuid::new(),
        quantity,
        price,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(user: &str, status: OrderStatus) -> OrderRecord {
    let uuid = OrderUuid::new();
    let items = vec![make_item(uuid, 2, 450)];

    OrderRecord {
        uuid,
        user_id: UserId::new(user),
        status,
        order_type: String::new(),
        notes: String::new(),
        price: 900,
        items,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_profile(user: &str) -> ProfileRecord {
    ProfileRecord {
        user_id: UserId::new(user),
        abn: "60 579 663 101".to_string(),
        name: "Corner Cafe".to_string(),
        phone: Some("03 9000 0000".to_string()),
        fax: None,
        address: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
