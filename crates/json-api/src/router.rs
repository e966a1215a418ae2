//! App Router

use salvo::Router;

use crate::{carts, categories, orders, products, profiles, security};

/// Routes served under `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .hoop(security::security_headers)
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .post(carts::create::handler)
                .patch(carts::checkout::handler)
                .push(
                    Router::with_path("{id}")
                        .get(carts::items::get::handler)
                        .post(carts::items::create::handler)
                        .patch(carts::items::update::handler)
                        .delete(carts::items::delete::handler),
                ),
        )
        .push(
            Router::with_path("category")
                .get(categories::index::handler)
                .post(categories::create::handler)
                .push(Router::with_path("{id}").delete(categories::delete::handler)),
        )
        .push(
            Router::with_path("order")
                .get(orders::index::handler)
                .push(
                    Router::with_path("{id}")
                        .get(orders::get::handler)
                        .patch(orders::update::handler),
                ),
        )
        .push(
            Router::with_path("product")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .patch(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("profile")
                .get(profiles::get::handler)
                .post(profiles::create::handler)
                .patch(profiles::update::handler),
        )
}
