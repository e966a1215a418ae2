//! Security response headers and CORS.

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{self, HeaderName, HeaderValue},
    },
    prelude::*,
};

const CONTENT_SECURITY_POLICY: &str = "base-uri 'self'; block-all-mixed-content; \
    connect-src 'self'; default-src 'self'; font-src 'self'; frame-ancestors 'self'; \
    img-src 'self' blob: data: https://res.cloudinary.com; object-src 'none'; \
    script-src 'self'; script-src-attr 'none'; style-src 'self' 'unsafe-inline'; \
    upgrade-insecure-requests; worker-src 'self' blob:";

const HEADERS: [(HeaderName, &str); 5] = [
    (header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::REFERRER_POLICY, "no-referrer"),
    (header::STRICT_TRANSPORT_SECURITY, "max-age=15552000; includeSubDomains"),
];

/// Adds the fixed security headers to every response.
#[handler]
pub(crate) async fn security_headers(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    ctrl.call_next(req, depot, res).await;

    for (name, value) in HEADERS {
        res.headers_mut()
            .insert(name, HeaderValue::from_static(value));
    }
}

/// CORS for the API. Any origin is allowed when `origin` is unset.
pub(crate) fn cors(origin: Option<&str>) -> CorsHandler {
    let allow_origin = match origin {
        Some(origin) => AllowOrigin::from(origin),
        None => AllowOrigin::any(),
    };

    Cors::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
        ]))
        .into_handler()
}
