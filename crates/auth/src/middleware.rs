use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use lnt_core::SESSION_COOKIE;
use std::future::Ready;
use std::future::ready;

/// Extractor for admin-only requests.
/// Validates the session cookie against the [`Issuer`] in app data.
pub struct Admin(pub Claims);

impl Admin {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl FromRequest for Admin {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let issuer = match req.app_data::<web::Data<Issuer>>() {
            Some(issuer) => issuer,
            None => {
                return ready(Err(actix_web::error::ErrorInternalServerError(
                    "session issuer not configured",
                )));
            }
        };
        let cookie = req.cookie(SESSION_COOKIE);
        ready(
            issuer
                .verify(cookie.as_ref().map(|c| c.value()))
                .filter(|c| c.is_admin())
                .map(Admin)
                .ok_or_else(|| actix_web::error::ErrorUnauthorized("not authenticated")),
        )
    }
}

/// Optional authentication extractor - does not fail if unauthenticated.
pub struct MaybeAdmin(pub Option<Claims>);

impl MaybeAdmin {
    pub fn claims(&self) -> Option<&Claims> {
        self.0.as_ref()
    }
}

impl FromRequest for MaybeAdmin {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match Admin::from_request(req, payload).into_inner() {
            Ok(Admin(claims)) => ready(Ok(MaybeAdmin(Some(claims)))),
            Err(_) => ready(Ok(MaybeAdmin(None))),
        }
    }
}
