use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn login(issuer: web::Data<Issuer>, req: web::Json<LoginRequest>) -> impl Responder {
    match issuer.issue(&req.username, &req.password) {
        Ok(token) => HttpResponse::Ok().cookie(issuer.cookie(token)).json(LoginResponse {
            message: "login successful".to_string(),
            username: req.username.clone(),
        }),
        Err(AuthError::MissingCredentials) => {
            HttpResponse::BadRequest().body("username and password are required")
        }
        Err(AuthError::InvalidCredentials) => HttpResponse::Unauthorized().body("invalid credentials"),
        Err(e) => {
            log::error!("login failed: {}", e);
            HttpResponse::InternalServerError().body("login failed")
        }
    }
}

pub async fn logout(issuer: web::Data<Issuer>, auth: MaybeAdmin) -> impl Responder {
    if let Some(claims) = auth.claims() {
        log::info!("ending admin session {} for {}", claims.sid, claims.username);
    }
    HttpResponse::Ok().cookie(issuer.revoke()).json(LogoutResponse {
        message: "logged out".to_string(),
    })
}

pub async fn session(auth: MaybeAdmin) -> impl Responder {
    HttpResponse::Ok().json(SessionStatus::from(auth.claims()))
}
