use lnt_enquiry::Enquiry;
use lnt_enquiry::Relay;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn submit(relay: web::Data<Relay>, req: web::Json<Enquiry>) -> impl Responder {
    match relay.relay(req.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "message": "enquiry sent" })),
        Err(e) if e.is_client() => HttpResponse::BadRequest().body(e.to_string()),
        Err(e) => {
            log::error!("enquiry relay failed: {}", e);
            HttpResponse::InternalServerError().body("failed to send enquiry")
        }
    }
}
