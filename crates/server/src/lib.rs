//! Lantern Backend Server
//!
//! Serves the admin session gate, the team directory and the contact form
//! relay from a single actix-web server.
//!
//! ## Submodules
//!
//! - [`directory`] — Menu and member listings
//! - [`enquiry`] — Contact form relay

pub mod directory;
pub mod enquiry;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use lnt_auth::Issuer;
use lnt_core::Config;
use lnt_directory::Directory;
use lnt_directory::Firestore;
use lnt_directory::Memory;
use lnt_enquiry::HttpMailer;
use lnt_enquiry::Relay;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(
            web::scope("/auth")
                .route("/login", web::post().to(lnt_auth::login))
                .route("/logout", web::post().to(lnt_auth::logout))
                .route("/session", web::get().to(lnt_auth::session)),
        )
        .service(
            web::scope("/api")
                .route("/menus", web::get().to(directory::handlers::menus))
                .route("/menus/{id}", web::get().to(directory::handlers::menu))
                .route("/menus/{id}/children", web::get().to(directory::handlers::children))
                .route("/menus/{id}/members", web::get().to(directory::handlers::members))
                .route("/members", web::get().to(directory::handlers::everyone))
                .route("/enquiry", web::post().to(enquiry::handlers::submit)),
        );
}

fn directory(config: &Config) -> anyhow::Result<Directory> {
    match config.store {
        Some(ref store) => Firestore::new(store, config.timeout).map(Directory::new),
        None => {
            log::warn!("FIRESTORE_PROJECT not set, team directory will be empty");
            Ok(Directory::new(Memory::default()))
        }
    }
}

fn relay(config: &Config) -> anyhow::Result<Relay> {
    match config.mail {
        Some(ref mail) => HttpMailer::new(mail, config.timeout)
            .map(|mailer| Relay::new(mailer, mail.from.clone(), mail.to.clone())),
        None => {
            log::warn!("mail relay not configured, enquiries will fail");
            Ok(Relay::new(enquiry::Unconfigured, "", ""))
        }
    }
}

/// `*` is the same as no origin: any origin, no credentials.
fn cors(origin: Option<&str>) -> Cors {
    match origin.filter(|origin| *origin != "*") {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials(),
        None => Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header(),
    }
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env();
    let issuer = web::Data::new(Issuer::from(&config.admin));
    let directory = web::Data::new(directory(&config)?);
    let relay = web::Data::new(relay(&config)?);
    let origin = config.origin.clone();
    log::info!("starting lantern server on {}", config.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(cors(origin.as_deref()))
            .app_data(issuer.clone())
            .app_data(directory.clone())
            .app_data(relay.clone())
            .configure(routes)
    })
    .bind(&config.bind)?
    .run()
    .await?;
    Ok(())
}
