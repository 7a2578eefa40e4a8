//! Core constants, configuration, and runtime bootstrap for lantern.
//!
//! This crate provides the shared parameters every other lantern crate
//! agrees on (cookie name, session lifetime, collection names) along with
//! the process-level [`Config`] loaded once at startup.
mod config;

pub use config::*;

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Name of the cookie carrying the signed admin session token.
pub const SESSION_COOKIE: &str = "admin-session";
/// Lifetime of an admin session, both token expiry and cookie Max-Age.
pub const SESSION_DURATION: std::time::Duration = std::time::Duration::from_secs(7 * 24 * 60 * 60);
/// Length in bytes of the signing key generated when none is configured.
pub const SIGNING_KEY_BYTES: usize = 32;

// ============================================================================
// DOCUMENT STORE COLLECTIONS
// ============================================================================
/// Collection holding navigation menu entries.
pub const MENU_ITEMS: &str = "menuItems";
/// Collection holding team directory members.
pub const TEAM_MEMBERS: &str = "teamMembers";
/// Page size requested when scanning a whole collection.
pub const STORE_PAGE_SIZE: usize = 300;

// ============================================================================
// DEFAULT ENDPOINTS
// ============================================================================
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";
pub const DEFAULT_FIRESTORE_DATABASE: &str = "(default)";
pub const DEFAULT_MAIL_URL: &str = "https://api.resend.com";
/// Upper bound on any single outbound HTTP call (seconds).
pub const DEFAULT_HTTP_TIMEOUT: u64 = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
