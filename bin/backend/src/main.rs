//! Lantern Backend Binary
//!
//! Serves the site API on BIND_ADDR (e.g. 0.0.0.0:8080).
//! `backend hash-password <PASSWORD>` prints an Argon2 hash for ADMIN_PASSWORD.

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "backend", about = "Lantern site backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Hash a password for use as ADMIN_PASSWORD
    HashPassword { password: String },
}

#[tokio::main]
async fn main() {
    match Cli::parse().command.unwrap_or(Command::Serve) {
        Command::HashPassword { password } => match lnt_auth::password::hash(&password) {
            Ok(hash) => println!("{}", hash),
            Err(e) => {
                eprintln!("failed to hash password: {}", e);
                std::process::exit(1);
            }
        },
        Command::Serve => {
            lnt_core::log();
            lnt_core::kys();
            if let Err(e) = lnt_server::run().await {
                log::error!("server stopped: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}
