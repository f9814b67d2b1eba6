// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting gallery-guestbook...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Open the store; every service gets a handle to this pool
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Start HTTP server; SIGINT/SIGTERM stop it gracefully
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let app_pool = pool.clone();

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(handlers::app_config(app_pool.clone()))
    })
    .bind(&server_addr)?
    .run()
    .await;

    // 6. Flush and close the store before exiting
    log::info!("Server stopped, closing database");
    pool.close().await;

    result
}
