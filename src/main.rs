//! # Timetable Bot Main Entry Point
//!
//! This is the main entry point for the class timetable bot. It initializes
//! logging, loads configuration and the timetable, starts the daily notifier,
//! and runs the Telegram bot alongside the health check server.

use anyhow::{Context, Result};
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod services;
mod subscribers;
mod timetable;
mod transport;
mod utils;

use crate::bot::handlers::{BotDeps, BotHandler};
use crate::config::Config;
use crate::services::health::HealthService;
use crate::services::notifier::NotifierService;
use crate::subscribers::SubscriberRegistry;
use crate::timetable::TimetableStore;
use crate::transport::{TelegramTransport, Transport};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timetable_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Timetable Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Timetable: {}, HTTP Port: {}",
        config.timetable_path, config.http_port
    );

    // Load the timetable; a missing or malformed file is fatal
    let store = Arc::new(
        TimetableStore::load(&config.timetable_path)
            .context("Failed to load timetable at startup")?,
    );
    info!(
        "Timetable loaded - {} rows across {} days",
        store.len(),
        store.days_in_file_order().len()
    );

    // Subscribers live in memory only and start empty on every boot
    let registry = SubscriberRegistry::new();

    // Initialize bot
    info!("Initializing Telegram bot...");
    let telegram_bot = Bot::new(&config.telegram_bot_token);
    let transport: Arc<dyn Transport> = Arc::new(TelegramTransport::new(telegram_bot.clone()));
    let handler = BotHandler::new(BotDeps {
        store: store.clone(),
        registry: registry.clone(),
        transport: transport.clone(),
        admin_chat_id: ChatId(config.admin_chat_id),
    });
    info!("Telegram bot initialized successfully");

    // Initialize and start the daily notifier
    info!("Initializing daily notifier...");
    let mut notifier = match NotifierService::new(transport, store.clone(), registry.clone()).await
    {
        Ok(service) => {
            info!("Daily notifier initialized successfully");
            service
        }
        Err(e) => {
            tracing::error!("Failed to create daily notifier: {}", e);
            return Err(anyhow::anyhow!("Failed to create daily notifier: {}", e));
        }
    };

    if let Err(e) = notifier.start().await {
        tracing::error!("Failed to start daily notifier: {}", e);
    } else {
        info!("Daily notifier started successfully");
    }

    // Initialize health service
    let health_service = HealthService::new(store, registry);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(telegram_bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    // Stop the notifier on shutdown
    if let Err(e) = notifier.stop().await {
        tracing::warn!("Error stopping daily notifier: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
