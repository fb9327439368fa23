//! # Class Timetable Bot
//!
//! A Telegram bot that serves a fixed weekly class timetable to subscribed users.
//!
//! ## Features
//! - Day-name queries ("Monday") and full-week queries ("My timetable")
//! - `/start` subscription with an automatic daily reminder at 8:00 AM
//! - Admin-only `/broadcast` announcements fanned out to every subscriber
//! - Health check HTTP endpoints for deployment monitoring

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Background services: the daily notifier and the health endpoint
pub mod services;
/// In-memory registry of subscribed chats
pub mod subscribers;
/// The weekly timetable loaded from CSV
pub mod timetable;
/// Delivery transport port and the Telegram adapter
pub mod transport;
/// Utility functions for logging and text normalization
pub mod utils;
