use anyhow::{anyhow, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub admin_chat_id: i64,
    pub timetable_path: String,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let admin_chat_id = env::var("ADMIN_CHAT_ID")
            .map_err(|_| anyhow!("ADMIN_CHAT_ID must be set"))?
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid ADMIN_CHAT_ID"))?;

        let timetable_path = env::var("TIMETABLE_PATH")
            .unwrap_or_else(|_| "timetable.csv".to_string());
        let timetable_path = if timetable_path.trim().is_empty() {
            "timetable.csv".to_string()
        } else {
            timetable_path
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            admin_chat_id,
            timetable_path,
            http_port,
        })
    }
}
