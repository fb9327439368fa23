use std::env;
use std::sync::Mutex;
use timetable_bot::config::Config;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("ADMIN_CHAT_ID");
    env::remove_var("TIMETABLE_PATH");
    env::remove_var("HTTP_PORT");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("ADMIN_CHAT_ID", "123456789");
    env::set_var("TIMETABLE_PATH", "/data/week.csv");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.admin_chat_id, 123456789);
    assert_eq!(config.timetable_path, "/data/week.csv");
    assert_eq!(config.http_port, 8080);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");
    env::set_var("ADMIN_CHAT_ID", "42");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.admin_chat_id, 42);
    assert_eq!(config.timetable_path, "timetable.csv");
    assert_eq!(config.http_port, 3000);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("ADMIN_CHAT_ID", "42");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("TELEGRAM_BOT_TOKEN must be set"));

    clear_env();
}

#[test]
fn test_config_missing_admin_chat_id() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("ADMIN_CHAT_ID must be set"));

    clear_env();
}

#[test]
fn test_config_invalid_admin_chat_id() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("ADMIN_CHAT_ID", "not_a_number");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Invalid ADMIN_CHAT_ID"));

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("ADMIN_CHAT_ID", "42");
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid HTTP_PORT"));

    clear_env();
}

#[test]
fn test_config_empty_token_is_rejected() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    env::set_var("ADMIN_CHAT_ID", "42");

    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}
