use serial_test::serial;
use shopchat::config::AppConfig;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("SHOP_SERVER__PORT");
        env::remove_var("SHOP_SERVER__HOST");
        env::remove_var("SHOP_BACKEND__CHAT_URL");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("BACKEND_CHAT_URL");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["shopchat"]).expect("Failed to load config");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.backend.chat_url, "http://localhost:8000/chat");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("SHOP_SERVER__PORT", "9090");
        env::set_var("SHOP_BACKEND__CHAT_URL", "http://assistant.local/chat");
    }

    let config = AppConfig::load_from_args(["shopchat"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.backend.chat_url, "http://assistant.local/chat");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env_vars();
    unsafe {
        env::set_var("SHOP_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["shopchat", "--port", "7070"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 7070);

    clear_env_vars();
}

#[test]
#[serial]
fn test_backend_url_flag() {
    clear_env_vars();

    let config = AppConfig::load_from_args([
        "shopchat",
        "--backend-url",
        "http://127.0.0.1:9000/chat",
    ])
    .expect("Failed to load config");
    assert_eq!(config.backend.chat_url, "http://127.0.0.1:9000/chat");
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let config_content = r"
server:
  port: 7071
backend:
  chat_url: http://file.local/chat
    ";

    let file_path = "test_config.yaml";
    fs::write(file_path, config_content).expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", file_path);
    }

    let config = AppConfig::load_from_args(["shopchat"]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7071);
    assert_eq!(config.backend.chat_url, "http://file.local/chat");

    fs::remove_file(file_path).unwrap();
    clear_env_vars();
}
