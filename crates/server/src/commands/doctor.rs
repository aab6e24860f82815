//! Doctor command - validate configuration and show status

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::args::DoctorArgs;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    store: CheckResult,
    llm: CheckResult,
    publish: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            status: "warn".to_string(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        config: CheckResult::error("Not checked"),
        store: CheckResult::error("Not checked"),
        llm: CheckResult::error("Not checked"),
        publish: CheckResult::error("Not checked"),
        overall: "error".to_string(),
    };

    match AppConfig::load(config_path.as_deref()) {
        Ok(config) => {
            report.config = CheckResult::ok("Configuration loaded successfully");
            report.store = check_store(&config);
            report.llm = check_llm(&config);
            report.publish = check_publish(&config);
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {:#}", e));
        }
    }

    let checks = [&report.config, &report.store, &report.llm, &report.publish];

    let has_error = checks.iter().any(|c| c.is_error());
    let all_ok = checks.iter().all(|c| c.is_ok());

    report.overall = if has_error {
        "error".to_string()
    } else if all_ok {
        "ok".to_string()
    } else {
        "warn".to_string()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.overall == "error" {
        std::process::exit(1);
    }

    Ok(())
}

fn check_store(config: &AppConfig) -> CheckResult {
    match config.store.backend.as_str() {
        "memory" => CheckResult::warn("In-memory store: drafts are lost on restart"),
        "sqlite" => check_sqlite_path(&config.store.sqlite_path),
        other => CheckResult::error(format!("Unknown store backend: {}", other)),
    }
}

fn check_sqlite_path(path: &Path) -> CheckResult {
    if path.is_file() {
        return CheckResult::ok(format!("SQLite database: {}", path.display()));
    }

    if path.exists() {
        return CheckResult::error(format!("Not a file: {}", path.display()));
    }

    CheckResult::ok(format!(
        "SQLite database will be created at {}",
        path.display()
    ))
}

fn check_llm(config: &AppConfig) -> CheckResult {
    let provider = &config.llm.provider;
    let model = &config.llm.model;

    // Check if API key env var is set (without revealing the value)
    let api_key_env = match provider.as_str() {
        "gemini" => &config.llm.gemini.api_key_env,
        "openai" => &config.llm.openai.api_key_env,
        "stub" => return CheckResult::ok("Provider: stub (offline)"),
        other => return CheckResult::error(format!("Unknown provider: {}", other)),
    };

    if api_key_env.is_empty() {
        return CheckResult::error(format!("No API key env var configured for {}", provider));
    }

    if env_is_set(api_key_env) {
        CheckResult::ok(format!(
            "Provider: {}, Model: {}, API key: {} (set)",
            provider, model, api_key_env
        ))
    } else {
        CheckResult::warn(format!(
            "Provider: {}, Model: {}, API key: {} (not set)",
            provider, model, api_key_env
        ))
    }
}

fn check_publish(config: &AppConfig) -> CheckResult {
    match config.publish.provider.as_str() {
        "disabled" => CheckResult::warn("Publishing disabled: publish keeps drafts"),
        "stub" => CheckResult::ok("Provider: stub (offline)"),
        "x" => {
            let x = &config.publish.x;
            let vars = [
                &x.consumer_key_env,
                &x.consumer_secret_env,
                &x.access_token_env,
                &x.access_token_secret_env,
            ];

            if vars.iter().any(|v| v.is_empty()) {
                return CheckResult::error("X credential env var name is empty");
            }

            let missing: Vec<&str> = vars
                .iter()
                .filter(|v| !env_is_set(v))
                .map(|v| v.as_str())
                .collect();

            if missing.is_empty() {
                CheckResult::ok(format!("Provider: x, base_url: {}", x.base_url))
            } else {
                CheckResult::warn(format!(
                    "Provider: x, credentials not set: {}",
                    missing.join(", ")
                ))
            }
        }
        other => CheckResult::error(format!("Unknown publish provider: {}", other)),
    }
}

fn env_is_set(name: &str) -> bool {
    matches!(std::env::var(name), Ok(val) if !val.trim().is_empty())
}

fn print_report(report: &DoctorReport) {
    println!("tweet-composer Doctor Report");
    println!("============================");
    println!();

    print_check("Config", &report.config);
    print_check("Store", &report.store);
    print_check("LLM Provider", &report.llm);
    print_check("Publisher", &report.publish);

    println!();
    let symbol = match report.overall.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} Overall: {}", symbol, report.overall.to_uppercase());

    if report.overall == "ok" {
        println!();
        println!("Ready to run! Try: tweet-composer serve");
    }
}

fn print_check(name: &str, result: &CheckResult) {
    let symbol = match result.status.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} {}: {}", symbol, name, result.message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_providers_are_ok() {
        let mut config = AppConfig::default();
        config.llm.provider = "stub".to_string();
        config.publish.provider = "stub".to_string();

        assert!(check_llm(&config).is_ok());
        assert!(check_publish(&config).is_ok());
    }

    #[test]
    fn test_unknown_backend_is_error() {
        let mut config = AppConfig::default();
        config.store.backend = "postgres".to_string();

        assert!(check_store(&config).is_error());
    }

    #[test]
    fn test_x_without_credentials_warns() {
        let mut config = AppConfig::default();
        config.publish.provider = "x".to_string();
        config.publish.x.consumer_key_env = "TWEET_COMPOSER_TEST_UNSET_CK".to_string();

        let result = check_publish(&config);

        assert_eq!(result.status, "warn");
        assert!(result.message.contains("TWEET_COMPOSER_TEST_UNSET_CK"));
    }
}
