//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (see `main.rs`).
//!
//! ## Server Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8181`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IPs from `X-Forwarded-For` / `X-Real-IP` (default: `false`)
//! - `RATE_LIMIT_PER_SECOND` - Token refill rate per client IP (default: 10)
//! - `RATE_LIMIT_BURST` - Token bucket size per client IP (default: 50)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//!
//! ## Pricing Variables
//!
//! - `BASE_PRICE_PER_SQM` - National base rate in ILS (default: 20000)
//! - `TARGET_DISCOUNT_RATE` - Target price discount (default: 0.25)
//! - `TARGET_MAX_DIFFERENCE` - Cap on the gap to the market total (default: 600000)

use anyhow::Result;
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

use crate::application::services::PricingService;
use crate::domain::pricing::{PricingParams, TargetParams};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub static_dir: String,

    // ── Pricing parameters ──────────────────────────────────────────────────
    pub base_price_per_sqm: Decimal,
    pub target_discount_rate: Decimal,
    pub target_max_difference: Decimal,

    /// Variables that were set but could not be parsed, so their default was used.
    pub ignored_vars: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let pricing = PricingParams::default();
        let target = TargetParams::default();

        Self {
            listen_addr: "0.0.0.0:8181".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            rate_limit_per_second: 10,
            rate_limit_burst: 50,
            static_dir: "static".to_string(),
            base_price_per_sqm: pricing.base_price_per_sqm,
            target_discount_rate: target.discount_rate,
            target_max_difference: target.max_difference,
            ignored_vars: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults. Unparsable ones
    /// are recorded in `ignored_vars` and reported by [`Config::print_summary`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let mut ignored = Vec::new();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let rate_limit_per_second = parse_var("RATE_LIMIT_PER_SECOND", &mut ignored)
            .unwrap_or(defaults.rate_limit_per_second);
        let rate_limit_burst =
            parse_var("RATE_LIMIT_BURST", &mut ignored).unwrap_or(defaults.rate_limit_burst);
        let base_price_per_sqm = parse_var("BASE_PRICE_PER_SQM", &mut ignored)
            .unwrap_or(defaults.base_price_per_sqm);
        let target_discount_rate = parse_var("TARGET_DISCOUNT_RATE", &mut ignored)
            .unwrap_or(defaults.target_discount_rate);
        let target_max_difference = parse_var("TARGET_MAX_DIFFERENCE", &mut ignored)
            .unwrap_or(defaults.target_max_difference);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            rate_limit_per_second,
            rate_limit_burst,
            static_dir,
            base_price_per_sqm,
            target_discount_rate,
            target_max_difference,
            ignored_vars: ignored,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - a rate limit setting is zero
    /// - a pricing parameter is out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be greater than 0");
        }
        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        if self.base_price_per_sqm <= Decimal::ZERO
            || self.base_price_per_sqm > Decimal::from(10_000_000)
        {
            anyhow::bail!(
                "BASE_PRICE_PER_SQM must be between 0 (exclusive) and 10000000, got {}",
                self.base_price_per_sqm
            );
        }

        if self.target_discount_rate < Decimal::ZERO || self.target_discount_rate >= Decimal::ONE {
            anyhow::bail!(
                "TARGET_DISCOUNT_RATE must be in [0, 1), got {}",
                self.target_discount_rate
            );
        }

        if self.target_max_difference < Decimal::ZERO {
            anyhow::bail!(
                "TARGET_MAX_DIFFERENCE must not be negative, got {}",
                self.target_max_difference
            );
        }

        Ok(())
    }

    /// Builds the pricing service from the defaults and the configured overrides.
    pub fn pricing_service(&self) -> PricingService {
        let params = PricingParams {
            base_price_per_sqm: self.base_price_per_sqm,
            ..PricingParams::default()
        };
        let target = TargetParams {
            discount_rate: self.target_discount_rate,
            max_difference: self.target_max_difference,
            ..TargetParams::default()
        };

        PricingService::new(params, target)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Rate limit: {}/s, burst {}{}",
            self.rate_limit_per_second,
            self.rate_limit_burst,
            if self.behind_proxy { " (behind proxy)" } else { "" }
        );
        tracing::info!("  Base price per sqm: {}", self.base_price_per_sqm);
        tracing::info!(
            "  Target discount: {}, max difference: {}",
            self.target_discount_rate,
            self.target_max_difference
        );
        for name in &self.ignored_vars {
            tracing::warn!("  {} could not be parsed, using the default", name);
        }
    }
}

/// Reads and parses an environment variable, `None` when unset or invalid.
/// Invalid values are pushed onto `ignored`.
fn parse_var<T: FromStr>(name: &str, ignored: &mut Vec<String>) -> Option<T> {
    let value = env::var(name).ok()?;
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        ignored.push(name.to_string());
    }
    parsed
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
