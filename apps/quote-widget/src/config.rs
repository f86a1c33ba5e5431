//! # Catalog Configuration
//!
//! Loads the catalog snapshot a [`crate::QuoteSession`] prices against.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     QUOTE_CURRENCY=EUR                                                 │
//! │     QUOTE_MIN_QTY=12  QUOTE_MAX_QTY=500  QUOTE_QTY_STEP=6              │
//! │     QUOTE_DESIGN_URL=/studio  QUOTE_EMAIL_TO=quotes@example.com        │
//! │                                                                         │
//! │  2. Catalog File (replaces the built-in catalog)                       │
//! │     explicit path, else $QUOTE_CONFIG_PATH, else                       │
//! │     ~/.config/quote-calc/catalog.toml (Linux)                          │
//! │     ~/Library/Application Support/com.bioblanks.quote-calc/... (macOS) │
//! │     `.json` files are read as JSON, everything else as TOML            │
//! │                                                                         │
//! │  3. Built-in Catalog (lowest priority)                                 │
//! │     crate::catalog::default_catalog()                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog File Format
//! Keys match the embed JSON the marketing site already ships:
//! ```toml
//! currency = "USD"
//! leadTimeRules = [{ minQty = 1, days = 5 }, { minQty = 25, days = 8 }]
//!
//! [[products]]
//! id = "baseball-cap"
//! name = "Baseball Cap"
//! priceBreaks = [{ minQty = 1, unit = 12.9 }, { minQty = 25, unit = 11.5 }]
//!
//! [options]
//! colors = [{ id = "black", label = "Black", add = 0 }]
//!
//! [limits]
//! minQty = 1
//! maxQty = 1000
//! ```

use std::path::{Path, PathBuf};

use quote_core::validation::validate_config;
use quote_core::QuoteConfig;
use tracing::{debug, info, warn};

use crate::catalog::default_catalog;
use crate::error::ConfigError;

/// Points at a catalog file when no explicit path is given.
pub const ENV_CONFIG_PATH: &str = "QUOTE_CONFIG_PATH";

pub const ENV_CURRENCY: &str = "QUOTE_CURRENCY";
pub const ENV_MIN_QTY: &str = "QUOTE_MIN_QTY";
pub const ENV_MAX_QTY: &str = "QUOTE_MAX_QTY";
pub const ENV_QTY_STEP: &str = "QUOTE_QTY_STEP";
pub const ENV_DESIGN_URL: &str = "QUOTE_DESIGN_URL";
pub const ENV_EMAIL_TO: &str = "QUOTE_EMAIL_TO";

/// Loads the catalog using the process environment.
///
/// ## Load Order (later overrides earlier)
/// 1. Built-in catalog
/// 2. Catalog file
/// 3. Environment variables
///
/// The merged result is validated before it is returned.
pub fn load(config_path: Option<PathBuf>) -> Result<QuoteConfig, ConfigError> {
    load_with_env(config_path, |key| std::env::var(key).ok())
}

/// Loads the catalog with a caller-supplied environment lookup.
///
/// ## Example
/// ```rust
/// use quote_widget::config::load_with_env;
///
/// let config = load_with_env(None, |key| match key {
///     "QUOTE_CURRENCY" => Some("EUR".to_string()),
///     _ => None,
/// })
/// .unwrap();
/// assert_eq!(config.currency, "EUR");
/// ```
pub fn load_with_env<F>(config_path: Option<PathBuf>, env: F) -> Result<QuoteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit = config_path.or_else(|| env(ENV_CONFIG_PATH).map(PathBuf::from));

    let mut config = match explicit {
        // A path someone asked for must exist
        Some(path) => {
            info!(?path, "Loading catalog from file");
            read_catalog(&path)?
        }
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                info!(?path, "Loading catalog from config directory");
                read_catalog(&path)?
            }
            None => {
                debug!("No catalog file found, using built-in catalog");
                default_catalog()
            }
        },
    };

    apply_env_overrides(&mut config, &env)?;

    validate_config(&config)?;

    info!(
        products = config.products.len(),
        currency = %config.currency,
        "Catalog loaded"
    );
    Ok(config)
}

/// Loads the catalog or falls back to the built-in one if loading fails.
pub fn load_or_default(config_path: Option<PathBuf>) -> QuoteConfig {
    load(config_path).unwrap_or_else(|e| {
        warn!("Failed to load catalog: {}. Using built-in catalog.", e);
        default_catalog()
    })
}

/// Reads and parses one catalog file.
pub fn read_catalog(path: &Path) -> Result<QuoteConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_catalog(path, &contents)
}

/// Parses catalog text, choosing the format from the file extension.
pub fn parse_catalog(path: &Path, contents: &str) -> Result<QuoteConfig, ConfigError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(contents)?)
    } else {
        Ok(toml::from_str(contents)?)
    }
}

/// Applies `QUOTE_*` overrides on top of a loaded catalog.
///
/// Unparseable numbers are logged and ignored. Values that parse but can
/// never be valid are rejected.
pub fn apply_env_overrides<F>(config: &mut QuoteConfig, env: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(currency) = env(ENV_CURRENCY) {
        debug!(currency = %currency, "Overriding currency from environment");
        config.currency = currency.trim().to_string();
    }

    if let Some(min_qty) = parse_u32(env, ENV_MIN_QTY) {
        debug!(min_qty, "Overriding minimum quantity from environment");
        config.limits.min_qty = min_qty;
    }

    if let Some(max_qty) = parse_u32(env, ENV_MAX_QTY) {
        debug!(max_qty, "Overriding maximum quantity from environment");
        config.limits.max_qty = max_qty;
    }

    if let Some(step) = parse_u32(env, ENV_QTY_STEP) {
        if step == 0 {
            return Err(ConfigError::InvalidValue {
                key: ENV_QTY_STEP.to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        config.limits.qty_step = Some(step);
    }

    // An empty value clears the design button target
    if let Some(url) = env(ENV_DESIGN_URL) {
        let url = url.trim();
        debug!(url, "Overriding design URL from environment");
        config.cta.start_design_url = (!url.is_empty()).then(|| url.to_string());
    }

    if let Some(email) = env(ENV_EMAIL_TO) {
        let email = email.trim();
        if !email.contains('@') {
            return Err(ConfigError::InvalidValue {
                key: ENV_EMAIL_TO.to_string(),
                reason: format!("'{}' is not an email address", email),
            });
        }
        config.cta.email_to = Some(email.to_string());
    }

    Ok(())
}

fn parse_u32<F>(env: &F, key: &str) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = env(key)?;
    match raw.trim().parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring non-numeric environment override");
            None
        }
    }
}

/// Returns the platform catalog path, preferring `catalog.toml` over
/// `catalog.json`.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "bioblanks", "quote-calc").map(|dirs| {
        let config_dir = dirs.config_dir();
        let toml_path = config_dir.join("catalog.toml");
        if toml_path.exists() {
            toml_path
        } else {
            config_dir.join("catalog.json")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::Money;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const CAP_TOML: &str = r#"
currency = "GBP"
leadTimeRules = [{ minQty = 1, days = 4 }]

[[products]]
id = "baseball-cap"
name = "Baseball Cap"
priceBreaks = [{ minQty = 1, unit = 12.9 }, { minQty = 25, unit = 11.5 }]

[options]
colors = [{ id = "black", label = "Black", add = 0 }]

[limits]
minQty = 5
maxQty = 200
"#;

    #[test]
    fn test_load_toml_file() {
        let file = write_temp(".toml", CAP_TOML);
        let config = load_with_env(Some(file.path().to_path_buf()), env_from(&[])).unwrap();

        assert_eq!(config.currency, "GBP");
        assert_eq!(config.products.len(), 1);
        assert_eq!(
            config.products[0].price_tiers[1].unit_price,
            Money::from_cents(1150)
        );
        assert_eq!(config.limits.min_qty, 5);
        assert_eq!(config.limits.qty_step, None);
    }

    #[test]
    fn test_load_json_file() {
        let file = write_temp(
            ".json",
            r#"{
                "currency": "BRL",
                "products": [{ "id": "tee", "name": "Tee", "priceBreaks": [{ "minQty": 1, "unit": 16.9 }] }],
                "limits": { "minQty": 1, "maxQty": 500, "qtyStep": 5 }
            }"#,
        );
        let config = load_with_env(Some(file.path().to_path_buf()), env_from(&[])).unwrap();

        assert_eq!(config.currency, "BRL");
        assert_eq!(config.limits.step(), 5);
    }

    #[test]
    fn test_config_path_from_env() {
        let file = write_temp(".toml", CAP_TOML);
        let path = file.path().to_string_lossy().to_string();
        let config = load_with_env(None, env_from(&[(ENV_CONFIG_PATH, path.as_str())])).unwrap();

        assert_eq!(config.currency, "GBP");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = load_with_env(Some(missing), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_files() {
        let bad_json = write_temp(".json", "{ not json");
        assert!(matches!(
            load_with_env(Some(bad_json.path().to_path_buf()), env_from(&[])),
            Err(ConfigError::Json(_))
        ));

        let bad_toml = write_temp(".toml", "currency = ");
        assert!(matches!(
            load_with_env(Some(bad_toml.path().to_path_buf()), env_from(&[])),
            Err(ConfigError::Toml(_))
        ));

        let negative_threshold = write_temp(
            ".json",
            r#"{ "products": [{ "id": "x", "name": "X", "priceBreaks": [{ "minQty": -1, "unit": 1 }] }] }"#,
        );
        assert!(load_with_env(Some(negative_threshold.path().to_path_buf()), env_from(&[])).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = default_catalog();
        let env = env_from(&[
            (ENV_CURRENCY, "EUR"),
            (ENV_MIN_QTY, "12"),
            (ENV_MAX_QTY, "600"),
            (ENV_QTY_STEP, "6"),
            (ENV_DESIGN_URL, "https://example.com/design"),
            (ENV_EMAIL_TO, "sales@example.com"),
        ]);

        apply_env_overrides(&mut config, &env).unwrap();

        assert_eq!(config.currency, "EUR");
        assert_eq!(config.limits.min_qty, 12);
        assert_eq!(config.limits.max_qty, 600);
        assert_eq!(config.limits.qty_step, Some(6));
        assert_eq!(
            config.cta.start_design_url.as_deref(),
            Some("https://example.com/design")
        );
        assert_eq!(config.cta.email_to.as_deref(), Some("sales@example.com"));
    }

    #[test]
    fn test_env_override_ignores_garbage_numbers() {
        let mut config = default_catalog();
        apply_env_overrides(&mut config, &env_from(&[(ENV_MIN_QTY, "lots")])).unwrap();
        assert_eq!(config.limits.min_qty, 1);
    }

    #[test]
    fn test_env_override_rejects_invalid_values() {
        let mut config = default_catalog();
        assert!(matches!(
            apply_env_overrides(&mut config, &env_from(&[(ENV_QTY_STEP, "0")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            apply_env_overrides(&mut config, &env_from(&[(ENV_EMAIL_TO, "nobody")])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_empty_design_url_clears_button() {
        let mut config = default_catalog();
        apply_env_overrides(&mut config, &env_from(&[(ENV_DESIGN_URL, "")])).unwrap();
        assert_eq!(config.cta.start_design_url, None);
    }

    #[test]
    fn test_overrides_are_validated() {
        let file = write_temp(".toml", CAP_TOML);
        let err = load_with_env(
            Some(file.path().to_path_buf()),
            env_from(&[(ENV_MIN_QTY, "500")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = load_with_env(
            Some(file.path().to_path_buf()),
            env_from(&[(ENV_CURRENCY, "euro")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
