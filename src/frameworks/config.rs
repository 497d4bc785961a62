use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::use_cases::checkout::CheckoutBranding;

// Deployment configuration. Defaults target the local development
// backend; a TOML file named by WIDGET_CONFIG overrides defaults, and
// environment variables override both.

pub const DEFAULT_BOOKING_API_URL: &str = "http://localhost:8081/api/bookings";
pub const DEFAULT_PAYMENT_API_URL: &str = "http://localhost:8081/api/payment";
pub const DEFAULT_CURRENCY: &str = "INR";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_MERCHANT_NAME: &str = "Resort Booking";
pub const DEFAULT_PAYMENT_DESCRIPTION: &str = "Room Reservation Payment";
pub const DEFAULT_PREFILL_CONTACT: &str = "9999999999";
pub const DEFAULT_THEME_COLOR: &str = "#6B7280";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("payment success URL is not a valid URL: {value}")]
    InvalidSuccessUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

// Fully resolved configuration, every field populated.
#[derive(Clone, Debug)]
pub struct WidgetConfig {
    pub booking_api_url: String,
    pub payment_api_url: String,
    pub payment_success_url: String,
    pub currency: String,
    pub currency_symbol: String,
    pub merchant_name: String,
    pub payment_description: String,
    pub prefill_contact: String,
    pub theme_color: String,
}

impl WidgetConfig {
    pub fn success_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.payment_success_url).map_err(|source| ConfigError::InvalidSuccessUrl {
            value: self.payment_success_url.clone(),
            source,
        })
    }

    pub fn branding(&self) -> CheckoutBranding {
        CheckoutBranding {
            currency: self.currency.clone(),
            merchant_name: self.merchant_name.clone(),
            description: self.payment_description.clone(),
            prefill_contact: self.prefill_contact.clone(),
            theme_color: self.theme_color.clone(),
        }
    }
}

// Optional overrides read from the TOML config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub booking_api_url: Option<String>,
    pub payment_api_url: Option<String>,
    pub payment_success_url: Option<String>,
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
    pub merchant_name: Option<String>,
    pub payment_description: Option<String>,
    pub prefill_contact: Option<String>,
    pub theme_color: Option<String>,
}

// Environment overrides, captured once per load.
#[derive(Debug, Default)]
struct EnvOverrides {
    booking_api_url: Option<String>,
    payment_api_url: Option<String>,
    payment_success_url: Option<String>,
    currency: Option<String>,
    currency_symbol: Option<String>,
    merchant_name: Option<String>,
    payment_description: Option<String>,
    prefill_contact: Option<String>,
    theme_color: Option<String>,
}

impl EnvOverrides {
    fn capture() -> Self {
        Self {
            booking_api_url: env::var("BOOKING_API_URL").ok(),
            payment_api_url: env::var("PAYMENT_API_URL").ok(),
            payment_success_url: env::var("PAYMENT_SUCCESS_URL").ok(),
            currency: env::var("BOOKING_CURRENCY").ok(),
            currency_symbol: env::var("BOOKING_CURRENCY_SYMBOL").ok(),
            merchant_name: env::var("MERCHANT_NAME").ok(),
            payment_description: env::var("PAYMENT_DESCRIPTION").ok(),
            prefill_contact: env::var("PREFILL_CONTACT").ok(),
            theme_color: env::var("THEME_COLOR").ok(),
        }
    }
}

pub fn load() -> Result<WidgetConfig, ConfigError> {
    let file = match env::var("WIDGET_CONFIG") {
        Ok(path) => read_file(Path::new(&path))?,
        Err(_) => FileConfig::default(),
    };
    Ok(resolve(file, EnvOverrides::capture()))
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn pick(env_value: Option<String>, file_value: Option<String>, default: &str) -> String {
    env_value
        .or(file_value)
        .unwrap_or_else(|| default.to_string())
}

// Defaults < file < environment. The success URL default derives from
// the resolved payment API URL, so overriding only the payment service
// moves the verification endpoint with it.
fn resolve(file: FileConfig, env: EnvOverrides) -> WidgetConfig {
    let payment_api_url = pick(
        env.payment_api_url,
        file.payment_api_url,
        DEFAULT_PAYMENT_API_URL,
    );
    let payment_success_url = env
        .payment_success_url
        .or(file.payment_success_url)
        .unwrap_or_else(|| format!("{payment_api_url}/success"));

    WidgetConfig {
        booking_api_url: pick(
            env.booking_api_url,
            file.booking_api_url,
            DEFAULT_BOOKING_API_URL,
        ),
        payment_api_url,
        payment_success_url,
        currency: pick(env.currency, file.currency, DEFAULT_CURRENCY),
        currency_symbol: pick(
            env.currency_symbol,
            file.currency_symbol,
            DEFAULT_CURRENCY_SYMBOL,
        ),
        merchant_name: pick(env.merchant_name, file.merchant_name, DEFAULT_MERCHANT_NAME),
        payment_description: pick(
            env.payment_description,
            file.payment_description,
            DEFAULT_PAYMENT_DESCRIPTION,
        ),
        prefill_contact: pick(
            env.prefill_contact,
            file.prefill_contact,
            DEFAULT_PREFILL_CONTACT,
        ),
        theme_color: pick(env.theme_color, file.theme_color, DEFAULT_THEME_COLOR),
    }
}
