use std::env;
use std::path::PathBuf;

pub const DEFAULT_CART_FILE: &str = "data/cart.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub cart_file: PathBuf,
    pub archive_on_save: bool,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Self::from_vars(|key| env::var(key).ok())?;

        tracing::info!("Config: successfully loaded for {} environment", config.environment);
        Ok(config)
    }

    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let archive_on_save = match var("CART_ARCHIVE") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                anyhow::anyhow!("CART_ARCHIVE must be true/false/1/0, got '{}'", raw)
            })?,
            None => true,
        };

        let config = Config {
            cart_file: var("CART_FILE")
                .unwrap_or_else(|| DEFAULT_CART_FILE.to_string())
                .into(),
            archive_on_save,
            environment: var("APP_ENV").unwrap_or_else(|| "development".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.cart_file.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("CART_FILE is not set"));
        }

        if self.cart_file.file_name().is_none() {
            return Err(anyhow::anyhow!(
                "CART_FILE must point to a file, got '{}'",
                self.cart_file.display()
            ));
        }

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
