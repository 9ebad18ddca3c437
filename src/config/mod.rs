use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    currency::Currency,
    errors::ConfigError,
    ledger::LedgerFormatter,
    locale::Locale,
    utils::app_data_dir,
};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

pub const CURRENCY_ENV: &str = "LEDGER_REPORT_CURRENCY";
pub const LOCALE_ENV: &str = "LEDGER_REPORT_LOCALE";

/// Default currency and locale for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub currency: String,
    pub locale: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default().code().into(),
            locale: Locale::default().code().into(),
        }
    }
}

impl ReportConfig {
    /// Resolves both codes against the supported catalogs.
    pub fn validate(&self) -> Result<(Currency, Locale), ConfigError> {
        let currency: Currency = self.currency.parse()?;
        let locale: Locale = self.locale.parse()?;
        Ok((currency, locale))
    }

    /// Replaces currency and locale with the values of the
    /// `LEDGER_REPORT_CURRENCY` / `LEDGER_REPORT_LOCALE` variables when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(currency) = env::var(CURRENCY_ENV) {
            self.currency = currency;
        }
        if let Ok(locale) = env::var(LOCALE_ENV) {
            self.locale = locale;
        }
        self
    }
}

impl LedgerFormatter {
    pub fn from_config(config: &ReportConfig) -> Result<Self, ConfigError> {
        let (currency, locale) = config.validate()?;
        Ok(Self::with(currency, locale))
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    pub fn load(&self) -> Result<ReportConfig, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(ReportConfig::default())
        }
    }

    pub fn save(&self, config: &ReportConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let (currency, locale) = ReportConfig::default().validate().unwrap();
        assert_eq!(currency, Currency::Usd);
        assert_eq!(locale, Locale::EnUs);
    }

    #[test]
    fn invalid_codes_are_reported() {
        let config = ReportConfig {
            currency: "EUR".into(),
            locale: "de-DE".into(),
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert_eq!(err.to_string(), "Invalid configuration: unknown locale: de-DE");
    }

    #[test]
    fn tmp_path_keeps_extension() {
        let tmp = tmp_path(Path::new("/tmp/report/config.json"));
        assert_eq!(tmp, PathBuf::from("/tmp/report/config.json.tmp"));
    }
}
