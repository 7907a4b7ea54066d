//! TOML configuration: connection string and the code table.
//!
//! ```toml
//! database_url = "sqlite://app.db?mode=rwc"
//! default_code = "DATABASE_ERROR"
//!
//! [codes]
//! "2067" = "DUPLICATE_KEY"
//! "787" = "FOREIGN_KEY_VIOLATION"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FactoryError, FactoryResult};
use crate::resolver::CodeTable;

/// File looked up in the working directory.
pub const LOCAL_CONFIG: &str = "sqlfactory.toml";

/// Environment variable that overrides `database_url`.
pub const DATABASE_URL_ENV: &str = "SQLFACTORY_DATABASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub database_url: Option<String>,
    /// Numeric database code (as a string key) to error name.
    pub codes: BTreeMap<String, String>,
    /// Name used for codes missing from `codes`.
    pub default_code: Option<String>,
}

impl FactoryConfig {
    pub fn from_toml(content: &str) -> FactoryResult<Self> {
        toml::from_str(content).map_err(|e| FactoryError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> FactoryResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Load from `path` if given, otherwise from the first of
    /// `./sqlfactory.toml` and `<config dir>/sqlfactory/config.toml` that
    /// exists. Falls back to defaults. `SQLFACTORY_DATABASE_URL` wins over
    /// the file's `database_url`.
    pub fn load(path: Option<&Path>) -> FactoryResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::candidates().into_iter().find(|p| p.exists()) {
                Some(found) => {
                    tracing::debug!(path = %found.display(), "loading configuration");
                    Self::from_file(found)?
                }
                None => Self::default(),
            },
        };

        if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
            config.database_url = Some(url);
        }

        Ok(config)
    }

    fn candidates() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqlfactory").join("config.toml"));
        }
        paths
    }

    /// Build the code table, or `None` when no codes are configured.
    pub fn code_table(&self) -> FactoryResult<Option<CodeTable>> {
        if self.codes.is_empty() && self.default_code.is_none() {
            return Ok(None);
        }

        let mut table = CodeTable::new();
        if let Some(default) = &self.default_code {
            table = table.with_default(default.clone());
        }
        for (code, name) in &self.codes {
            let code: i32 = code
                .trim()
                .parse()
                .map_err(|_| FactoryError::Config(format!("invalid database code '{code}'")))?;
            table.insert(code, name.clone());
        }

        Ok(Some(table))
    }
}
