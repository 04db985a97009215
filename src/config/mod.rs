use crate::data::SnapshotPaths;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use crate::utils::path::resolve_from;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Overrides the configuration directory (used by tests and CI).
pub const CONFIG_DIR_ENV: &str = "VENDCAL_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON export of `GET /api/v1/VendingMachines`.
    #[serde(default)]
    pub machines_file: Option<String>,
    /// JSON export of `GET /api/v1/Maintenance`.
    #[serde(default)]
    pub maintenance_file: Option<String>,
    /// JSON export of `GET /api/v1/Users`.
    #[serde(default)]
    pub users_file: Option<String>,
    /// Pinned reference date (YYYY-MM-DD). Empty means today.
    #[serde(default)]
    pub reference_date: Option<String>,
    #[serde(default = "default_schedule_roles")]
    pub schedule_roles: Vec<String>,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_schedule_roles() -> Vec<String> {
    // English and backend (Russian) role names
    ["Operator", "Administrator", "Оператор", "Администратор"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            machines_file: Some("machines.json".to_string()),
            maintenance_file: Some("maintenance.json".to_string()),
            users_file: Some("users.json".to_string()),
            reference_date: None,
            schedule_roles: default_schedule_roles(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("vendcal")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".vendcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("vendcal.conf")
    }

    /// Load configuration from file.
    ///
    /// Without a config file nothing is configured: every snapshot is empty
    /// unless given on the command line.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using empty snapshot paths");
            return Ok(Config {
                machines_file: None,
                maintenance_file: None,
                users_file: None,
                ..Config::default()
            });
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Create the config directory and write a default configuration file.
    pub fn init_all(reference_date: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if let Some(r) = &reference_date
            && parse_date(r).is_none()
        {
            return Err(AppError::InvalidDate(r.clone()));
        }

        let config = Config {
            reference_date,
            ..Config::default()
        };

        let path = Self::config_file();
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            fs::write(&path, yaml).map_err(|_| AppError::ConfigSave)?;
        }

        Ok(path)
    }

    pub fn snapshot_paths(&self) -> SnapshotPaths {
        let base = Self::config_dir();
        let resolve = |p: &Option<String>| {
            p.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| resolve_from(&base, s))
        };

        SnapshotPaths {
            machines: resolve(&self.machines_file),
            maintenance: resolve(&self.maintenance_file),
            users: resolve(&self.users_file),
        }
    }

    /// Pinned reference date, if any.
    pub fn reference(&self) -> AppResult<Option<NaiveDate>> {
        match self.reference_date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_date(s)
                .map(Some)
                .ok_or_else(|| AppError::Config(format!("invalid reference_date '{s}'"))),
        }
    }
}
