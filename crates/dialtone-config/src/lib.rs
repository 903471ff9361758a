use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dialtone_core::prefixes::{
    is_classifier_prefix, Operator, OperatorPrefixes, PrefixBook, RegionPrefix,
};
use dialtone_core::rules::DEFAULT_VISIBLE_DIGITS;
use dialtone_core::SUBSCRIBER_DIGITS;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "dialtone";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mask_visible_digits: usize,
    pub prefix_book: PrefixBook,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mask_visible_digits: DEFAULT_VISIBLE_DIGITS,
            prefix_book: PrefixBook::builtin(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid mask_visible_digits value: {0}")]
    InvalidVisibleDigits(usize),
    #[error("invalid classifier prefix: {0}")]
    InvalidPrefix(String),
    #[error("duplicate operator entry: {0}")]
    DuplicateOperator(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    mask_visible_digits: Option<usize>,
    operators: Option<Vec<OperatorFile>>,
    regions: Option<Vec<RegionFile>>,
    region_fallback: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OperatorFile {
    name: Operator,
    prefixes: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionFile {
    prefix: String,
    label: String,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(visible) = parsed.mask_visible_digits {
        if visible > SUBSCRIBER_DIGITS {
            return Err(ConfigError::InvalidVisibleDigits(visible));
        }
        config.mask_visible_digits = visible;
    }

    if let Some(operators) = parsed.operators {
        let mut entries: Vec<OperatorPrefixes> = Vec::with_capacity(operators.len());
        for operator in operators {
            if entries.iter().any(|entry| entry.operator == operator.name) {
                return Err(ConfigError::DuplicateOperator(
                    operator.name.as_str().to_string(),
                ));
            }
            for prefix in &operator.prefixes {
                if !is_classifier_prefix(prefix) {
                    return Err(ConfigError::InvalidPrefix(prefix.clone()));
                }
            }
            entries.push(OperatorPrefixes {
                operator: operator.name,
                prefixes: operator.prefixes,
            });
        }
        config.prefix_book.operators = entries;
    }

    if let Some(regions) = parsed.regions {
        let mut entries = Vec::with_capacity(regions.len());
        for region in regions {
            // region lookups only ever use the 4-digit prefix
            if region.prefix.len() != 4 || !is_classifier_prefix(&region.prefix) {
                return Err(ConfigError::InvalidPrefix(region.prefix.clone()));
            }
            entries.push(RegionPrefix {
                prefix: region.prefix,
                label: region.label,
            });
        }
        config.prefix_book.regions = entries;
    }

    if let Some(fallback) = parsed.region_fallback {
        config.prefix_book.region_fallback = fallback;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigFile, OperatorFile, RegionFile};
    use dialtone_core::prefixes::Operator;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            mask_visible_digits: Some(4),
            operators: Some(vec![OperatorFile {
                name: Operator::Jio,
                prefixes: vec!["7070".to_string(), "70003".to_string()],
            }]),
            regions: Some(vec![RegionFile {
                prefix: "9820".to_string(),
                label: "Mumbai".to_string(),
            }]),
            region_fallback: Some("IN".to_string()),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.mask_visible_digits, 4);
        assert_eq!(merged.prefix_book.operators.len(), 1);
        assert_eq!(merged.prefix_book.operators[0].operator, Operator::Jio);
        assert_eq!(merged.prefix_book.regions.len(), 1);
        assert_eq!(merged.prefix_book.region_fallback, "IN");
    }

    #[test]
    fn merge_config_rejects_bad_prefix() {
        let parsed = ConfigFile {
            mask_visible_digits: None,
            operators: Some(vec![OperatorFile {
                name: Operator::Airtel,
                prefixes: vec!["12".to_string()],
            }]),
            regions: None,
            region_fallback: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("invalid classifier prefix"));
    }

    #[test]
    fn merge_config_rejects_oversized_visibility() {
        let parsed = ConfigFile {
            mask_visible_digits: Some(11),
            operators: None,
            regions: None,
            region_fallback: None,
        };
        assert!(merge_config(parsed).is_err());
    }

    #[test]
    fn merge_config_rejects_duplicate_operator() {
        let parsed = ConfigFile {
            mask_visible_digits: None,
            operators: Some(vec![
                OperatorFile {
                    name: Operator::Vi,
                    prefixes: vec!["9820".to_string()],
                },
                OperatorFile {
                    name: Operator::Vi,
                    prefixes: vec!["9821".to_string()],
                },
            ]),
            regions: None,
            region_fallback: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("duplicate operator"));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "mask_visible_digits = 3\n\n[[regions]]\nprefix = \"9830\"\nlabel = \"Kolkata\"\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.mask_visible_digits, 3);
        assert_eq!(config.prefix_book.regions.len(), 1);
        assert_eq!(config.prefix_book.regions[0].label, "Kolkata");
    }
}
