use serde::Deserialize;
use std::collections::HashMap;

use crate::error::Error;
use crate::pool::Pool;

#[derive(Debug, Deserialize, Clone)]
pub struct PoolConfig {
    pub chars: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl PoolConfig {
    /// Validated pool for this entry.
    pub fn to_pool(&self) -> Result<Pool, Error> {
        self.chars.parse()
    }
}

#[derive(Debug, Deserialize)]
pub struct PoolsConfig {
    pub pools: HashMap<String, PoolConfig>,
}

impl PoolsConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../pools.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with the built-in pools
    /// 2. Override with ~/.config/anybase/pools.toml if it exists
    /// 3. Override with ./pools.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("anybase").join("pools.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => {
                        config.merge(user_config);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("pools.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => {
                    config.merge(local_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merge another config into this one, overriding existing pools
    pub fn merge(&mut self, other: PoolsConfig) {
        for (name, pool) in other.pools {
            self.pools.insert(name, pool);
        }
    }

    pub fn get_pool(&self, name: &str) -> Option<&PoolConfig> {
        self.pools.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = PoolsConfig::load_default().unwrap();
        assert!(config.pools.contains_key("base62"));
        assert!(config.pools.contains_key("base2"));
    }

    #[test]
    fn test_base62_pool_length() {
        let config = PoolsConfig::load_default().unwrap();
        let base62 = config.get_pool("base62").unwrap();
        assert_eq!(base62.chars.chars().count(), 62);
        assert_eq!(base62.to_pool().unwrap().base(), 62);
    }

    #[test]
    fn test_every_shipped_pool_validates() {
        let config = PoolsConfig::load_default().unwrap();
        for (name, pool_config) in &config.pools {
            let pool = pool_config.to_pool();
            assert!(pool.is_ok(), "shipped pool '{}' failed to validate", name);
            assert_eq!(
                pool.unwrap().base(),
                pool_config.chars.chars().count(),
                "base mismatch for '{}'",
                name
            );
        }
    }

    #[test]
    fn test_merge_configs() {
        let mut config1 = PoolsConfig {
            pools: HashMap::new(),
        };
        config1.pools.insert(
            "test1".to_string(),
            PoolConfig {
                chars: "ABC".to_string(),
                description: None,
            },
        );

        let mut config2 = PoolsConfig {
            pools: HashMap::new(),
        };
        config2.pools.insert(
            "test2".to_string(),
            PoolConfig {
                chars: "XYZ".to_string(),
                description: None,
            },
        );
        config2.pools.insert(
            "test1".to_string(),
            PoolConfig {
                chars: "DEF".to_string(),
                description: None,
            },
        );

        config1.merge(config2);

        assert_eq!(config1.pools.len(), 2);
        assert_eq!(config1.get_pool("test1").unwrap().chars, "DEF");
        assert_eq!(config1.get_pool("test2").unwrap().chars, "XYZ");
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[pools.custom]
chars = "0123456789"
description = "plain decimal"
"#;
        let config = PoolsConfig::from_toml(toml_content).unwrap();
        assert!(config.pools.contains_key("custom"));
        assert_eq!(config.get_pool("custom").unwrap().chars, "0123456789");
    }
}
