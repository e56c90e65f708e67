use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_story_endpoint")]
    pub story_endpoint: String,

    #[serde(default = "default_image_endpoint")]
    pub image_endpoint: String,
}

fn default_story_endpoint() -> String {
    "https://books-universe.onrender.com/api/story".to_string()
}

fn default_image_endpoint() -> String {
    "https://books-universe.onrender.com/api/image".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            story_endpoint: default_story_endpoint(),
            image_endpoint: default_image_endpoint(),
        }
    }
}

impl Config {
    /// Loads `config.yml` from the working directory; a missing file is not
    /// an error, the built-in endpoints apply.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.yml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("{} not found, using default endpoints", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = Config::load_from(&dir.path().join("config.yml"))?;
        assert_eq!(
            config.story_endpoint,
            "https://books-universe.onrender.com/api/story"
        );
        assert_eq!(
            config.image_endpoint,
            "https://books-universe.onrender.com/api/image"
        );
        Ok(())
    }

    #[test]
    fn test_load_overrides_endpoints() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.yml");
        fs::write(
            &path,
            "story_endpoint: http://localhost:8080/story\nimage_endpoint: http://localhost:8080/image\n",
        )?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.story_endpoint, "http://localhost:8080/story");
        assert_eq!(config.image_endpoint, "http://localhost:8080/image");
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.yml");
        fs::write(&path, "story_endpoint: http://localhost:8080/story\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.story_endpoint, "http://localhost:8080/story");
        assert_eq!(
            config.image_endpoint,
            "https://books-universe.onrender.com/api/image"
        );
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.yml");
        fs::write(&path, ": not yaml : [")?;
        assert!(Config::load_from(&path).is_err());
        Ok(())
    }
}
