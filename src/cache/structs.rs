use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File-based JSON cache for backend snapshots
///
/// One JSON document per key. A cache entry that fails to parse is treated
/// as absent, so a corrupt file triggers a refetch instead of an error.
pub struct Cache {
    cache_dir: PathBuf,
}

impl Cache {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

        Ok(Self { cache_dir })
    }

    pub fn save<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.build_path(key);

        let json = serde_json::to_string_pretty(data).context("Failed to serialize cache data")?;
        fs::write(&file_path, json).context("Failed to write cache file")?;

        info!("Saved snapshot to cache: {}", file_path.display());
        Ok(())
    }

    pub fn load<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.build_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).context("Failed to read cache file")?;

        match serde_json::from_str(&json) {
            Ok(data) => {
                info!("Loaded snapshot from cache: {}", file_path.display());
                Ok(Some(data))
            }
            Err(e) => {
                warn!(
                    "Discarding unreadable cache file {}: {}",
                    file_path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    pub fn exists(&self, key: &str) -> bool {
        self.build_path(key).exists()
    }

    pub fn clear(&self) -> Result<()> {
        fs::remove_dir_all(&self.cache_dir).context("Failed to clear cache")?;
        fs::create_dir_all(&self.cache_dir).context("Failed to recreate cache directory")?;

        info!("Cleared cache directory");
        Ok(())
    }

    fn build_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        value: String,
    }

    fn temp_cache(name: &str) -> Cache {
        let dir = std::env::temp_dir().join(format!("rallyrank_test_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        Cache::new(&dir).unwrap()
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let cache = temp_cache("round_trip");
        let data = TestData {
            value: "snapshot".to_string(),
        };

        cache.save("snapshot", &data).unwrap();
        assert!(cache.exists("snapshot"));

        let loaded: Option<TestData> = cache.load("snapshot").unwrap();
        assert_eq!(loaded, Some(data));

        cache.clear().unwrap();
        assert!(!cache.exists("snapshot"));
    }

    #[test]
    fn test_missing_key_loads_as_none() {
        let cache = temp_cache("missing");
        let loaded: Option<TestData> = cache.load("nothing").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_corrupt_entry_loads_as_none() {
        let cache = temp_cache("corrupt");
        let path = cache.build_path("snapshot");
        std::fs::write(&path, "{not json").unwrap();

        let loaded: Option<TestData> = cache.load("snapshot").unwrap();
        assert_eq!(loaded, None);
    }
}
