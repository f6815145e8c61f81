use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;

use super::{KeyValueStore, StoreError};
use crate::config;

/// File backed store keeping one file per key.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a failed or interrupted `set` never leaves a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `<data dir>/store`.
    pub fn default_location() -> Self {
        Self::new(config::data_dir().join("store"))
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn get_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", file_name_for_key(key)))
    }
}

/// Maps a store key onto a portable file name.
///
/// ASCII letters, digits and `-` are kept. Every other byte, `_` included,
/// becomes `_XX` with its hex value, so distinct keys get distinct files.
fn file_name_for_key(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            name.push(byte as char);
        } else {
            name.push_str(&format!("_{byte:02X}"));
        }
    }
    name
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match async_fs::read_to_string(self.get_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.get_path(key);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let tmp_path = path.with_extension("json.tmp");
        async_fs::write(&tmp_path, value).await?;
        async_fs::rename(&tmp_path, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_for_key() {
        assert_eq!(file_name_for_key("@FavoriteList"), "_40FavoriteList");
        assert_eq!(file_name_for_key("plain-key1"), "plain-key1");
        assert_eq!(file_name_for_key("a/b"), "a_2Fb");
        assert_eq!(file_name_for_key("../x"), "_2E_2E_2Fx");
        assert_eq!(file_name_for_key("é"), "_C3_A9");
    }

    #[test]
    fn test_file_name_for_key_keeps_keys_apart() {
        let keys = ["@FavoriteList", "_FavoriteList", "_40FavoriteList", "a_b", "a/b", "a.b"];
        let names: std::collections::HashSet<String> =
            keys.iter().map(|k| file_name_for_key(k)).collect();
        assert_eq!(names.len(), keys.len());
    }
}
