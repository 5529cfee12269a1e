//! Bearer token persistence.
//!
//! The client holds a single token: set on login/signup, cleared on logout.
//! A [`TokenStore`] keeps it across process restarts.

use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Storage for the session's bearer token.
pub trait TokenStore: Send + Sync {
    /// Load the stored token, if any.
    fn load(&self) -> io::Result<Option<String>>;

    /// Replace the stored token.
    fn save(&self, token: &str) -> io::Result<()>;

    /// Remove the stored token. Removing an absent token succeeds.
    fn clear(&self) -> io::Result<()>;
}

/// Token store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}

/// Token store backed by a single file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("orderlee-token-{}-{name}", std::process::id()))
            .join("token")
    }

    #[test]
    fn memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("abc").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_lifecycle() {
        let path = temp_path("lifecycle");
        let store = FileTokenStore::new(&path);

        assert_eq!(store.load().unwrap(), None);

        store.save("jwt-token").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("jwt-token"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing twice is fine.
        store.clear().unwrap();

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn file_store_ignores_blank_file() {
        let path = temp_path("blank");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "  \n").unwrap();

        assert_eq!(FileTokenStore::new(&path).load().unwrap(), None);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
