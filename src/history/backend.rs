use std::collections::HashMap;
use std::io;

/// Key/value string storage the history persists into.
pub trait StorageBackend {
    fn load(&self, key: &str) -> io::Result<Option<String>>;
    fn store(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// In-process storage; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded storage, handy for simulating what an earlier run left behind.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileBackend {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn store(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

/// `window.localStorage` in the browser.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone)]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    fn storage() -> io::Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Unsupported, "localStorage unavailable"))
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> io::Error {
    io::Error::other(format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn store(&mut self, key: &str, value: &str) -> io::Result<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_round_trips_and_removes() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.load("k").expect("load"), None);
        backend.store("k", "[]").expect("store");
        assert_eq!(backend.load("k").expect("load").as_deref(), Some("[]"));
        backend.remove("k").expect("remove");
        assert_eq!(backend.load("k").expect("load"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_backend_uses_one_file_per_key() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut backend = FileBackend::new(dir.path().join("nested"));
        assert_eq!(backend.load("quizHistory").expect("missing is none"), None);
        backend.store("quizHistory", "[1]").expect("store creates dir");
        assert!(dir.path().join("nested").join("quizHistory.json").exists());
        assert_eq!(
            backend.load("quizHistory").expect("load").as_deref(),
            Some("[1]")
        );
        backend.remove("quizHistory").expect("remove");
        backend.remove("quizHistory").expect("removing twice is fine");
    }
}
