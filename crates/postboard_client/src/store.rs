use postboard_core::{Error, session::TokenStore};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Keeps the bearer token in a single file, the terminal counterpart of the
/// browser's `localStorage` entry.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn storage_error(path: &Path, err: &std::io::Error) -> Error {
    Error::Storage(format!("{}: {err}", path.display()))
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn store(&self, token: &str) -> Result<(), Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| storage_error(parent, &err))?;
        }
        fs::write(&self.path, token).map_err(|err| storage_error(&self.path, &err))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|err| storage_error(&self.path, &err))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error(&self.path, &err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::session::{GuardDecision, guard_store};

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("postboard-{}", uuid::Uuid::new_v4()))
            .join("token")
    }

    #[test]
    fn store_then_read_then_clear() -> Result<(), Error> {
        let store = FileTokenStore::new(temp_path());
        assert_eq!(store.token(), None);
        assert_eq!(guard_store(&store), GuardDecision::Redirect("/login"));

        store.store("abc.def.ghi")?;
        assert_eq!(store.token().as_deref(), Some("abc.def.ghi"));
        assert_eq!(guard_store(&store), GuardDecision::Render);

        store.clear()?;
        assert_eq!(store.token(), None);
        // Clearing twice is fine.
        store.clear()?;

        if let Some(dir) = store.path().parent() {
            let _ = fs::remove_dir_all(dir);
        }
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn token_file_is_private() -> Result<(), Error> {
        use std::os::unix::fs::PermissionsExt;

        let store = FileTokenStore::new(temp_path());
        store.store("secret")?;
        let mode = fs::metadata(store.path())
            .map_err(|err| storage_error(store.path(), &err))?
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);

        if let Some(dir) = store.path().parent() {
            let _ = fs::remove_dir_all(dir);
        }
        Ok(())
    }
}
