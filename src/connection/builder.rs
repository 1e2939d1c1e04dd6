/// Configuration for opening a local Turso database.
///
/// ```ignore
/// let db = Builder::new_local(":memory:").with_mvcc(true).build().await?;
/// let conn = db.connect()?;
/// ```
pub struct Builder {
    pub(super) path:              String,
    pub(super) enable_mvcc:       bool,
    pub(super) enable_encryption: bool,
    pub(super) vfs:               Option<String>,
    pub(super) encryption_opts:   Option<turso::EncryptionOpts>,
}

impl Builder {
    /// Starts a configuration for the database file at `path` (`:memory:`
    /// for an in-memory database).
    pub fn new_local(path: &str) -> Self {
        Self {
            path:              path.to_string(),
            enable_mvcc:       false,
            enable_encryption: false,
            vfs:               None,
            encryption_opts:   None,
        }
    }

    pub fn with_mvcc(mut self, mvcc: bool) -> Self {
        self.enable_mvcc = mvcc;
        self
    }

    pub fn experimental_encryption(mut self, encryption_enabled: bool) -> Self {
        self.enable_encryption = encryption_enabled;
        self
    }

    pub fn with_encryption(mut self, opts: turso::EncryptionOpts) -> Self {
        self.encryption_opts = Some(opts);
        self
    }

    pub fn with_io(mut self, vfs: String) -> Self {
        self.vfs = Some(vfs);
        self
    }

    pub async fn build(self) -> super::ConnectionResult<super::Database> {
        let opts = super::opts::DatabaseOpts::from(&self);
        tracing::debug!(path = %self.path, mvcc = self.enable_mvcc, "opening database");

        let mut turso_builder = turso::Builder::new_local(&self.path)
            .with_mvcc(self.enable_mvcc)
            .experimental_encryption(self.enable_encryption);

        if let Some(opts) = self.encryption_opts {
            turso_builder = turso_builder.with_encryption(opts);
        }
        if let Some(vfs) = self.vfs {
            turso_builder = turso_builder.with_io(vfs);
        }

        let db = turso_builder.build().await?;

        Ok(super::Database::new(db, opts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Builder::new_local(":memory:");
        assert_eq!(builder.path, ":memory:");
        assert!(!builder.enable_mvcc);
        assert!(!builder.enable_encryption);
        assert!(builder.vfs.is_none());
    }

    #[test]
    fn test_builder_options() {
        let builder = Builder::new_local("app.db").with_mvcc(true).with_io("memory".to_string());
        assert!(builder.enable_mvcc);
        assert_eq!(builder.vfs.as_deref(), Some("memory"));
    }
}
