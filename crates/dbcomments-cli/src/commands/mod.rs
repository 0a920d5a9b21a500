pub mod init;
pub mod new;
pub mod show;
pub mod sql;
pub mod sync;

pub use init::cmd_init;
pub use new::cmd_new;
pub use show::cmd_show;
pub use sql::cmd_sql;
pub use sync::cmd_sync;

#[cfg(test)]
pub(crate) mod test_support {
    use std::env;
    use std::fs;
    use std::path::{Path, PathBuf};

    use dbcomments_config::{DatabaseConfig, DbCommentsConfig};
    use dbcomments_loader::CONFIG_FILE;

    pub struct CwdGuard {
        original: PathBuf,
    }

    impl CwdGuard {
        pub fn new(dir: &Path) -> Self {
            let original = env::current_dir().unwrap();
            env::set_current_dir(dir).unwrap();
            Self { original }
        }
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.original);
        }
    }

    /// Write dbcomments.json with a single default database of `engine`.
    pub fn write_config(engine: &str) -> DbCommentsConfig {
        let mut config = DbCommentsConfig::default();
        config.databases.insert(
            "default".into(),
            DatabaseConfig::new(engine, "postgres://localhost:1/unreachable"),
        );
        fs::write(CONFIG_FILE, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        config
    }

    /// Write `models/<app>/<file>` with the given contents.
    pub fn write_model(app: &str, file: &str, contents: &str) {
        let dir = Path::new("models").join(app);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), contents).unwrap();
    }

    pub const PERSON_JSON: &str = r#"{
  "name": "Person",
  "fields": [
    { "name": "full_name", "verbose_name": "Full name" },
    { "name": "age", "verbose_name": "Age", "help_text": "in years" }
  ]
}"#;
}
