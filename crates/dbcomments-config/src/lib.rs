pub mod config;
pub mod file_format;

pub use config::{ConfigError, DEFAULT_DB_ALIAS, DatabaseConfig, DbCommentsConfig};
pub use file_format::FileFormat;

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    #[test]
    fn default_values_use_standard_paths() {
        let cfg = DbCommentsConfig::default();
        assert_eq!(cfg.models_dir, PathBuf::from("models"));
        assert_eq!(cfg.default_database(), DEFAULT_DB_ALIAS);
    }

    #[test]
    fn overrides_work_via_struct_update() {
        let cfg = DbCommentsConfig {
            models_dir: PathBuf::from("custom_models"),
            model_format: FileFormat::Yaml,
            ..Default::default()
        };

        assert_eq!(cfg.models_dir(), Path::new("custom_models"));
        assert_eq!(cfg.model_format(), FileFormat::Yaml);
        assert!(cfg.database(DEFAULT_DB_ALIAS).is_some());
    }
}
