use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dbcomments_config::{DbCommentsConfig, FileFormat};
use dbcomments_core::{AppDef, ModelDef};

/// Load every application under the configured models directory.
///
/// Each sub-directory is one application named after the directory; the
/// JSON/YAML files inside it are its models. Applications and models are
/// returned sorted by name.
pub fn load_apps(config: &DbCommentsConfig) -> Result<Vec<AppDef>> {
    load_apps_from_dir(config.models_dir())
}

/// Load applications from a specific models directory.
pub fn load_apps_from_dir(models_dir: &Path) -> Result<Vec<AppDef>> {
    if !models_dir.exists() {
        tracing::debug!(dir = %models_dir.display(), "models directory does not exist");
        return Ok(Vec::new());
    }

    let mut apps = Vec::new();
    for path in sorted_entries(models_dir)? {
        if path.is_dir() {
            apps.push(load_app(&path)?);
        } else if path.is_file() {
            tracing::warn!(
                file = %path.display(),
                "ignoring model file outside an application directory"
            );
        }
    }

    Ok(apps)
}

/// Load a single application directory.
pub fn load_app(dir: &Path) -> Result<AppDef> {
    let label = dir
        .file_name()
        .and_then(|s| s.to_str())
        .with_context(|| format!("application directory has no name: {}", dir.display()))?
        .to_string();

    let mut app = AppDef::new(label);
    for path in sorted_entries(dir)? {
        if !path.is_file() {
            continue;
        }
        let format = path
            .extension()
            .and_then(|s| s.to_str())
            .and_then(FileFormat::from_extension);
        if let Some(format) = format {
            app.models.push(load_model_file(&path, format)?);
        }
    }

    app.validate()
        .with_context(|| format!("invalid models in {}", dir.display()))?;
    tracing::debug!(app = %app.label, models = app.models.len(), "loaded application");
    Ok(app)
}

fn load_model_file(path: &Path, format: FileFormat) -> Result<ModelDef> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read model file: {}", path.display()))?;

    let model: ModelDef = match format {
        FileFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("parse JSON model: {}", path.display()))?,
        FileFormat::Yaml | FileFormat::Yml => serde_yaml::from_str(&content)
            .with_context(|| format!("parse YAML model: {}", path.display()))?,
    };

    Ok(model)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read directory: {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.context("read directory entry")?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbcomments_core::FieldDef;
    use rstest::rstest;
    use tempfile::tempdir;

    fn person() -> ModelDef {
        ModelDef::new("Person")
            .with_field(FieldDef::new("full_name"))
            .with_field(FieldDef::new("age").with_help_text("in years"))
    }

    #[test]
    fn load_apps_returns_empty_when_no_models_dir() {
        let tmp = tempdir().unwrap();
        let apps = load_apps_from_dir(&tmp.path().join("models")).unwrap();
        assert!(apps.is_empty());
    }

    #[rstest]
    #[case::json("person.json")]
    #[case::yaml("person.yaml")]
    #[case::yml("person.yml")]
    fn load_apps_reads_model_formats(#[case] file: &str) {
        let tmp = tempdir().unwrap();
        let app_dir = tmp.path().join("people");
        fs::create_dir_all(&app_dir).unwrap();

        let content = if file.ends_with(".json") {
            serde_json::to_string_pretty(&person()).unwrap()
        } else {
            serde_yaml::to_string(&person()).unwrap()
        };
        fs::write(app_dir.join(file), content).unwrap();

        let apps = load_apps_from_dir(tmp.path()).unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].label, "people");
        assert_eq!(apps[0].models, vec![person()]);
    }

    #[test]
    fn load_apps_sorts_apps_and_models() {
        let tmp = tempdir().unwrap();
        for app in ["shop", "accounts"] {
            fs::create_dir_all(tmp.path().join(app)).unwrap();
        }
        for model in ["Order", "Cart"] {
            fs::write(
                tmp.path().join("shop").join(format!("{}.json", model.to_lowercase())),
                serde_json::to_string(&ModelDef::new(model)).unwrap(),
            )
            .unwrap();
        }

        let apps = load_apps_from_dir(tmp.path()).unwrap();
        let labels: Vec<_> = apps.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["accounts", "shop"]);
        assert!(!apps[0].has_models());
        let models: Vec<_> = apps[1].models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(models, vec!["Cart", "Order"]);
    }

    #[test]
    fn load_apps_ignores_stray_files() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("README.md"), "notes").unwrap();
        fs::write(
            tmp.path().join("orphan.json"),
            serde_json::to_string(&person()).unwrap(),
        )
        .unwrap();
        fs::create_dir_all(tmp.path().join("people")).unwrap();
        fs::write(tmp.path().join("people").join("notes.txt"), "x").unwrap();

        let apps = load_apps_from_dir(tmp.path()).unwrap();
        assert_eq!(apps.len(), 1);
        assert!(apps[0].models.is_empty());
    }

    #[test]
    fn load_apps_fails_on_invalid_json() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("people")).unwrap();
        fs::write(tmp.path().join("people").join("person.json"), "{").unwrap();

        let err = load_apps_from_dir(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("parse JSON model"));
    }

    #[test]
    fn load_apps_fails_on_duplicate_columns() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("people")).unwrap();
        let model = ModelDef::new("Person")
            .with_field(FieldDef::new("name"))
            .with_field(FieldDef::new("nickname").with_column("name"));
        fs::write(
            tmp.path().join("people").join("person.json"),
            serde_json::to_string(&model).unwrap(),
        )
        .unwrap();

        let err = load_apps_from_dir(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("invalid models in"));
        assert!(format!("{err:#}").contains("column 'name'"));
    }

    #[test]
    fn load_apps_uses_config_models_dir() {
        let tmp = tempdir().unwrap();
        let models_dir = tmp.path().join("custom");
        fs::create_dir_all(models_dir.join("people")).unwrap();

        let config = DbCommentsConfig {
            models_dir,
            ..Default::default()
        };
        let apps = load_apps(&config).unwrap();
        assert_eq!(apps.len(), 1);
    }
}
