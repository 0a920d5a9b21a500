use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use dbcomments_config::FileFormat;
use dbcomments_core::{FieldDef, ModelDef};
use serde_json::Value;

use crate::utils::load_project;

pub fn cmd_new(app: String, name: String, format: Option<FileFormat>) -> Result<()> {
    if app.trim().is_empty() || name.trim().is_empty() {
        bail!("application label and model name must not be empty");
    }

    let (config, _) = load_project()?;
    let format = format.unwrap_or(config.model_format());

    let dir = config.models_dir().join(&app);
    if !dir.exists() {
        fs::create_dir_all(&dir).context("create application directory")?;
    }

    let path = dir.join(format!("{}.{}", name.to_lowercase(), format.extension()));
    if path.exists() {
        bail!("model file already exists: {}", path.display());
    }

    let model = ModelDef::new(name).with_field(FieldDef::new("id").with_verbose_name("ID"));

    let schema_url = schema_url();
    match format {
        FileFormat::Json => write_json_with_schema(&path, &model, &schema_url)?,
        FileFormat::Yaml | FileFormat::Yml => write_yaml(&path, &model, &schema_url)?,
    }

    println!("Created model template: {}", path.display());
    Ok(())
}

fn schema_url() -> String {
    // Users can override via DBCOMMENTS_SCHEMA_BASE_URL.
    let base = std::env::var("DBCOMMENTS_SCHEMA_BASE_URL").ok();
    let base = base
        .as_deref()
        .unwrap_or("https://raw.githubusercontent.com/vanadium23/dbcomments/refs/heads/main/schemas");
    format!("{}/model.schema.json", base.trim_end_matches('/'))
}

fn write_json_with_schema(path: &Path, model: &ModelDef, schema_url: &str) -> Result<()> {
    let mut value = serde_json::to_value(model).context("serialize model to json")?;
    if let Value::Object(ref mut map) = value {
        map.insert("$schema".to_string(), Value::String(schema_url.to_string()));
    }
    let text = serde_json::to_string_pretty(&value).context("stringify json with schema")?;
    fs::write(path, text).with_context(|| format!("write file: {}", path.display()))?;
    Ok(())
}

fn write_yaml(path: &Path, model: &ModelDef, schema_url: &str) -> Result<()> {
    let mut value = serde_yaml::to_value(model).context("serialize model to yaml value")?;
    if let serde_yaml::Value::Mapping(ref mut map) = value {
        map.insert(
            serde_yaml::Value::String("$schema".to_string()),
            serde_yaml::Value::String(schema_url.to_string()),
        );
    }
    let text = serde_yaml::to_string(&value).context("serialize yaml with schema")?;
    fs::write(path, text).with_context(|| format!("write file: {}", path.display()))?;
    Ok(())
}
