use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dbcomments_config::DbCommentsConfig;
use dbcomments_core::ModelDef;
use schemars::{Schema, schema_for};

/// File name of the schema referenced by `$schema` in generated model templates.
const MODEL_SCHEMA_FILE: &str = "model.schema.json";
const CONFIG_SCHEMA_FILE: &str = "config.schema.json";

#[derive(Debug, Parser)]
#[command(
    name = "dbcomments-schema-gen",
    about = "Emit JSON Schemas for dbcomments model files and dbcomments.json."
)]
struct Args {
    /// Output directory for schema files.
    #[arg(short = 'o', long = "out", default_value = "schemas")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let written = run(&args.out)?;

    println!("Wrote schemas:");
    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}

fn run(out: &Path) -> Result<Vec<PathBuf>> {
    if !out.exists() {
        fs::create_dir_all(out).with_context(|| format!("create dir {}", out.display()))?;
    }

    let schemas = [
        (MODEL_SCHEMA_FILE, schema_for!(ModelDef)),
        (CONFIG_SCHEMA_FILE, schema_for!(DbCommentsConfig)),
    ];

    schemas
        .iter()
        .map(|(file, schema)| write_schema(&out.join(file), schema))
        .collect()
}

fn write_schema(path: &Path, schema: &Schema) -> Result<PathBuf> {
    let text = serde_json::to_string_pretty(schema)
        .with_context(|| format!("serialize {}", path.display()))?;
    fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(path.to_path_buf())
}
