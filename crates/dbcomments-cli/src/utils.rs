use anyhow::{Result, bail};
use dbcomments_config::DbCommentsConfig;
use dbcomments_core::AppDef;
use dbcomments_loader::{load_apps, load_config};

/// Load dbcomments.json and every application it points at.
pub fn load_project() -> Result<(DbCommentsConfig, Vec<AppDef>)> {
    let config = load_config()?;
    let apps = load_apps(&config)?;
    Ok((config, apps))
}

/// Keep only the application named `filter`, or all of them.
pub fn select_apps(apps: Vec<AppDef>, filter: Option<&str>) -> Result<Vec<AppDef>> {
    let Some(label) = filter else {
        return Ok(apps);
    };

    let selected: Vec<AppDef> = apps.into_iter().filter(|app| app.label == label).collect();
    if selected.is_empty() {
        bail!("application '{label}' not found in the models directory");
    }
    Ok(selected)
}

/// Database alias to use: the explicit one, or the configured default.
pub fn database_alias(config: &DbCommentsConfig, database: Option<String>) -> String {
    database.unwrap_or_else(|| config.default_database().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn apps() -> Vec<AppDef> {
        vec![AppDef::new("billing"), AppDef::new("people")]
    }

    #[rstest]
    #[case::all(None, vec!["billing", "people"])]
    #[case::one(Some("people"), vec!["people"])]
    fn select_apps_filters_by_label(#[case] filter: Option<&str>, #[case] expected: Vec<&str>) {
        let selected = select_apps(apps(), filter).unwrap();
        let labels: Vec<_> = selected.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn select_apps_rejects_unknown_label() {
        let err = select_apps(apps(), Some("orders")).unwrap_err();
        assert!(err.to_string().contains("'orders' not found"));
    }

    #[test]
    fn database_alias_falls_back_to_configured_default() {
        let mut config = DbCommentsConfig::default();
        assert_eq!(database_alias(&config, None), "default");
        assert_eq!(database_alias(&config, Some("replica".into())), "replica");

        config.default_database = "primary".into();
        assert_eq!(database_alias(&config, None), "primary");
    }
}
