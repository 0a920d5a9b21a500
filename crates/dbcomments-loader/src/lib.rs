pub mod apps;
pub mod config;

pub use apps::{load_app, load_apps, load_apps_from_dir};
pub use config::{CONFIG_FILE, load_config, load_config_from_path, load_config_or_default};
