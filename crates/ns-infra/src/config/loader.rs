use std::path::Path;

use anyhow::{Context, Result};

use ns_core::AppConfig;

/// Layered configuration: built-in defaults, then an optional config file,
/// then `NOLSEOUL_`-prefixed environment variables (double underscore for
/// nesting, e.g. `NOLSEOUL_API__KEY`).
pub fn load_config(file: Option<&Path>) -> Result<AppConfig> {
    let mut builder =
        config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?);

    if let Some(path) = file {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(config::Environment::with_prefix("NOLSEOUL").separator("__"))
        .build()
        .context("assemble configuration")?;

    settings
        .try_deserialize::<AppConfig>()
        .context("decode configuration")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.api.base_url, "http://openapi.seoul.go.kr:8088");
    }

    #[test]
    fn a_config_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://proxy.local\"\nkey = \"k1\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "http://proxy.local");
        assert_eq!(config.api.key, "k1");
        assert!(config.storage.data_dir.is_none());
    }
}
