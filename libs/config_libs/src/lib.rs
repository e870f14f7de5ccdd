use config::{Config, ConfigError, Environment, File};
use serde::de::DeserializeOwned;
use dotenv::dotenv;
use std::fmt::Debug;

/// Loads `config_path` and layers `<PREFIX>_<SECTION>__<KEY>` environment variables on top.
///
/// Values from a `.env` file in the working directory are visible as environment variables.
pub fn libs_config<T>(config_path: &str, prefix: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Debug + Default + PartialEq + Eq,
{
    dotenv().ok();

    let settings = Config::builder()
        .add_source(File::with_name(config_path))
        .add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::{env, fs, path::PathBuf};

    #[derive(Deserialize, Debug, Default, PartialEq, Eq)]
    struct Apps {
        host: String,
        port: u16,
    }

    #[derive(Deserialize, Debug, Default, PartialEq, Eq)]
    struct TestConfig {
        apps: Apps,
    }

    fn write_config(name: &str, body: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn reads_file_values() {
        let path = write_config("config_libs_file", "[apps]\nhost = \"127.0.0.1\"\nport = 5000\n");

        let config: TestConfig = libs_config(path.to_str().unwrap(), "CFGFILE").unwrap();

        assert_eq!(config.apps.host, "127.0.0.1");
        assert_eq!(config.apps.port, 5000);
        fs::remove_file(path).ok();
    }

    #[test]
    fn environment_overrides_file() {
        let path = write_config("config_libs_env", "[apps]\nhost = \"127.0.0.1\"\nport = 5000\n");
        env::set_var("CFGENV_APPS__PORT", "8081");

        let config: TestConfig = libs_config(path.to_str().unwrap(), "CFGENV").unwrap();

        assert_eq!(config.apps.host, "127.0.0.1");
        assert_eq!(config.apps.port, 8081);
        env::remove_var("CFGENV_APPS__PORT");
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let result: Result<TestConfig, ConfigError> =
            libs_config("/nonexistent/post_services.toml", "CFGMISSING");

        assert!(result.is_err());
    }
}
