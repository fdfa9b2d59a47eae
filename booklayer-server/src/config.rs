//! Server settings.
//!
//! Settings are layered, lowest precedence first: built-in defaults, an optional
//! TOML file, `BOOKLAYER_*` environment variables (nested keys separated by
//! `__`, e.g. `BOOKLAYER_MONGODB__URI`), then command-line overrides.

use std::{path::Path, time::Duration};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use booklayer::mongodb::MongoDbBookStoreBuilder;

/// Which store backs the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
pub enum Backend {
    /// `/book` routes over the in-memory store.
    #[serde(rename = "memory")]
    #[value(name = "memory")]
    Memory,
    /// `/books` routes over MongoDB.
    #[serde(rename = "mongodb")]
    #[value(name = "mongodb")]
    MongoDb,
}

impl Backend {
    fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::MongoDb => "mongodb",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: Backend,
    pub memory: MemorySettings,
    pub mongodb: MongoDbSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemorySettings {
    /// Seed the sample record on startup.
    pub seed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoDbSettings {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout_secs: u64,
    pub operation_timeout_secs: u64,
    pub disconnect_timeout_secs: u64,
}

impl MongoDbSettings {
    /// A store builder carrying these settings.
    pub fn builder(&self) -> MongoDbBookStoreBuilder {
        MongoDbBookStoreBuilder::new(&self.uri)
            .database(&self.database)
            .collection(&self.collection)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .operation_timeout(Duration::from_secs(self.operation_timeout_secs))
            .disconnect_timeout(Duration::from_secs(self.disconnect_timeout_secs))
    }
}

/// Values given on the command line. They win over every other source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub backend: Option<Backend>,
    pub bind: Option<String>,
}

impl Settings {
    /// Loads settings from `path`, or from `booklayer.toml` in the working
    /// directory when it exists.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("booklayer").required(false),
        };

        Config::builder()
            .set_default("server.bind", "0.0.0.0:8080")?
            .set_default("backend", Backend::Memory.as_str())?
            .set_default("memory.seed", true)?
            .set_default("mongodb.uri", "mongodb://localhost:27017")?
            .set_default("mongodb.database", "api_book")?
            .set_default("mongodb.collection", "books")?
            .set_default("mongodb.connect_timeout_secs", 10)?
            .set_default("mongodb.operation_timeout_secs", 5)?
            .set_default("mongodb.disconnect_timeout_secs", 5)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("BOOKLAYER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("backend", overrides.backend.map(|b| b.as_str()))?
            .set_override_option("server.bind", overrides.bind)?
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_select_seeded_memory_backend() {
        let settings = Settings::load(None, Overrides::default()).unwrap();

        assert_eq!(settings.backend, Backend::Memory);
        assert_eq!(settings.server.bind, "0.0.0.0:8080");
        assert!(settings.memory.seed);
        assert_eq!(settings.mongodb.database, "api_book");
        assert_eq!(settings.mongodb.collection, "books");
        assert_eq!(settings.mongodb.connect_timeout_secs, 10);
        assert_eq!(settings.mongodb.operation_timeout_secs, 5);
        assert_eq!(settings.mongodb.disconnect_timeout_secs, 5);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
backend = "mongodb"

[server]
bind = "127.0.0.1:9000"

[mongodb]
uri = "mongodb://db:27017"
operation_timeout_secs = 2
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path()), Overrides::default()).unwrap();

        assert_eq!(settings.backend, Backend::MongoDb);
        assert_eq!(settings.server.bind, "127.0.0.1:9000");
        assert_eq!(settings.mongodb.uri, "mongodb://db:27017");
        assert_eq!(settings.mongodb.operation_timeout_secs, 2);
        assert_eq!(settings.mongodb.connect_timeout_secs, 10);
    }

    #[test]
    fn overrides_win_over_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "backend = \"mongodb\"").unwrap();

        let settings = Settings::load(
            Some(file.path()),
            Overrides {
                backend: Some(Backend::Memory),
                bind: Some("127.0.0.1:0".to_string()),
            },
        )
        .unwrap();

        assert_eq!(settings.backend, Backend::Memory);
        assert_eq!(settings.server.bind, "127.0.0.1:0");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/booklayer.toml")), Overrides::default());

        assert!(result.is_err());
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "backend = \"postgres\"").unwrap();

        assert!(Settings::load(Some(file.path()), Overrides::default()).is_err());
    }
}
