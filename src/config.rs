use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Host to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Assistant backend /chat endpoint URL
    #[arg(long, env = "BACKEND_CHAT_URL")]
    pub backend_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Full URL of the assistant backend's /chat endpoint.
    pub chat_url: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Load configuration with explicit CLI arguments.
    ///
    /// Priority: CLI flag > CLI env var > `SHOP_`-prefixed env var > config
    /// file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("backend.chat_url", "http://localhost:8000/chat")?;

        // Config file: explicit path if given, else ./config.yaml if present.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else {
            builder = builder.add_source(File::new("config.yaml", FileFormat::Yaml).required(false));
        }

        // Environment variables, e.g. SHOP_SERVER__PORT=8000.
        builder = builder.add_source(
            Environment::with_prefix("SHOP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI overrides win over everything else.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(url) = cli.backend_url {
            builder = builder.set_override("backend.chat_url", url)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
