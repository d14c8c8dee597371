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

    /// Base URL of the remote prediction service
    #[arg(long, env = "PREDICT_BASE_URL")]
    pub predict_base_url: Option<String>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub predict: PredictConfig,
    pub resilience: ResilienceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictConfig {
    /// Base URL of the remote prediction service, without trailing slash.
    pub base_url: String,
    /// Outbound request timeout in seconds. Unset means no timeout: a
    /// request waits as long as the service takes.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub timeout_disabled: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Layered load: defaults < config file < `OMEGA_` env vars < CLI flags.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("predict.base_url", "http://localhost:5000")?
            .set_default("resilience.timeout_disabled", false)?;

        // Config file: explicit path (flag or CONFIG_FILE), else ./config.yaml
        if let Some(path) = cli.config.as_deref() {
            builder = builder.add_source(File::new(path, FileFormat::Yaml));
        } else {
            builder = builder.add_source(File::new("config.yaml", FileFormat::Yaml).required(false));
        }

        // Environment variables prefixed with OMEGA_, e.g. OMEGA_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("OMEGA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Clap already resolves PORT / PREDICT_BASE_URL / TIMEOUT_DISABLED env
        // vars, so applying CLI values last covers both flags and those envs.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = cli.predict_base_url {
            builder = builder.set_override("predict.base_url", url)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
