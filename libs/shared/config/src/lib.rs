use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

/// Which implementation backs every entity service. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataBackend {
    /// Collections persisted through the local record store.
    #[default]
    Local,
    /// Rows read and written through the hosted Supabase REST API.
    Supabase,
}

impl FromStr for DataBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "local" | "mock" => Ok(DataBackend::Local),
            "supabase" | "remote" => Ok(DataBackend::Supabase),
            other => Err(format!(
                "Invalid data backend: '{}'. Must be one of: local, supabase",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub data_backend: DataBackend,
    /// Directory holding one JSON file per collection. `None` keeps
    /// collections in memory for the lifetime of the process.
    pub storage_dir: Option<PathBuf>,
    pub simulated_latency: bool,
    pub bind_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            data_backend: DataBackend::Local,
            storage_dir: None,
            simulated_latency: false,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_anon_key: env::var("SUPABASE_ANON_PUBLIC_KEY")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_ANON_PUBLIC_KEY not set, using empty value");
                    String::new()
                }),
            data_backend: match env::var("DATA_BACKEND") {
                Ok(raw) => raw.parse().unwrap_or_else(|e: String| {
                    warn!("{}, using local backend", e);
                    DataBackend::Local
                }),
                Err(_) => DataBackend::Local,
            },
            storage_dir: env::var("CLINIC_STORAGE_DIR").ok().map(PathBuf::from),
            simulated_latency: env::var("CLINIC_SIMULATED_LATENCY")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
            bind_addr: match env::var("API_BIND_ADDR") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("API_BIND_ADDR '{}' is not a socket address, using default", raw);
                    defaults.bind_addr
                }),
                Err(_) => defaults.bind_addr,
            },
        };

        if config.data_backend == DataBackend::Supabase && !config.is_configured() {
            warn!("Supabase backend selected but SUPABASE_URL or SUPABASE_ANON_PUBLIC_KEY is missing");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }
}
