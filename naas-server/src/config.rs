/// How new tenant and namespace ids are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Uuid,
    Sequential,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub http_port: u16,
    /// Actix worker threads; `None` keeps the actix default (one per core)
    pub workers: Option<usize>,
    pub id_strategy: IdStrategy,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            http_port: 8082,
            workers: None,
            id_strategy: IdStrategy::Uuid,
            log_format: LogFormat::Json,
        }
    }
}

impl ServerConfig {
    /// Load from environment variables. See [`ServerConfig::from_lookup`].
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparseable values keep
    /// their defaults.
    ///
    /// Rejected values come back as warning lines; the caller logs them once
    /// the subscriber is installed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = ServerConfig::default();
        let mut warnings = Vec::new();
        let mut reject = |key: &str, value: &str| {
            warnings.push(format!("ignoring invalid {}={:?}, keeping default", key, value));
        };

        if let Some(host) = lookup("NAAS_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("NAAS_HTTP_PORT") {
            match port.parse() {
                Ok(port) => config.http_port = port,
                Err(_) => reject("NAAS_HTTP_PORT", &port),
            }
        }
        if let Some(workers) = lookup("NAAS_WORKERS") {
            match workers.parse::<usize>() {
                Ok(n) if n > 0 => config.workers = Some(n),
                _ => reject("NAAS_WORKERS", &workers),
            }
        }
        if let Some(strategy) = lookup("NAAS_ID_STRATEGY") {
            match strategy.to_lowercase().as_str() {
                "uuid" => config.id_strategy = IdStrategy::Uuid,
                "sequential" => config.id_strategy = IdStrategy::Sequential,
                _ => reject("NAAS_ID_STRATEGY", &strategy),
            }
        }
        if let Some(format) = lookup("NAAS_LOG_FORMAT") {
            match format.to_lowercase().as_str() {
                "json" => config.log_format = LogFormat::Json,
                "pretty" => config.log_format = LogFormat::Pretty,
                _ => reject("NAAS_LOG_FORMAT", &format),
            }
        }

        (config, warnings)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}
