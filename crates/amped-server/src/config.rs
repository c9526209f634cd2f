use amped_core::submission::InputLimits;

pub const DEFAULT_PORT: u16 = 5000;

/// Largest accepted request body.
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub max_body_bytes: usize,
    pub limits: InputLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            limits: InputLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment. Only `PORT` is
    /// externally configurable.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| eyre::eyre!("invalid PORT {raw:?}: {e}"))?,
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            ..Self::default()
        })
    }
}
