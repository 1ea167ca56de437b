/// HTTP listener configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub port: u16,
}

impl HttpConfig {
    pub const DEFAULT_PORT: u16 = 3000;

    pub fn from_env() -> Self {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    /// An absent or unparseable PORT falls back to the default.
    fn from_port_var(value: Option<&str>) -> Self {
        let port = value
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);
        Self { port }
    }
}
