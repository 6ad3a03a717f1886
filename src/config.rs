//! Console service configuration

/// Configuration for the console service.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// TCP bind address for remote sessions
    pub bind_addr: String,
    /// Serve an interactive session on stdin/stdout as well
    pub stdio: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5760".into(),
            stdio: true,
        }
    }
}

impl ConsoleConfig {
    /// Build the config from the environment.
    ///
    /// The first CLI argument overrides `MINICON_BIND`, which overrides the
    /// default bind address; setting `MINICON_NO_STDIO` disables the stdio
    /// session.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(bind) = std::env::var("MINICON_BIND") {
            config.bind_addr = bind;
        }
        if let Some(bind) = std::env::args().nth(1) {
            config.bind_addr = bind;
        }
        if std::env::var_os("MINICON_NO_STDIO").is_some() {
            config.stdio = false;
        }
        config
    }
}
