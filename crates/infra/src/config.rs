use tracing::warn;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: u16,
    /// Maximum number of notifications returned by a single feed request.
    /// The widget only keeps a handful of them anyway, so there is no
    /// point in shipping the whole history of a `Site`.
    pub feed_limit: usize,
}

impl Config {
    pub fn new() -> Self {
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };
        Self {
            port,
            feed_limit: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
