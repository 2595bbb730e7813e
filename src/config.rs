use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// Server configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug, Clone)]
#[command(name = "condo_search")]
#[command(version, about = "Keyword and price-range search over a fixed condo catalog")]
pub struct ServerConfig {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Upper bound on worker threads serving requests
    #[arg(long, env = "MAX_WORKERS", default_value_t = 8)]
    pub max_workers: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| format!("Invalid host '{}': {e}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
