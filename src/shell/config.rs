pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 4001;

/// Where the subgraph listens. Fixed at `0.0.0.0:4001` for the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn ready_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
