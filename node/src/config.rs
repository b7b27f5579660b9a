use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    pub beacon_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            beacon_base_url: "https://beacon.nist.gov".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl NodeConfig {
    /// Defaults overridden by VERIDRAW_BIND / VERIDRAW_BEACON_URL.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(bind) = std::env::var("VERIDRAW_BIND") {
            if let Ok(addr) = bind.parse() {
                cfg.bind_addr = addr;
            } else {
                tracing::warn!("Ignoring unparseable VERIDRAW_BIND={:?}", bind);
            }
        }
        if let Ok(url) = std::env::var("VERIDRAW_BEACON_URL") {
            cfg.beacon_base_url = url;
        }
        cfg
    }
}
