use std::net::SocketAddr;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            db_path: PathBuf::from("faststatus.redb"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.db_path, PathBuf::from("faststatus.redb"));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let c = ServerConfig {
            bind_addr: "0.0.0.0:9000".parse().unwrap(),
            db_path: PathBuf::from("/var/lib/faststatus/resources.redb"),
        };
        let json = serde_json::to_string(&c).unwrap();
        let decoded: ServerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.bind_addr, c.bind_addr);
        assert_eq!(decoded.db_path, c.db_path);
    }
}
