//! Resolved sidecar options

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_SQLITE_DB_FILE_PATH: &str = "./sqlite.db";
pub const DEFAULT_RPC_GRPC_PORT: i64 = 7100;
pub const DEFAULT_RPC_HTTP_PORT: i64 = 7101;

/// Environment variable names, one per option.
pub mod keys {
    pub const CHAIN: &str = "CHAIN";
    pub const ETHEREUM_RPC_BASE_URL: &str = "ETHEREUM_RPC_BASE_URL";
    pub const ETHEREUM_WS_URL: &str = "ETHEREUM_WS_URL";
    pub const SQLITE_IN_MEMORY: &str = "SQLITE_IN_MEMORY";
    pub const SQLITE_DB_FILE_PATH: &str = "SQLITE_DB_FILE_PATH";
    pub const RPC_GRPC_PORT: &str = "RPC_GRPC_PORT";
    pub const RPC_HTTP_PORT: &str = "RPC_HTTP_PORT";
    pub const ETHERSCAN_API_KEYS: &str = "ETHERSCAN_API_KEYS";
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{flag} is required")]
    MissingRequired { flag: &'static str },
}

/// Configuration values for the sidecar service.
///
/// Built once per invocation by [`crate::cli::parse_args`]; nothing in this
/// crate mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Options {
    /// Chain identifier (`mainnet`, `holesky`, `preprod`, ...). Not validated
    /// against a fixed list.
    pub chain: String,
    /// Ethereum JSON-RPC endpoint.
    pub ethereum_rpc_base_url: String,
    /// Ethereum WebSocket endpoint.
    pub ethereum_ws_url: String,
    /// Keep the SQLite database in memory instead of on disk.
    pub sqlite_in_memory: bool,
    /// SQLite database file, used when not in memory.
    pub sqlite_db_file_path: String,
    /// gRPC listen port. Any integer is accepted; range is not checked here.
    pub rpc_grpc_port: i64,
    /// HTTP listen port. Any integer is accepted; range is not checked here.
    pub rpc_http_port: i64,
    /// Comma-separated Etherscan API keys, kept verbatim.
    pub etherscan_api_keys: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            chain: String::new(),
            ethereum_rpc_base_url: String::new(),
            ethereum_ws_url: String::new(),
            sqlite_in_memory: false,
            sqlite_db_file_path: DEFAULT_SQLITE_DB_FILE_PATH.to_string(),
            rpc_grpc_port: DEFAULT_RPC_GRPC_PORT,
            rpc_http_port: DEFAULT_RPC_HTTP_PORT,
            etherscan_api_keys: String::new(),
        }
    }
}

impl Options {
    /// Check required fields in a fixed order and report the first empty one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("--chain", &self.chain),
            ("--ethereum.rpc-base-url", &self.ethereum_rpc_base_url),
            ("--ethereum.ws-url", &self.ethereum_ws_url),
            ("--etherscan-api-keys", &self.etherscan_api_keys),
        ];

        match required.into_iter().find(|(_, value)| value.is_empty()) {
            Some((flag, _)) => Err(ConfigError::MissingRequired { flag }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Options {
        Options {
            chain: "mainnet".to_string(),
            ethereum_rpc_base_url: "http://localhost:8545".to_string(),
            ethereum_ws_url: "ws://localhost:8546".to_string(),
            etherscan_api_keys: "k".to_string(),
            ..Options::default()
        }
    }

    #[test]
    fn defaults_match_static_values() {
        let opts = Options::default();
        assert!(!opts.sqlite_in_memory);
        assert_eq!(opts.sqlite_db_file_path, "./sqlite.db");
        assert_eq!(opts.rpc_grpc_port, 7100);
        assert_eq!(opts.rpc_http_port, 7101);
        assert!(opts.chain.is_empty());
    }

    #[test]
    fn complete_options_validate() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn validation_reports_first_missing_field() {
        let err = Options::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "--chain is required");

        let opts = Options { ethereum_ws_url: String::new(), ..complete() };
        assert_eq!(
            opts.validate(),
            Err(ConfigError::MissingRequired { flag: "--ethereum.ws-url" })
        );

        // RPC URL is checked before the WS URL and API keys.
        let opts = Options {
            ethereum_rpc_base_url: String::new(),
            ethereum_ws_url: String::new(),
            etherscan_api_keys: String::new(),
            ..complete()
        };
        assert_eq!(opts.validate().unwrap_err().to_string(), "--ethereum.rpc-base-url is required");

        let opts = Options { etherscan_api_keys: String::new(), ..complete() };
        assert_eq!(opts.validate().unwrap_err().to_string(), "--etherscan-api-keys is required");
    }

    #[test]
    fn same_port_for_grpc_and_http_is_accepted() {
        let opts = Options { rpc_grpc_port: 9000, rpc_http_port: 9000, ..complete() };
        assert!(opts.validate().is_ok());
    }
}
