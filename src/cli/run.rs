//! Run command arguments and option resolution

use clap::Args;

use crate::config::env::parse_bool_literal;
use crate::config::options::{
    keys, DEFAULT_RPC_GRPC_PORT, DEFAULT_RPC_HTTP_PORT, DEFAULT_SQLITE_DB_FILE_PATH,
};
use crate::config::{ConfigError, EnvSnapshot, Options};

// Every field is optional so an explicit flag can be told apart from one
// that was left out and should come from the environment.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// <mainnet | holesky | preprod> (required)
    #[arg(long = "chain", value_name = "CHAIN")]
    pub chain: Option<String>,

    /// Ethereum RPC base URL (required)
    #[arg(long = "ethereum.rpc-base-url", value_name = "URL")]
    pub ethereum_rpc_base_url: Option<String>,

    /// Ethereum WebSocket URL (required)
    #[arg(long = "ethereum.ws-url", value_name = "URL")]
    pub ethereum_ws_url: Option<String>,

    /// Use SQLite in-memory database
    #[arg(
        long = "sqlite.in-memory",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = parse_bool_literal
    )]
    pub sqlite_in_memory: Option<bool>,

    /// SQLite database file path [default: ./sqlite.db]
    #[arg(long = "sqlite.db-file-path", value_name = "PATH")]
    pub sqlite_db_file_path: Option<String>,

    /// gRPC port [default: 7100]
    #[arg(long = "rpc.grpc-port", value_name = "PORT", allow_negative_numbers = true)]
    pub rpc_grpc_port: Option<i64>,

    /// HTTP port [default: 7101]
    #[arg(long = "rpc.http-port", value_name = "PORT", allow_negative_numbers = true)]
    pub rpc_http_port: Option<i64>,

    /// Etherscan API keys, comma-separated (required)
    #[arg(long = "etherscan-api-keys", value_name = "KEYS")]
    pub etherscan_api_keys: Option<String>,

    // Stray positionals are accepted and dropped.
    #[arg(hide = true, value_name = "ARGS")]
    pub ignored: Vec<String>,
}

impl RunArgs {
    /// Merge flags over environment values over static defaults, then validate.
    pub fn resolve(self, env: &EnvSnapshot) -> Result<Options, ConfigError> {
        let options = Options {
            chain: self.chain.unwrap_or_else(|| env.string_or(keys::CHAIN, "")),
            ethereum_rpc_base_url: self
                .ethereum_rpc_base_url
                .unwrap_or_else(|| env.string_or(keys::ETHEREUM_RPC_BASE_URL, "")),
            ethereum_ws_url: self
                .ethereum_ws_url
                .unwrap_or_else(|| env.string_or(keys::ETHEREUM_WS_URL, "")),
            sqlite_in_memory: self
                .sqlite_in_memory
                .unwrap_or_else(|| env.bool_or(keys::SQLITE_IN_MEMORY, false)),
            sqlite_db_file_path: self.sqlite_db_file_path.unwrap_or_else(|| {
                env.string_or(keys::SQLITE_DB_FILE_PATH, DEFAULT_SQLITE_DB_FILE_PATH)
            }),
            rpc_grpc_port: self
                .rpc_grpc_port
                .unwrap_or_else(|| env.parse_or(keys::RPC_GRPC_PORT, DEFAULT_RPC_GRPC_PORT)),
            rpc_http_port: self
                .rpc_http_port
                .unwrap_or_else(|| env.parse_or(keys::RPC_HTTP_PORT, DEFAULT_RPC_HTTP_PORT)),
            etherscan_api_keys: self
                .etherscan_api_keys
                .unwrap_or_else(|| env.string_or(keys::ETHERSCAN_API_KEYS, "")),
        };

        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_take_everything_from_env() {
        let env: EnvSnapshot = [
            ("CHAIN", "holesky"),
            ("ETHEREUM_RPC_BASE_URL", "http://env-rpc:8545"),
            ("ETHEREUM_WS_URL", "ws://env-ws:8546"),
            ("SQLITE_IN_MEMORY", "1"),
            ("SQLITE_DB_FILE_PATH", "/data/sidecar.db"),
            ("RPC_GRPC_PORT", "8100"),
            ("RPC_HTTP_PORT", "8101"),
            ("ETHERSCAN_API_KEYS", "a,b"),
        ]
        .into_iter()
        .collect();

        let opts = RunArgs::default().resolve(&env).expect("resolve");
        assert_eq!(opts.chain, "holesky");
        assert!(opts.sqlite_in_memory);
        assert_eq!(opts.sqlite_db_file_path, "/data/sidecar.db");
        assert_eq!(opts.rpc_grpc_port, 8100);
        assert_eq!(opts.rpc_http_port, 8101);
        assert_eq!(opts.etherscan_api_keys, "a,b");
    }

    #[test]
    fn env_ports_are_not_range_checked() {
        let env: EnvSnapshot = [
            ("CHAIN", "mainnet"),
            ("ETHEREUM_RPC_BASE_URL", "http://env-rpc:8545"),
            ("ETHEREUM_WS_URL", "ws://env-ws:8546"),
            ("ETHERSCAN_API_KEYS", "k"),
            ("RPC_GRPC_PORT", "70000"),
            ("RPC_HTTP_PORT", "-1"),
        ]
        .into_iter()
        .collect();

        let opts = RunArgs::default().resolve(&env).expect("resolve");
        assert_eq!(opts.rpc_grpc_port, 70000);
        assert_eq!(opts.rpc_http_port, -1);
    }

    #[test]
    fn empty_flag_value_is_not_replaced_by_env() {
        let env: EnvSnapshot = [
            ("CHAIN", "mainnet"),
            ("ETHEREUM_RPC_BASE_URL", "http://env-rpc:8545"),
            ("ETHEREUM_WS_URL", "ws://env-ws:8546"),
            ("ETHERSCAN_API_KEYS", "k"),
        ]
        .into_iter()
        .collect();
        let args = RunArgs { chain: Some(String::new()), ..RunArgs::default() };

        let err = args.resolve(&env).unwrap_err();
        assert_eq!(err, ConfigError::MissingRequired { flag: "--chain" });
    }
}
