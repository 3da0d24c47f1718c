//! Definition of the CLI arguments for integration tests

use clap::{Parser, ValueEnum};

use crate::constants::{DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY};

/// CLI tool for running integration checks against a running devnet node.
///
/// Assumes that the deploy scripts have already been run against the devnet.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Test to run
    #[arg(short, long)]
    pub(crate) test: Tests,

    /// Path to file containing contract deployment info
    #[arg(short, long)]
    pub(crate) deployments_file: String,

    /// Devnet private key, defaults to the default Hardhat devnet private key
    #[arg(short, long, default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Devnet RPC URL, defaults to the default Hardhat devnet hostport
    #[arg(short, long, default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}

#[derive(ValueEnum, Clone, Copy)]
pub(crate) enum Tests {
    Mocks,
    OtcSwap,
    CreateVault,
    TransferToken,
}
