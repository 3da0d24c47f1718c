//! Definitions of CLI arguments and commands for the deploy & operations scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::{create_vault, deploy, transfer_token},
    constants::{DEFAULT_DEPLOYMENTS_PATH, DEFAULT_RPC_URL, PROD_NETWORK_TAG},
    errors::ScriptError,
};

/// Deploy the OTCSwap contracts & run post-deployment operations
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Path to the per-network deployment records file
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// Tags describing the target network (e.g. `prod`)
    #[arg(short, long = "network-tag")]
    pub network_tags: Vec<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The runtime configuration assembled from the CLI,
/// passed explicitly into every command
#[derive(Clone)]
pub struct ScriptConfig {
    /// The network RPC URL
    pub rpc_url: String,
    /// The path of the deployment records file for the target network
    pub deployments_path: String,
    /// The tags describing the target network
    pub network_tags: Vec<String>,
}

impl ScriptConfig {
    /// Whether the target network is tagged as a production network
    pub fn is_prod(&self) -> bool {
        self.network_tags.iter().any(|tag| tag == PROD_NETWORK_TAG)
    }
}

/// The scripts runnable through the CLI
#[derive(Subcommand)]
pub enum Command {
    /// Run the deployment descriptors
    Deploy(DeployArgs),
    /// Create an NFT collection incentive vault over the staker contract
    CreateVault,
    /// Transfer mock token balance to the zero address
    TransferToken,
}

/// Run the deployment descriptors against the configured network
#[derive(Args)]
pub struct DeployArgs {
    /// Only run descriptors matching these tags (dependencies are always included)
    #[arg(short, long)]
    pub tags: Option<Vec<String>>,
}

impl Command {
    /// Dispatches the selected command
    pub async fn run(
        self,
        client: Arc<impl Middleware>,
        config: &ScriptConfig,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, client, config).await,
            Command::CreateVault => create_vault(client, config).await,
            Command::TransferToken => transfer_token(client, config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Tests for the CLI definitions

    use clap::CommandFactory;

    use super::{Cli, ScriptConfig};

    /// The clap definitions are internally consistent
    #[test]
    fn test_cli__definition_is_valid() {
        Cli::command().debug_assert();
    }

    /// A network is prod exactly when its tags include `prod`
    #[test]
    fn test_config__prod_detection() {
        let mut config = ScriptConfig {
            rpc_url: "http://localhost:8545".to_string(),
            deployments_path: "deployments.json".to_string(),
            network_tags: vec!["testnet".to_string()],
        };
        assert!(!config.is_prod());

        config.network_tags.push("prod".to_string());
        assert!(config.is_prod());
    }
}
