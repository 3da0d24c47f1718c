//! Implementations of the deploy & operations commands

use std::sync::Arc;

use ethers::{
    abi::{Address, Contract},
    contract::ContractFactory,
    providers::Middleware,
    types::{Bytes, U256},
    utils::hex::FromHex,
};
use tracing::log::info;

use crate::{
    cli::{DeployArgs, ScriptConfig},
    constants::{
        COLLECTION_STAKER_CONTRACT_KEY, LINEAR_CURVE_CONTRACT_KEY, MOCK_ERC721_CONTRACT_KEY,
        NUM_DEPLOY_CONFIRMATIONS, TOKEN_CONTRACT_KEY, TRANSFER_AMOUNT, VAULT_DURATION_SECS,
        VAULT_START_DELAY_SECS,
    },
    deployments,
    descriptors::{plan, registry, ContractDeployment},
    errors::ScriptError,
    solidity::{CollectionStakerContract, TokenContract},
    utils::current_timestamp,
};

/// Runs the deployment descriptors selected by the given tags
/// in dependency order against the configured network
pub async fn deploy(
    args: DeployArgs,
    client: Arc<impl Middleware>,
    config: &ScriptConfig,
) -> Result<(), ScriptError> {
    let registry = registry();
    let order = plan(&registry, args.tags.as_deref())?;

    for idx in order {
        let descriptor = &registry[idx];
        if descriptor.skip_on_prod && config.is_prod() {
            info!(
                "Skipping `{}` descriptor on prod-tagged network",
                descriptor.name
            );
            continue;
        }

        info!("Running `{}` descriptor", descriptor.name);
        for deployment in (descriptor.deployments)() {
            deploy_contract(deployment, client.clone(), config).await?;
        }
    }

    Ok(())
}

/// Deploys a single aliased contract, reusing an existing
/// deployment record for the alias if one exists
async fn deploy_contract(
    deployment: ContractDeployment,
    client: Arc<impl Middleware>,
    config: &ScriptConfig,
) -> Result<(), ScriptError> {
    if deployments::contains(&config.deployments_path, deployment.alias)? {
        let address = deployments::read_address(&config.deployments_path, deployment.alias)?;
        info!("Reusing `{}` deployment at {:#x}", deployment.alias, address);
        return Ok(());
    }

    let abi: Contract = serde_json::from_str(deployment.abi)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
    let bytecode = Bytes::from_hex(deployment.bytecode)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let factory = ContractFactory::new(abi, bytecode, client);
    let contract = factory
        .deploy_tokens(deployment.constructor_args)
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let address = contract.address();
    deployments::write_address(&config.deployments_path, deployment.alias, address)?;
    info!("Deployed `{}` at {:#x}", deployment.alias, address);

    Ok(())
}

/// Creates an ETH incentive vault over the staked collection,
/// opening one minute from now and running for an hour
pub async fn create_vault(
    client: Arc<impl Middleware>,
    config: &ScriptConfig,
) -> Result<(), ScriptError> {
    let staker_address =
        deployments::read_address(&config.deployments_path, COLLECTION_STAKER_CONTRACT_KEY)?;
    let collection_address =
        deployments::read_address(&config.deployments_path, MOCK_ERC721_CONTRACT_KEY)?;
    let curve_address =
        deployments::read_address(&config.deployments_path, LINEAR_CURVE_CONTRACT_KEY)?;

    let staker = CollectionStakerContract::new(staker_address, client);

    let (start_time, end_time) = vault_window(current_timestamp()?);
    let call = staker.create_incentive_eth(
        collection_address,
        curve_address,
        U256::zero(),
        U256::zero(),
        Vec::new(),
        Vec::new(),
        U256::from(start_time),
        U256::from(end_time),
    );

    let pending_tx = call
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Created new vault at {:#x}", *pending_tx);

    pending_tx
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(())
}

/// Transfers the mock token amount to the zero address
pub async fn transfer_token(
    client: Arc<impl Middleware>,
    config: &ScriptConfig,
) -> Result<(), ScriptError> {
    let token_address = deployments::read_address(&config.deployments_path, TOKEN_CONTRACT_KEY)?;
    let token = TokenContract::new(token_address, client);

    let call = token.transfer(Address::zero(), U256::from(TRANSFER_AMOUNT));
    let pending_tx = call
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Transferred tokens at {:#x}", *pending_tx);

    pending_tx
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(())
}

/// Computes the `[start, end)` incentive window for a vault created at `now_secs`
fn vault_window(now_secs: u64) -> (u64, u64) {
    let start_time = now_secs + VAULT_START_DELAY_SECS;
    (start_time, start_time + VAULT_DURATION_SECS)
}
