//! Integration tests for the deployed contracts

use ethers::{abi::Address, providers::Middleware, types::U256};
use eyre::{eyre, Result};
use scripts::{
    constants::{VAULT_DURATION_SECS, VAULT_START_DELAY_SECS},
    utils::current_timestamp,
};

use crate::{
    abis::{CollectionStakerContract, MockErc20Contract},
    constants::TRANSFER_AMOUNT,
};

/// Checks that the two mock tokens were deployed under distinct aliases
/// with the expected names & symbols
pub(crate) async fn test_mocks(
    token1: MockErc20Contract<impl Middleware + 'static>,
    token2: MockErc20Contract<impl Middleware + 'static>,
) -> Result<()> {
    assert_ne!(
        token1.address(),
        token2.address(),
        "Mock tokens share a deployment"
    );

    assert_eq!(token1.name().call().await?, "TestToken1");
    assert_eq!(token1.symbol().call().await?, "TT1");
    assert_eq!(token2.name().call().await?, "TestToken2");
    assert_eq!(token2.symbol().call().await?, "TT2");

    Ok(())
}

/// Checks that the OTCSwap contract has code at its recorded address
pub(crate) async fn test_otc_swap(
    client: &impl Middleware,
    otc_swap_address: Address,
) -> Result<()> {
    let code = client
        .get_code(otc_swap_address, None /* block */)
        .await
        .map_err(|e| eyre!("fetching OTCSwap code: {}", e))?;
    assert!(!code.is_empty(), "No code at the OTCSwap address");

    Ok(())
}

/// Submits a single vault-creation transaction over a future
/// `[start, start + 3600)` window and checks that it confirms
pub(crate) async fn test_create_vault(
    staker: CollectionStakerContract<impl Middleware + 'static>,
    collection_address: Address,
    curve_address: Address,
) -> Result<()> {
    let start_time = current_timestamp()? + VAULT_START_DELAY_SECS;
    let end_time = start_time + VAULT_DURATION_SECS;

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
    let receipt = call
        .send()
        .await?
        .await?
        .ok_or_else(|| eyre!("vault creation transaction dropped"))?;

    assert_eq!(
        receipt.status,
        Some(1u64.into()),
        "Vault creation transaction reverted"
    );

    Ok(())
}

/// Transfers tokens to the zero address and checks the balance movement
pub(crate) async fn test_transfer_token(
    token: MockErc20Contract<impl Middleware + 'static>,
    sender: Address,
) -> Result<()> {
    let amount = U256::from(TRANSFER_AMOUNT);
    let sender_balance_before = token.balance_of(sender).call().await?;
    let zero_balance_before = token.balance_of(Address::zero()).call().await?;

    let receipt = token
        .transfer(Address::zero(), amount)
        .send()
        .await?
        .await?
        .ok_or_else(|| eyre!("transfer transaction dropped"))?;
    assert_eq!(receipt.status, Some(1u64.into()), "Transfer reverted");

    assert_eq!(
        token.balance_of(sender).call().await?,
        sender_balance_before - amount,
        "Sender balance did not decrease by the transfer amount"
    );
    assert_eq!(
        token.balance_of(Address::zero()).call().await?,
        zero_balance_before + amount,
        "Zero address balance did not increase by the transfer amount"
    );

    Ok(())
}
