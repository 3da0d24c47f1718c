//! Integration checks for the OTCSwap deployment. These assume that a devnet is
//! already running locally and that the deploy scripts have been run against it.

use clap::Parser;
use cli::{Cli, Tests};
use ethers::providers::Middleware;
use eyre::{eyre, Result};
use scripts::{
    constants::{LINEAR_CURVE_CONTRACT_KEY, MOCK_ERC721_CONTRACT_KEY, TEST_TOKEN2_CONTRACT_KEY},
    deployments::read_address,
    utils::setup_client,
};
use tests::{test_create_vault, test_mocks, test_otc_swap, test_transfer_token};
use utils::get_test_contract_address;

use crate::abis::{CollectionStakerContract, MockErc20Contract};

mod abis;
mod cli;
mod constants;
mod tests;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        test,
        deployments_file,
        priv_key,
        rpc_url,
    } = Cli::parse();

    let client = setup_client(&priv_key, &rpc_url).await?;
    let contract_address = get_test_contract_address(test, &deployments_file)?;

    match test {
        Tests::Mocks => {
            let token1 = MockErc20Contract::new(contract_address, client.clone());
            let token2_address = read_address(&deployments_file, TEST_TOKEN2_CONTRACT_KEY)?;
            let token2 = MockErc20Contract::new(token2_address, client);

            test_mocks(token1, token2).await?;
        }
        Tests::OtcSwap => {
            test_otc_swap(client.as_ref(), contract_address).await?;
        }
        Tests::CreateVault => {
            let staker = CollectionStakerContract::new(contract_address, client);
            let collection_address = read_address(&deployments_file, MOCK_ERC721_CONTRACT_KEY)?;
            let curve_address = read_address(&deployments_file, LINEAR_CURVE_CONTRACT_KEY)?;

            test_create_vault(staker, collection_address, curve_address).await?;
        }
        Tests::TransferToken => {
            let sender = client
                .default_sender()
                .ok_or_else(|| eyre!("client does not have a sender attached"))?;
            let token = MockErc20Contract::new(contract_address, client);

            test_transfer_token(token, sender).await?;
        }
    }

    Ok(())
}
