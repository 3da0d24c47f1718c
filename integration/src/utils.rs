//! Utilities for running integration tests

use ethers::abi::Address;
use eyre::Result;
use scripts::{
    constants::{
        COLLECTION_STAKER_CONTRACT_KEY, OTC_SWAP_CONTRACT_KEY, TEST_TOKEN1_CONTRACT_KEY,
        TOKEN_CONTRACT_KEY,
    },
    deployments::read_address,
};

use crate::cli::Tests;

/// Resolves the address of the primary contract exercised by the given test
pub(crate) fn get_test_contract_address(test: Tests, deployments_file: &str) -> Result<Address> {
    Ok(match test {
        Tests::Mocks => read_address(deployments_file, TEST_TOKEN1_CONTRACT_KEY)?,
        Tests::OtcSwap => read_address(deployments_file, OTC_SWAP_CONTRACT_KEY)?,
        Tests::CreateVault => read_address(deployments_file, COLLECTION_STAKER_CONTRACT_KEY)?,
        Tests::TransferToken => read_address(deployments_file, TOKEN_CONTRACT_KEY)?,
    })
}
