//! Constants used in the integration tests

/// The default hostport that the Hardhat devnet node runs on
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://localhost:8545";

/// The default private key that the Hardhat devnet is seeded with
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The amount of tokens sent to the zero address when testing transfers
pub(crate) const TRANSFER_AMOUNT: u64 = 100;
