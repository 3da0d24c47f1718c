//! Constants used in the deploy scripts

/// The ABI of the MockERC20 contract
pub const MOCK_ERC20_ABI: &str = include_str!("../artifacts/MockERC20.abi");

/// The deployment bytecode of the MockERC20 contract
pub const MOCK_ERC20_BYTECODE: &str = include_str!("../artifacts/MockERC20.bin");

/// The ABI of the OTCSwap contract
pub const OTC_SWAP_ABI: &str = include_str!("../artifacts/OTCSwap.abi");

/// The deployment bytecode of the OTCSwap contract
pub const OTC_SWAP_BYTECODE: &str = include_str!("../artifacts/OTCSwap.bin");

/// The number of confirmations to wait for on a contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 1;

/// The default RPC URL to deploy against
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default path of the per-network deployment records file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The network tag marking a production network,
/// on which mock deployments are skipped
pub const PROD_NETWORK_TAG: &str = "prod";

/// The tag of the mock token deployment descriptor
pub const MOCKS_TAG: &str = "mocks";

/// The tag of the OTCSwap deployment descriptor
pub const OTC_SWAP_TAG: &str = "otc-swap";

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The first mock token contract key in the `deployments.json` file
pub const TEST_TOKEN1_CONTRACT_KEY: &str = "TestToken1";

/// The second mock token contract key in the `deployments.json` file
pub const TEST_TOKEN2_CONTRACT_KEY: &str = "TestToken2";

/// The OTCSwap contract key in the `deployments.json` file
pub const OTC_SWAP_CONTRACT_KEY: &str = "OTCSwap";

/// The collection staker contract key in the `deployments.json` file
pub const COLLECTION_STAKER_CONTRACT_KEY: &str = "Collectionstaker";

/// The mock ERC721 collection contract key in the `deployments.json` file
pub const MOCK_ERC721_CONTRACT_KEY: &str = "MockERC721";

/// The linear bonding curve contract key in the `deployments.json` file
pub const LINEAR_CURVE_CONTRACT_KEY: &str = "LinearCurve";

/// The token contract key in the `deployments.json` file
pub const TOKEN_CONTRACT_KEY: &str = "Token";

/// The delay in seconds before a newly created incentive vault opens
pub const VAULT_START_DELAY_SECS: u64 = 60;

/// The duration in seconds of a newly created incentive vault's window
pub const VAULT_DURATION_SECS: u64 = 3600;

/// The amount of tokens sent to the zero address by the transfer script
pub const TRANSFER_AMOUNT: u64 = 100;
