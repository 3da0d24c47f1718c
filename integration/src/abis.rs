//! Solidity ABI definitions for the contracts used in integration tests

use ethers::prelude::abigen;

abigen!(
    MockErc20Contract,
    r#"[
        function name() external view returns (string)
        function symbol() external view returns (string)
        function balanceOf(address account) external view returns (uint256)
        function transfer(address to, uint256 value) external returns (bool)
    ]"#
);

abigen!(
    CollectionStakerContract,
    r#"[
        function createIncentiveETH(address nft, address bondingCurve, uint256 delta, uint256 fee, address[] memory rewardTokens, uint256[] memory rewards, uint256 startTime, uint256 endTime) external
    ]"#
);
