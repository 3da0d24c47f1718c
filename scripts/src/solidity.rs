//! Definitions of Solidity functions called during post-deployment operations

use ethers::contract::abigen;

abigen!(
    CollectionStakerContract,
    r#"[
        function createIncentiveETH(address nft, address bondingCurve, uint256 delta, uint256 fee, address[] memory rewardTokens, uint256[] memory rewards, uint256 startTime, uint256 endTime) external
    ]"#
);

abigen!(
    TokenContract,
    r#"[
        function balanceOf(address account) external view returns (uint256)
        function transfer(address to, uint256 value) external returns (bool)
    ]"#
);
