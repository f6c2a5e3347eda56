//! Solidity signatures of the methods called after deployment

use alloy::sol;

sol! {
    /// `Treasury.setGov`, points the treasury at its governance contract
    function setGov(address gov) external;

    /// `Ownable.transferOwnership`, shared by the treasury and the pools
    function transferOwnership(address newOwner) external;

    /// `BoostRewardsV2.notifyRewardAmount`, funds the pool's reward window
    function notifyRewardAmount(uint256 reward) external;
}
