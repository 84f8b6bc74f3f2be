use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    InvalidConfig = 2,
    InvalidAmount = 3,
    OutOfWindow = 4,
    NotAllowed = 5,
    PreconditionUnmet = 6,
    ArithmeticOverflow = 7,
    AlreadyFinalized = 8,
}

/// Immutable sale parameters, fixed at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    /// Sale token contract; this contract is its sole mint authority.
    pub token: Address,
    /// Payment token contributions are collected in.
    pub payment_token: Address,
    /// Allow-list contract gating participation.
    pub allowlist: Address,
    /// Treasury wallet receiving accepted payments and company shares.
    pub wallet: Address,
    /// Wallet receiving the bounty/reward share at finalization.
    pub reward_wallet: Address,
    pub start_time: u64,
    pub end_time: u64,
    /// Tokens minted per unit of payment.
    pub rate: i128,
    /// Cap on tokens issued through purchases, strictly below the supply cap.
    pub total_tokens_for_sale: i128,
    /// Final supply ceiling including all stakeholder shares.
    pub total_supply_cap: i128,
    /// Minted to the team allocation address at finalization.
    pub vested_team_share: i128,
    /// Minted to the treasury wallet at finalization.
    pub team_company_share: i128,
    /// Minted to the reward wallet at finalization.
    pub bounty_share: i128,
}

/// The single pending-refund slot for a cap-truncated purchase. A later
/// truncation overwrites it; only the most recent truncated buyer is
/// tracked.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RemainderRecord {
    pub purchaser: Address,
    pub amount: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    Finalized,
    TeamAllocation,
    Remainder,
    Contribution(Address),
}
