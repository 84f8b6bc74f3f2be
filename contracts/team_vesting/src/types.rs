use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    InvalidConfig = 2,
    InvalidAmount = 3,
    OutOfWindow = 4,
    CapExceeded = 5,
    PreconditionUnmet = 6,
    ArithmeticOverflow = 7,
}

/// Per-beneficiary allocation lifecycle. A `Claimed` slot may be assigned
/// again; only a currently `Assigned` slot blocks reassignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SlotState {
    Unassigned,
    Assigned,
    Claimed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllocationSlot {
    pub state: SlotState,
    pub amount: i128,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    TotalCap,
    UnlockedAt,
    SelfDestructAfter,
    AllocatedTokens,
    Killed,
    Slot(Address),
    Beneficiaries,
}
