#![no_std]

mod contract;
mod storage;
mod types;


pub use contract::{TeamVesting, TeamVestingClient};
pub use types::{AllocationSlot, Error, SlotState};
