#![no_std]

mod contract;
mod storage;
mod types;


pub use contract::{CrowdsaleContract, CrowdsaleContractClient};
pub use types::{Error, RemainderRecord, SaleConfig};
