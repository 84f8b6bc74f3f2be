use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn get_config(env: &Env) -> SaleConfig {
    env.storage().instance().get(&DataKey::Config).unwrap()
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn set_finalized(env: &Env) {
    env.storage().instance().set(&DataKey::Finalized, &true);
}

pub fn get_team_allocation(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::TeamAllocation)
}

pub fn set_team_allocation(env: &Env, addr: &Address) {
    env.storage().instance().set(&DataKey::TeamAllocation, addr);
}

pub fn get_remainder(env: &Env) -> Option<RemainderRecord> {
    env.storage().instance().get(&DataKey::Remainder)
}

pub fn set_remainder(env: &Env, record: &RemainderRecord) {
    env.storage().instance().set(&DataKey::Remainder, record);
}

pub fn clear_remainder(env: &Env) {
    env.storage().instance().remove(&DataKey::Remainder);
}

pub fn get_contribution(env: &Env, buyer: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(buyer.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, buyer: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(buyer.clone()), &amount);
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
