use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_total_cap(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalCap).unwrap()
}

pub fn set_total_cap(env: &Env, cap: i128) {
    env.storage().instance().set(&DataKey::TotalCap, &cap);
}

pub fn get_unlocked_at(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::UnlockedAt).unwrap()
}

pub fn set_unlocked_at(env: &Env, at: u64) {
    env.storage().instance().set(&DataKey::UnlockedAt, &at);
}

pub fn get_self_destruct_after(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::SelfDestructAfter)
        .unwrap()
}

pub fn set_self_destruct_after(env: &Env, at: u64) {
    env.storage()
        .instance()
        .set(&DataKey::SelfDestructAfter, &at);
}

pub fn get_allocated_tokens(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::AllocatedTokens)
        .unwrap_or(0)
}

pub fn set_allocated_tokens(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::AllocatedTokens, &amount);
}

pub fn is_killed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Killed)
        .unwrap_or(false)
}

pub fn set_killed(env: &Env) {
    env.storage().instance().set(&DataKey::Killed, &true);
}

pub fn get_slot(env: &Env, beneficiary: &Address) -> AllocationSlot {
    env.storage()
        .persistent()
        .get(&DataKey::Slot(beneficiary.clone()))
        .unwrap_or(AllocationSlot {
            state: SlotState::Unassigned,
            amount: 0,
        })
}

pub fn set_slot(env: &Env, beneficiary: &Address, slot: &AllocationSlot) {
    env.storage()
        .persistent()
        .set(&DataKey::Slot(beneficiary.clone()), slot);
}

pub fn get_beneficiaries(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Beneficiaries)
        .unwrap_or(Vec::new(env))
}

pub fn register_beneficiary(env: &Env, beneficiary: &Address) {
    let mut beneficiaries = get_beneficiaries(env);
    if !beneficiaries.contains(beneficiary) {
        beneficiaries.push_back(beneficiary.clone());
        env.storage()
            .persistent()
            .set(&DataKey::Beneficiaries, &beneficiaries);
    }
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
