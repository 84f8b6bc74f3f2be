#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, Address, Env, Vec,
};

contractmeta!(key = "Description", val = "Allow-list gating crowdsale participation");

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Member(Address),
}

fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

fn is_member(env: &Env, addr: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Member(addr.clone()))
        .unwrap_or(false)
}

#[contract]
pub struct Allowlist;

#[contractimpl]
impl Allowlist {
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        env.storage().instance().set(&DataKey::Owner, &owner);
        Ok(())
    }

    /// Add members. Addresses already present are skipped without an event.
    pub fn add(env: Env, members: Vec<Address>) {
        get_owner(&env).require_auth();

        for member in members.iter() {
            if is_member(&env, &member) {
                continue;
            }
            env.storage()
                .persistent()
                .set(&DataKey::Member(member.clone()), &true);
            env.events().publish(("allowed",), (member,));
        }
    }

    /// Remove members. Addresses not present are skipped without an event.
    pub fn remove(env: Env, members: Vec<Address>) {
        get_owner(&env).require_auth();

        for member in members.iter() {
            if !is_member(&env, &member) {
                continue;
            }
            env.storage()
                .persistent()
                .remove(&DataKey::Member(member.clone()));
            env.events().publish(("removed",), (member,));
        }
    }

    pub fn is_allowed(env: Env, addr: Address) -> bool {
        is_member(&env, &addr)
    }
}
