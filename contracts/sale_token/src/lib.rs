#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address, Env,
    String,
};

contractmeta!(
    key = "Description",
    val = "Pausable mintable token issued by the crowdsale"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    InvalidAmount = 2,
    ArithmeticOverflow = 3,
    MintingFinished = 4,
    Paused = 5,
    InsufficientBalance = 6,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Metadata,
    Paused,
    MintingFinished,
    TotalSupply,
    Balance(Address),
}

fn read_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

fn read_metadata(env: &Env) -> TokenMetadata {
    env.storage().instance().get(&DataKey::Metadata).unwrap()
}

fn read_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

fn read_minting_finished(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::MintingFinished)
        .unwrap_or(false)
}

fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}

#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    /// The admin is the crowdsale contract and holds the mint authority for
    /// the token's entire lifetime; there is deliberately no `set_admin`.
    /// Transfers start paused and stay paused until sale finalization.
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        env.storage().instance().set(&DataKey::Paused, &true);

        Ok(())
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        read_admin(&env).require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if read_minting_finished(&env) {
            return Err(Error::MintingFinished);
        }

        let balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        let supply = read_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        write_balance(&env, &to, balance);
        env.storage().instance().set(&DataKey::TotalSupply, &supply);

        env.events()
            .publish((symbol_short!("mint"), to), amount);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if read_paused(&env) {
            return Err(Error::Paused);
        }

        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }
        write_balance(&env, &from, from_balance - amount);

        let to_balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        write_balance(&env, &to, to_balance);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    /// One-way latch; after this no further supply can ever be issued.
    pub fn finish_minting(env: Env) -> Result<(), Error> {
        read_admin(&env).require_auth();

        if read_minting_finished(&env) {
            return Err(Error::MintingFinished);
        }
        env.storage()
            .instance()
            .set(&DataKey::MintingFinished, &true);

        env.events().publish((symbol_short!("mint_end"),), ());
        Ok(())
    }

    pub fn pause(env: Env) {
        read_admin(&env).require_auth();
        env.storage().instance().set(&DataKey::Paused, &true);
        env.events().publish((symbol_short!("paused"),), ());
    }

    pub fn unpause(env: Env) {
        read_admin(&env).require_auth();
        env.storage().instance().set(&DataKey::Paused, &false);
        env.events().publish((symbol_short!("unpaused"),), ());
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        read_paused(&env)
    }

    pub fn is_minting_finished(env: Env) -> bool {
        read_minting_finished(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        read_metadata(&env).decimal
    }

    pub fn name(env: Env) -> String {
        read_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        read_metadata(&env).symbol
    }
}

#[cfg(test)]
mod test;
