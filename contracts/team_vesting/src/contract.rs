use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

contractmeta!(
    key = "Description",
    val = "Time-locked team and advisor allocation ledger"
);

#[contract]
pub struct TeamVesting;

#[contractimpl]
impl TeamVesting {
    /// `token` is the funding token the ledger pays allocations out of;
    /// the ledger is funded by the crowdsale minting the vested team share
    /// to this contract's address at finalization.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        total_cap: i128,
        unlocked_at: u64,
        self_destruct_after: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if total_cap <= 0 || self_destruct_after < unlocked_at {
            return Err(Error::InvalidConfig);
        }

        set_owner(&env, &owner);
        set_token(&env, &token);
        set_total_cap(&env, total_cap);
        set_unlocked_at(&env, unlocked_at);
        set_self_destruct_after(&env, self_destruct_after);

        env.events()
            .publish(("initialized",), (token, total_cap, unlocked_at));
        Ok(())
    }

    /// Lock `amount` tokens for `beneficiary`. A slot that is currently
    /// assigned and unclaimed cannot be reassigned; a claimed slot can.
    pub fn assign(env: Env, beneficiary: Address, amount: i128) -> Result<(), Error> {
        get_owner(&env).require_auth();

        if is_killed(&env) {
            return Err(Error::PreconditionUnmet);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let slot = get_slot(&env, &beneficiary);
        if slot.state == SlotState::Assigned {
            return Err(Error::PreconditionUnmet);
        }

        let allocated = get_allocated_tokens(&env)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if allocated > get_total_cap(&env) {
            return Err(Error::CapExceeded);
        }

        set_slot(
            &env,
            &beneficiary,
            &AllocationSlot {
                state: SlotState::Assigned,
                amount,
            },
        );
        set_allocated_tokens(&env, allocated);
        register_beneficiary(&env, &beneficiary);

        env.events().publish(("assign",), (beneficiary, amount));
        Ok(())
    }

    /// Pay out every assigned allocation in full. Callable by anyone once
    /// the unlock timestamp has passed; beneficiaries without an assigned
    /// slot are skipped, so repeat calls are no-ops per beneficiary.
    pub fn unlock(env: Env) -> Result<(), Error> {
        if is_killed(&env) {
            return Err(Error::PreconditionUnmet);
        }
        if get_ledger_timestamp(&env) < get_unlocked_at(&env) {
            return Err(Error::OutOfWindow);
        }

        let token = token::Client::new(&env, &get_token(&env));
        let ledger = env.current_contract_address();
        let mut allocated = get_allocated_tokens(&env);

        for beneficiary in get_beneficiaries(&env).iter() {
            let slot = get_slot(&env, &beneficiary);
            if slot.state != SlotState::Assigned {
                continue;
            }

            token.transfer(&ledger, &beneficiary, &slot.amount);
            set_slot(
                &env,
                &beneficiary,
                &AllocationSlot {
                    state: SlotState::Claimed,
                    amount: 0,
                },
            );
            allocated = allocated
                .checked_sub(slot.amount)
                .ok_or(Error::ArithmeticOverflow)?;

            env.events()
                .publish(("unlock",), (beneficiary, slot.amount));
        }

        set_allocated_tokens(&env, allocated);
        Ok(())
    }

    /// Irreversible teardown: sweeps any residual funding-token balance to
    /// the owner and latches the ledger shut. The ledger does not check
    /// that all allocations were claimed first; the owner is expected to
    /// verify `allocated_tokens() == 0` before calling.
    pub fn kill(env: Env) -> Result<(), Error> {
        let owner = get_owner(&env);
        owner.require_auth();

        if is_killed(&env) {
            return Err(Error::PreconditionUnmet);
        }
        if get_ledger_timestamp(&env) < get_self_destruct_after(&env) {
            return Err(Error::OutOfWindow);
        }

        let token = token::Client::new(&env, &get_token(&env));
        let ledger = env.current_contract_address();
        let residual = token.balance(&ledger);
        if residual > 0 {
            token.transfer(&ledger, &owner, &residual);
        }
        set_killed(&env);

        env.events().publish(("kill",), (owner, residual));
        Ok(())
    }

    // View functions
    pub fn allocation(env: Env, beneficiary: Address) -> i128 {
        let slot = get_slot(&env, &beneficiary);
        match slot.state {
            SlotState::Assigned => slot.amount,
            _ => 0,
        }
    }

    pub fn slot(env: Env, beneficiary: Address) -> SlotState {
        get_slot(&env, &beneficiary).state
    }

    pub fn allocated_tokens(env: Env) -> i128 {
        get_allocated_tokens(&env)
    }

    pub fn unlocked_at(env: Env) -> u64 {
        get_unlocked_at(&env)
    }

    pub fn self_destruct_after(env: Env) -> u64 {
        get_self_destruct_after(&env)
    }

    pub fn is_killed(env: Env) -> bool {
        is_killed(&env)
    }
}
