use crate::storage::*;
use crate::types::*;
use allowlist::AllowlistClient;
use sale_token::SaleTokenClient;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Capped crowdsale controller with one-shot stakeholder finalization"
);

#[contract]
pub struct CrowdsaleContract;

#[contractimpl]
impl CrowdsaleContract {
    /// Initialize the sale. All parameters are immutable afterwards; the
    /// only later administrative input is the team allocation address.
    pub fn initialize(env: Env, owner: Address, config: SaleConfig) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if config.start_time >= config.end_time
            || config.rate <= 0
            || config.total_tokens_for_sale <= 0
            || config.vested_team_share <= 0
            || config.team_company_share <= 0
            || config.bounty_share <= 0
            || config.total_supply_cap <= config.total_tokens_for_sale
        {
            return Err(Error::InvalidConfig);
        }

        // The sale cap plus every fixed share must fit under the supply cap
        // or finalization could never land exactly on it.
        let committed = config
            .total_tokens_for_sale
            .checked_add(config.vested_team_share)
            .and_then(|v| v.checked_add(config.team_company_share))
            .and_then(|v| v.checked_add(config.bounty_share))
            .ok_or(Error::ArithmeticOverflow)?;
        if committed > config.total_supply_cap {
            return Err(Error::InvalidConfig);
        }

        set_config(&env, &config);
        set_owner(&env, &owner);

        env.events().publish(
            ("sale_initialized",),
            (
                config.token,
                config.start_time,
                config.end_time,
                config.rate,
                config.total_tokens_for_sale,
            ),
        );
        Ok(())
    }

    /// Record the address the vested team share is minted to at
    /// finalization; finalize fails until this has been called.
    pub fn set_team_allocation(env: Env, team_allocation: Address) -> Result<(), Error> {
        get_owner(&env).require_auth();

        if is_finalized(&env) {
            return Err(Error::AlreadyFinalized);
        }
        set_team_allocation(&env, &team_allocation);

        env.events()
            .publish(("team_allocation_set",), (team_allocation,));
        Ok(())
    }

    /// Exchange payment for sale tokens at the fixed rate.
    ///
    /// A purchase that would cross the sale cap is truncated to the largest
    /// payment whose token amount still fits: the accepted payment is
    /// derived by integer division first, and the token amount re-derived
    /// from it, so the credited tokens are always an exact multiple of the
    /// rate. The unaccepted payment is never collected from the buyer; the
    /// truncation is additionally recorded in the single remainder slot,
    /// overwriting any earlier record.
    pub fn purchase(
        env: Env,
        buyer: Address,
        beneficiary: Address,
        payment_amount: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();

        let config = get_config(&env);
        if is_finalized(&env) {
            return Err(Error::AlreadyFinalized);
        }

        let now = get_ledger_timestamp(&env);
        if now < config.start_time || now > config.end_time {
            return Err(Error::OutOfWindow);
        }
        if payment_amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        // Purchaser and credited party must match.
        if buyer != beneficiary {
            return Err(Error::PreconditionUnmet);
        }
        if !AllowlistClient::new(&env, &config.allowlist).is_allowed(&beneficiary) {
            return Err(Error::NotAllowed);
        }

        let sale_token = SaleTokenClient::new(&env, &config.token);
        let supply = sale_token.total_supply();
        if supply >= config.total_tokens_for_sale {
            // Cap already reached; the sale has ended regardless of time.
            return Err(Error::OutOfWindow);
        }

        let mut tokens = payment_amount
            .checked_mul(config.rate)
            .ok_or(Error::ArithmeticOverflow)?;
        let mut accepted = payment_amount;

        let headroom = config.total_tokens_for_sale - supply;
        if tokens > headroom {
            accepted = headroom / config.rate;
            tokens = accepted
                .checked_mul(config.rate)
                .ok_or(Error::ArithmeticOverflow)?;
            set_remainder(
                &env,
                &RemainderRecord {
                    purchaser: buyer.clone(),
                    amount: payment_amount - accepted,
                },
            );
        }

        if accepted > 0 {
            token::Client::new(&env, &config.payment_token).transfer(
                &buyer,
                &config.wallet,
                &accepted,
            );
        }
        if tokens > 0 {
            let contribution = get_contribution(&env, &beneficiary)
                .checked_add(tokens)
                .ok_or(Error::ArithmeticOverflow)?;
            set_contribution(&env, &beneficiary, contribution);
            sale_token.mint(&beneficiary, &tokens);
        }

        env.events()
            .publish(("purchase",), (beneficiary, accepted, tokens));
        Ok(())
    }

    /// The sale is over once the window closes or the cap is fully sold.
    /// The time comparison is evaluated before the supply query.
    pub fn has_ended(env: Env) -> bool {
        let config = get_config(&env);
        if get_ledger_timestamp(&env) > config.end_time {
            return true;
        }
        let supply = SaleTokenClient::new(&env, &config.token).total_supply();
        supply >= config.total_tokens_for_sale
    }

    /// One-shot sale close: mints every stakeholder share, tops the supply
    /// up to exactly the supply cap, stops minting for good and opens
    /// transfers. Any failing step aborts the whole transition with
    /// `finalized` still false, so finalize can be retried.
    pub fn finalize(env: Env) -> Result<(), Error> {
        get_owner(&env).require_auth();

        if is_finalized(&env) {
            return Err(Error::AlreadyFinalized);
        }
        if !Self::has_ended(env.clone()) {
            return Err(Error::OutOfWindow);
        }
        let team_allocation = get_team_allocation(&env).ok_or(Error::PreconditionUnmet)?;

        let config = get_config(&env);
        let sale_token = SaleTokenClient::new(&env, &config.token);

        sale_token.mint(&team_allocation, &config.vested_team_share);
        sale_token.mint(&config.wallet, &config.team_company_share);
        sale_token.mint(&config.reward_wallet, &config.bounty_share);

        // Read the supply once; whatever is left under the cap goes to the
        // treasury so the final supply equals the cap exactly.
        let supply = sale_token.total_supply();
        if config.total_supply_cap > supply {
            sale_token.mint(&config.wallet, &(config.total_supply_cap - supply));
        }

        sale_token.finish_minting();
        sale_token.unpause();

        // The pending refund record is consumed at sale close.
        clear_remainder(&env);
        set_finalized(&env);

        env.events()
            .publish(("finalized",), (config.total_supply_cap,));
        Ok(())
    }

    // View functions
    pub fn buyer_contribution(env: Env, buyer: Address) -> i128 {
        get_contribution(&env, &buyer)
    }

    pub fn remainder(env: Env) -> Option<RemainderRecord> {
        get_remainder(&env)
    }

    pub fn is_finalized(env: Env) -> bool {
        is_finalized(&env)
    }

    pub fn get_config(env: Env) -> SaleConfig {
        get_config(&env)
    }
}
