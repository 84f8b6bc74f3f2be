#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{Error, SaleToken, SaleTokenClient};

fn setup(env: &Env) -> (SaleTokenClient<'_>, Address) {
    env.mock_all_auths();
    let contract_id = env.register_contract(None, SaleToken);
    let client = SaleTokenClient::new(env, &contract_id);
    let admin = Address::generate(env);
    client.initialize(
        &admin,
        &18u32,
        &String::from_str(env, "Sale Token"),
        &String::from_str(env, "SALE"),
    );
    (client, admin)
}

#[test]
fn mint_credits_balance_and_supply() {
    let env = Env::default();
    let (client, _admin) = setup(&env);

    let holder = Address::generate(&env);
    client.mint(&holder, &1_000);
    client.mint(&holder, &500);

    assert_eq!(client.balance(&holder), 1_500);
    assert_eq!(client.total_supply(), 1_500);
}

#[test]
fn mint_rejects_non_positive_amount() {
    let env = Env::default();
    let (client, _admin) = setup(&env);

    let holder = Address::generate(&env);
    assert_eq!(client.try_mint(&holder, &0), Err(Ok(Error::InvalidAmount)));
    assert_eq!(client.try_mint(&holder, &-5), Err(Ok(Error::InvalidAmount)));
}

#[test]
fn transfers_blocked_while_paused() {
    let env = Env::default();
    let (client, _admin) = setup(&env);

    let from = Address::generate(&env);
    let to = Address::generate(&env);
    client.mint(&from, &100);

    // The token starts paused.
    assert!(client.is_paused());
    assert_eq!(client.try_transfer(&from, &to, &40), Err(Ok(Error::Paused)));

    client.unpause();
    client.transfer(&from, &to, &40);
    assert_eq!(client.balance(&from), 60);
    assert_eq!(client.balance(&to), 40);

    client.pause();
    assert_eq!(client.try_transfer(&from, &to, &10), Err(Ok(Error::Paused)));
}

#[test]
fn transfer_rejects_overdraw() {
    let env = Env::default();
    let (client, _admin) = setup(&env);

    let from = Address::generate(&env);
    let to = Address::generate(&env);
    client.mint(&from, &100);
    client.unpause();

    assert_eq!(
        client.try_transfer(&from, &to, &101),
        Err(Ok(Error::InsufficientBalance))
    );
    assert_eq!(client.balance(&from), 100);
}

#[test]
fn mint_rejects_balance_overflow() {
    let env = Env::default();
    let (client, _admin) = setup(&env);

    let holder = Address::generate(&env);
    client.mint(&holder, &i128::MAX);

    assert_eq!(
        client.try_mint(&holder, &1),
        Err(Ok(Error::ArithmeticOverflow))
    );
    // The rejected mint left balance and supply untouched.
    assert_eq!(client.balance(&holder), i128::MAX);
    assert_eq!(client.total_supply(), i128::MAX);
}

#[test]
fn finish_minting_is_a_one_way_latch() {
    let env = Env::default();
    let (client, _admin) = setup(&env);

    let holder = Address::generate(&env);
    client.mint(&holder, &10);
    client.finish_minting();
    assert!(client.is_minting_finished());

    assert_eq!(
        client.try_mint(&holder, &10),
        Err(Ok(Error::MintingFinished))
    );
    assert_eq!(
        client.try_finish_minting(),
        Err(Ok(Error::MintingFinished))
    );
    assert_eq!(client.total_supply(), 10);
}

#[test]
fn initialize_is_one_shot() {
    let env = Env::default();
    let (client, admin) = setup(&env);

    assert_eq!(
        client.try_initialize(
            &admin,
            &18u32,
            &String::from_str(&env, "Sale Token"),
            &String::from_str(&env, "SALE"),
        ),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn metadata_is_recorded() {
    let env = Env::default();
    let (client, _admin) = setup(&env);

    assert_eq!(client.decimals(), 18);
    assert_eq!(client.name(), String::from_str(&env, "Sale Token"));
    assert_eq!(client.symbol(), String::from_str(&env, "SALE"));
}
