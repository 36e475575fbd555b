use rampart::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use rampart::error::ErrorCode;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, BytesN, Env,
};

use crate::{
    controller,
    events::WithdrawalGateEvents,
    interfaces::{credential::CredentialRegistryClient, vault::VaultClient},
    storage::{
        get_config, get_release_parameters, get_withdrawn, save_config, save_release_parameters,
        utils, Config, ReleaseParameters,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Credential-gated pro-rata withdrawal throttle for pooled vaults"
);

#[contract]
pub struct WithdrawalGate;

#[allow(dead_code)]
pub trait WithdrawalGateTrait {
    fn initialize(
        env: Env,
        admin: Address,
        vault: Address,
        credential_registry: Address,
        policy_id: u32,
    );

    fn set_release_parameters(
        env: Env,
        sender: Address,
        assets_available_to_withdraw: i128,
        total_supplied_assets: i128,
    );

    fn on_withdraw(env: Env, sender: Address, amount: i128, account: Address);

    fn on_redeem(env: Env, sender: Address, shares: i128, account: Address);

    fn on_transfer(env: Env, from: Address, to: Address, amount: i128);

    fn on_delegated_transfer(env: Env, operator: Address, from: Address, to: Address, amount: i128);

    fn on_delegated_transfer_max(env: Env, operator: Address, from: Address, to: Address);

    fn query_entitlement(env: Env, account: Address) -> i128;

    fn query_total_withdrawn(env: Env, account: Address) -> i128;

    fn query_release_parameters(env: Env) -> ReleaseParameters;

    fn query_config(env: Env) -> Config;

    fn query_admin(env: Env) -> Address;

    fn update(env: Env, new_wasm_hash: BytesN<32>);
}

#[contractimpl]
impl WithdrawalGateTrait for WithdrawalGate {
    fn initialize(
        env: Env,
        admin: Address,
        vault: Address,
        credential_registry: Address,
        policy_id: u32,
    ) {
        if utils::is_initialized(&env) {
            log!(
                &env,
                "Withdrawal Gate: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        utils::set_initialized(&env);

        utils::save_admin(&env, &admin);
        save_config(
            &env,
            &Config {
                vault: vault.clone(),
                credential_registry: credential_registry.clone(),
                policy_id,
            },
        );

        WithdrawalGateEvents::initialization(&env, admin, vault, credential_registry, policy_id);
    }

    fn set_release_parameters(
        env: Env,
        sender: Address,
        assets_available_to_withdraw: i128,
        total_supplied_assets: i128,
    ) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        utils::is_admin(&env, &sender);

        if assets_available_to_withdraw <= 0 || total_supplied_assets <= 0 {
            log!(
                &env,
                "Withdrawal Gate: Set release parameters: both parameters must be strictly positive"
            );
            panic_with_error!(&env, ErrorCode::InvalidParameters);
        }

        // Both fields are always replaced together; a half-updated pair is
        // never observable.
        save_release_parameters(
            &env,
            &ReleaseParameters {
                assets_available_to_withdraw,
                total_supplied_assets,
            },
        );

        WithdrawalGateEvents::release_parameters_update(
            &env,
            assets_available_to_withdraw,
            total_supplied_assets,
        );
    }

    fn on_withdraw(env: Env, sender: Address, amount: i128, account: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        verify_vault_caller(&env, &config, &sender);

        gate_exit(&env, &config, &account, amount);
    }

    fn on_redeem(env: Env, sender: Address, shares: i128, account: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        verify_vault_caller(&env, &config, &sender);

        if shares < 0 {
            log!(
                &env,
                "Withdrawal Gate: On redeem: negative share amount is not allowed: {}",
                shares
            );
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        let amount = VaultClient::new(&env, &config.vault).convert_to_assets(&shares);

        gate_exit(&env, &config, &account, amount);
    }

    fn on_transfer(env: Env, from: Address, to: Address, amount: i128) {
        log!(
            &env,
            "Withdrawal Gate: On transfer: transfers of gated positions are disabled ({} -> {}, amount {})",
            from,
            to,
            amount
        );
        panic_with_error!(&env, ErrorCode::TransfersDisabled);
    }

    fn on_delegated_transfer(
        env: Env,
        operator: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) {
        log!(
            &env,
            "Withdrawal Gate: On delegated transfer: transfers of gated positions are disabled (operator {}, {} -> {}, amount {})",
            operator,
            from,
            to,
            amount
        );
        panic_with_error!(&env, ErrorCode::TransfersDisabled);
    }

    fn on_delegated_transfer_max(env: Env, operator: Address, from: Address, to: Address) {
        log!(
            &env,
            "Withdrawal Gate: On delegated transfer max: transfers of gated positions are disabled (operator {}, {} -> {})",
            operator,
            from,
            to
        );
        panic_with_error!(&env, ErrorCode::TransfersDisabled);
    }

    fn query_entitlement(env: Env, account: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        match controller::quota::remaining_entitlement(&env, &account) {
            Ok(amount) => amount,
            Err(err) => panic_with_error!(&env, err),
        }
    }

    fn query_total_withdrawn(env: Env, account: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_withdrawn(&env, &account)
    }

    fn query_release_parameters(env: Env) -> ReleaseParameters {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_release_parameters(&env)
    }

    fn query_config(env: Env) -> Config {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env)
    }

    fn query_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        utils::get_admin(&env)
    }

    fn update(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = utils::get_admin(&env);
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}

/// Only the vault this gate was wired to may invoke the exit hooks.
fn verify_vault_caller(env: &Env, config: &Config, sender: &Address) {
    if *sender != config.vault {
        log!(
            &env,
            "Withdrawal Gate: only the configured vault may invoke exit hooks"
        );
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

/// Shared withdraw/redeem path, already normalized to an asset amount.
///
/// The quota is checked and committed first, then the credential registry is
/// consulted; the whole invocation reverts on either failure, so a credential
/// rejection leaves no quota consumed.
fn gate_exit(env: &Env, config: &Config, account: &Address, amount: i128) {
    if amount < 0 {
        log!(
            &env,
            "Withdrawal Gate: negative amount is not allowed: {}",
            amount
        );
        panic_with_error!(env, ErrorCode::InvalidAmount);
    }

    if let Err(err) = controller::quota::authorize_withdrawal(env, account, amount) {
        panic_with_error!(env, err);
    }

    let credentialed = CredentialRegistryClient::new(env, &config.credential_registry)
        .verify(account, &config.policy_id);
    if !credentialed {
        log!(
            &env,
            "Withdrawal Gate: account does not hold a valid credential for the configured policy"
        );
        panic_with_error!(env, ErrorCode::CredentialRejected);
    }

    WithdrawalGateEvents::withdrawal(env, account.clone(), amount, get_withdrawn(env, account));
}
