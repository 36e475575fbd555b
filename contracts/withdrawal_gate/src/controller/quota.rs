use rampart::error::{ErrorCode, RampartResult};
use rampart::math::safe_math::SafeMath;
use rampart::{safe_increment, validate};
use soroban_sdk::{log, Address, Env};

use crate::interfaces::vault::VaultClient;
use crate::math::entitlement;
use crate::storage::{get_config, get_release_parameters, get_withdrawn, save_withdrawn};

/// Assets `account` may still withdraw under the current release parameters,
/// evaluated against the vault's live balance reading. Read-only.
pub fn remaining_entitlement(env: &Env, account: &Address) -> RampartResult<i128> {
    let params = get_release_parameters(env);
    validate!(
        env,
        params.is_initialized(),
        ErrorCode::NotInitialized,
        "release parameters have not been set"
    )?;

    let config = get_config(env);
    let assets_supplied = VaultClient::new(env, &config.vault).balance_of_assets(account);
    validate!(
        env,
        assets_supplied >= 0,
        ErrorCode::InvalidAmount,
        "vault reported a negative claim of {} for the account",
        assets_supplied
    )?;

    let total_withdrawn = get_withdrawn(env, account);

    entitlement::remaining(env, &params, total_withdrawn, assets_supplied)
}

/// Validates `amount` against the account's remaining entitlement and, on
/// success, commits it to the cumulative-withdrawn counter. The counter only
/// ever grows; repeated withdrawals stay consistent because the entitlement
/// formula adds it back before applying the release ratio.
pub fn authorize_withdrawal(env: &Env, account: &Address, amount: i128) -> RampartResult {
    let allowed = remaining_entitlement(env, account)?;
    validate!(
        env,
        amount <= allowed,
        ErrorCode::ExceedsEntitlement,
        "requested {} exceeds remaining entitlement {}",
        amount,
        allowed
    )?;

    let mut total_withdrawn = get_withdrawn(env, account);
    safe_increment!(total_withdrawn, amount, env);
    save_withdrawn(env, account, total_withdrawn);

    Ok(())
}
