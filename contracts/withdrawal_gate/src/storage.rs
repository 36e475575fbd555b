use rampart::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Initialized,
    Admin,
    Config,
    ReleaseParams,
    Withdrawn(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The vault whose withdraw/redeem hooks this contract gates. Also the
    /// balance oracle for per-account claims and share conversions.
    pub vault: Address,
    /// External registry consulted for per-account credentials.
    pub credential_registry: Address,
    /// Credential policy the registry is queried against.
    pub policy_id: u32,
}

/// Admin-set pair defining the pool-wide withdrawal allowance and the
/// denominator for pro-rata allocation. An all-zero record means the
/// administrator has never released any liquidity.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReleaseParameters {
    pub assets_available_to_withdraw: i128,
    pub total_supplied_assets: i128,
}

impl ReleaseParameters {
    pub fn is_initialized(&self) -> bool {
        self.assets_available_to_withdraw > 0 && self.total_supplied_assets > 0
    }
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Config not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn save_release_parameters(env: &Env, params: &ReleaseParameters) {
    env.storage().persistent().set(&DataKey::ReleaseParams, params);
    env.storage().persistent().extend_ttl(
        &DataKey::ReleaseParams,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_release_parameters(env: &Env) -> ReleaseParameters {
    match env.storage().persistent().get(&DataKey::ReleaseParams) {
        Some(params) => {
            env.storage().persistent().extend_ttl(
                &DataKey::ReleaseParams,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            params
        }
        None => ReleaseParameters {
            assets_available_to_withdraw: 0,
            total_supplied_assets: 0,
        },
    }
}

/// Cumulative assets successfully withdrawn by `account`. Lazily zero for
/// accounts that never withdrew.
pub fn get_withdrawn(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Withdrawn(account.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            amount
        }
        None => 0,
    }
}

pub fn save_withdrawn(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Withdrawn(account.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub mod utils {
    use rampart::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
    use rampart::error::ErrorCode;
    use soroban_sdk::{log, panic_with_error};

    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Initialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn save_admin(env: &Env, address: &Address) {
        env.storage().persistent().set(&DataKey::Admin, address);
        env.storage().persistent().extend_ttl(
            &DataKey::Admin,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    pub fn get_admin(env: &Env) -> Address {
        let admin = env
            .storage()
            .persistent()
            .get(&DataKey::Admin)
            .expect("Admin not set");
        env.storage().persistent().extend_ttl(
            &DataKey::Admin,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );

        admin
    }

    pub fn is_admin(env: &Env, sender: &Address) {
        let admin = get_admin(env);
        if admin != *sender {
            log!(env, "Withdrawal Gate: You are not authorized!");
            panic_with_error!(env, ErrorCode::NotAuthorized);
        }
    }
}
