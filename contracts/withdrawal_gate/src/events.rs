use soroban_sdk::{Address, Env, Symbol};

pub struct WithdrawalGateEvents {}

impl WithdrawalGateEvents {
    /// Emitted once when the gate is wired up to its vault and credential
    /// registry
    ///
    /// - topics - `["initialization", admin: Address]`
    /// - data - `[vault: Address, credential_registry: Address, policy_id: u32]`
    pub fn initialization(
        env: &Env,
        admin: Address,
        vault: Address,
        credential_registry: Address,
        policy_id: u32,
    ) {
        let topics = (Symbol::new(env, "initialization"), admin);
        env.events()
            .publish(topics, (vault, credential_registry, policy_id));
    }

    /// Emitted on every successful release-parameters replacement. Both
    /// fields are always carried; partial updates do not exist.
    ///
    /// - topics - `["release_parameters_update"]`
    /// - data - `[assets_available_to_withdraw: i128, total_supplied_assets: i128]`
    pub fn release_parameters_update(
        env: &Env,
        assets_available_to_withdraw: i128,
        total_supplied_assets: i128,
    ) {
        let topics = (Symbol::new(env, "release_parameters_update"),);
        env.events()
            .publish(topics, (assets_available_to_withdraw, total_supplied_assets));
    }

    /// Emitted when a withdraw or redeem passes both the quota and the
    /// credential check
    ///
    /// - topics - `["withdrawal", account: Address]`
    /// - data - `[amount: i128, total_withdrawn: i128]`
    pub fn withdrawal(env: &Env, account: Address, amount: i128, total_withdrawn: i128) {
        let topics = (Symbol::new(env, "withdrawal"), account);
        env.events().publish(topics, (amount, total_withdrawn));
    }
}
