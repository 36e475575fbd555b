use soroban_sdk::{contractclient, Address, Env};

/// The slice of the vault's surface this contract consumes: a balance oracle
/// for per-account claims and the exact share conversion used for redeems.
/// Asset movement stays with the vault; the gate only authorizes or rejects.
#[contractclient(name = "VaultClient")]
pub trait VaultInterface {
    /// Current settlement-asset claim of `account` on the pool, net of
    /// everything it has already withdrawn.
    fn balance_of_assets(env: Env, account: Address) -> i128;

    /// Converts a share amount into the settlement-asset amount it redeems
    /// for at the current share price.
    fn convert_to_assets(env: Env, shares: i128) -> i128;
}
