use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "CredentialRegistryClient")]
pub trait CredentialRegistryInterface {
    /// Whether `account` currently holds a valid credential under
    /// `policy_id`. Queried for the account being withdrawn for, not the
    /// caller of the hook.
    fn verify(env: Env, account: Address, policy_id: u32) -> bool;
}
