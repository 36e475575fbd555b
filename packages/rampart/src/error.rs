use soroban_sdk::contracterror;

pub type RampartResult<T = ()> = Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    NotInitialized = 3,
    InvalidParameters = 4,
    InvalidAmount = 5,
    ExceedsEntitlement = 6,
    CredentialRejected = 7,
    TransfersDisabled = 8,
    MathError = 9,
}
