pub mod entitlement;
