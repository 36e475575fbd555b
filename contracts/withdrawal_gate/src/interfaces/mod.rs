pub mod credential;
pub mod vault;
