pub mod constants;
pub mod crud;
pub mod serde_ext;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
