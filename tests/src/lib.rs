//! Macro generation integration tests.

#[cfg(test)]
pub mod layout;
