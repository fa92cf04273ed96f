//! Built-in rule tables.
//!
//! Everything here is static data, built once behind `Lazy` and never mutated.

pub(crate) mod abbreviations;
pub(crate) mod defaults;
pub(crate) mod greek;
pub(crate) mod modifiers;
pub(crate) mod stores;

#[cfg(test)]
mod tests;
