mod execution;
mod modexp;
#[cfg(feature = "serde")]
mod serialization;
