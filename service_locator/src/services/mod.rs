pub mod contract;

#[cfg(feature = "discovery")]
pub mod discovery;
