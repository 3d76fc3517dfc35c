//! External market data providers.

pub mod analyst_provider;

pub use analyst_provider::AnalystRatingsProvider;
