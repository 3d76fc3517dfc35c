//! Net worth aggregation module.

mod net_worth_model;
mod net_worth_service;
mod net_worth_traits;

pub use net_worth_model::NetWorthBreakdown;
pub use net_worth_service::{breakdown_from_entities, NetWorthService};
pub use net_worth_traits::NetWorthServiceTrait;

#[cfg(test)]
mod net_worth_service_tests;
