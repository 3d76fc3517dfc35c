//! Portfolio module - per-owner stock positions and trading operations.

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

pub use portfolio_model::{HoldingView, Position};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::{PortfolioServiceTrait, PositionRepositoryTrait};

#[cfg(test)]
mod portfolio_model_tests;
