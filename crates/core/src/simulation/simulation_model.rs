//! Simulation output models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::net_worth::NetWorthBreakdown;

/// Periodic net-worth point captured during a run, for charting.
///
/// Card liability has no component column of its own; it is folded into
/// `net_worth` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    pub id: String,
    pub owner_id: String,
    pub date: NaiveDate,
    pub net_worth: Decimal,
    pub total_bank_balance: Decimal,
    pub total_stock_value: Decimal,
    pub total_loan_liability: Decimal,
    pub total_fd_value: Decimal,
}

/// Input model for recording a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSimulationSnapshot {
    pub owner_id: String,
    pub date: NaiveDate,
    pub net_worth: Decimal,
    pub total_bank_balance: Decimal,
    pub total_stock_value: Decimal,
    pub total_loan_liability: Decimal,
    pub total_fd_value: Decimal,
}

impl NewSimulationSnapshot {
    pub fn from_breakdown(
        owner_id: impl Into<String>,
        date: NaiveDate,
        breakdown: &NetWorthBreakdown,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            date,
            net_worth: breakdown.net_worth,
            total_bank_balance: breakdown.total_bank_balance,
            total_stock_value: breakdown.total_stock_value,
            total_loan_liability: breakdown.total_loan_liability,
            total_fd_value: breakdown.total_fd_value,
        }
    }
}

impl From<NewSimulationSnapshot> for SimulationSnapshot {
    fn from(new: NewSimulationSnapshot) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: new.owner_id,
            date: new.date,
            net_worth: new.net_worth,
            total_bank_balance: new.total_bank_balance,
            total_stock_value: new.total_stock_value,
            total_loan_liability: new.total_loan_liability,
            total_fd_value: new.total_fd_value,
        }
    }
}

/// Result of advancing the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceOutcome {
    pub simulation_date: NaiveDate,
    pub net_worth: Decimal,
    pub message: String,
}

/// Whether the owner has a sandbox session in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub active: bool,
}
