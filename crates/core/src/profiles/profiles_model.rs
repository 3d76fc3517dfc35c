use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Owner-scoped simulation state: where the virtual calendar stands and the
/// last net worth the engine computed for the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub owner_id: String,
    pub simulation_date: NaiveDate,
    pub virtual_net_worth: Decimal,
}

impl OwnerProfile {
    pub fn new(owner_id: impl Into<String>, simulation_date: NaiveDate) -> Self {
        Self {
            owner_id: owner_id.into(),
            simulation_date,
            virtual_net_worth: Decimal::ZERO,
        }
    }
}
