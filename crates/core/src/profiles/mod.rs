//! Owner profiles - the per-owner virtual calendar and cached net worth.

mod profiles_model;
mod profiles_traits;

pub use profiles_model::OwnerProfile;
pub use profiles_traits::ProfileRepositoryTrait;
