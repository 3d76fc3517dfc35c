use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const DEFAULT_CREDIT_LIMIT: Decimal = dec!(50000);

/// Annual interest rate (%) charged on overdue balances.
pub const DEFAULT_CARD_INTEREST_RATE: Decimal = dec!(36);

/// Statements fall due this many days after the billing date.
pub const DEFAULT_DUE_DAY_OFFSET: i64 = 20;

pub const DEFAULT_BILLING_DAY: u32 = 1;

/// Fraction of the statement balance demanded as minimum due.
pub const DEFAULT_MINIMUM_DUE_PERCENT: Decimal = dec!(0.05);

/// Minimum due never drops below this (unless the statement itself is
/// smaller).
pub const MINIMUM_DUE_FLOOR: Decimal = dec!(500);

/// Flat fee charged alongside overdue interest.
pub const LATE_FEE: Decimal = dec!(500);
