use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Day-count convention used by every daily accrual in the engine
pub const DAYS_PER_YEAR: Decimal = dec!(365);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

pub const PERCENT: Decimal = dec!(100);
