use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Annual savings interest rate (%) applied when an account is created
/// without an explicit rate.
pub const DEFAULT_SAVINGS_INTEREST_RATE: Decimal = dec!(3.5);

/// Recurring deposits fall back to the 1st of the month when no day is set.
pub const DEFAULT_RECURRING_DEPOSIT_DAY: u32 = 1;
