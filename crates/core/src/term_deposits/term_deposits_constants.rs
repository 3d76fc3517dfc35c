use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Annual interest rate (%) for a fixed deposit by tenure slab.
pub fn slab_rate(tenure_years: u32) -> Decimal {
    if tenure_years >= 5 {
        dec!(7.5)
    } else if tenure_years >= 3 {
        dec!(7.0)
    } else if tenure_years >= 1 {
        dec!(6.5)
    } else {
        dec!(6.0)
    }
}
