//! Unit tests for position arithmetic.

use rust_decimal_macros::dec;

use super::portfolio_model::Position;

#[test]
fn buys_reweight_the_average_price() {
    let mut position = Position::open("owner-1", "stock-1", dec!(10), dec!(100));
    position.apply_buy(dec!(10), dec!(200));
    assert_eq!(position.quantity, dec!(20));
    assert_eq!(position.average_buy_price, dec!(150));
}

#[test]
fn uneven_buy_sizes_weight_by_value() {
    let mut position = Position::open("owner-1", "stock-1", dec!(30), dec!(100));
    position.apply_buy(dec!(10), dec!(140));
    assert_eq!(position.quantity, dec!(40));
    assert_eq!(position.average_buy_price, dec!(110));
}

#[test]
fn sells_leave_the_average_price_alone() {
    let mut position = Position::open("owner-1", "stock-1", dec!(20), dec!(150));
    position.apply_sell(dec!(5));
    assert_eq!(position.quantity, dec!(15));
    assert_eq!(position.average_buy_price, dec!(150));
    assert!(!position.is_empty());

    position.apply_sell(dec!(15));
    assert!(position.is_empty());
}
