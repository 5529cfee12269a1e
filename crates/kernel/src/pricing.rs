//! Derived money figures shown on order, inventory and payment screens.
//!
//! Amounts are integer minor units (kobo). Percentages applied to money are
//! rounded half away from zero to the nearest minor unit. Arithmetic
//! saturates at the `i64` bounds instead of overflowing.

use serde::{Deserialize, Serialize};

/// Default VAT rate: 7.5%.
pub const DEFAULT_VAT_BASIS_POINTS: u32 = 750;

/// Currency code used for payments.
pub const DEFAULT_CURRENCY: &str = "ngn";

/// One line of an order being composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub unit_price: i64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: i64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn total(&self) -> i64 {
        self.unit_price.saturating_mul(i64::from(self.quantity))
    }
}

/// Subtotal, VAT and grand total of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub subtotal: i64,
    pub vat: i64,
    pub total: i64,
}

impl OrderTotals {
    /// Sum the line items and apply VAT at `vat_basis_points` (1/100 of a percent).
    pub fn from_items(items: &[LineItem], vat_basis_points: u32) -> Self {
        let subtotal = items
            .iter()
            .map(LineItem::total)
            .fold(0i64, i64::saturating_add);
        let vat = apply_rate(subtotal, i64::from(vat_basis_points), 10_000);
        Self {
            subtotal,
            vat,
            total: subtotal.saturating_add(vat),
        }
    }
}

/// `amount * numerator / denominator`, rounded half away from zero.
fn apply_rate(amount: i64, numerator: i64, denominator: i64) -> i64 {
    let scaled = i128::from(amount) * i128::from(numerator);
    let denominator = i128::from(denominator);
    let half = denominator / 2;
    let rounded = if scaled >= 0 {
        (scaled + half) / denominator
    } else {
        (scaled - half) / denominator
    };
    i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
}

/// Margin on the selling price, as a percentage with one decimal.
///
/// Returns `0.0` when either price is zero.
pub fn profit_margin_percent(cost: i64, selling: i64) -> f64 {
    if cost == 0 || selling == 0 {
        return 0.0;
    }
    let margin = (selling - cost) as f64 / selling as f64 * 100.0;
    (margin * 10.0).round() / 10.0
}

/// Provider price plus the payment method's percentage fee.
///
/// A non-finite `fee_percent` counts as no fee; an out-of-range fee
/// saturates.
pub fn logistics_total(provider_price: i64, fee_percent: f64) -> i64 {
    if !fee_percent.is_finite() {
        return provider_price;
    }
    // Float-to-int `as` casts saturate.
    let fee = (provider_price as f64 * fee_percent / 100.0).round() as i64;
    provider_price.saturating_add(fee)
}

/// Format minor units as naira, e.g. `₦1,234.50`.
pub fn format_naira(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let major = (abs / 100).to_string();
    let minor = abs % 100;

    let mut grouped = String::with_capacity(major.len() + major.len() / 3);
    for (i, ch) in major.chars().enumerate() {
        if i > 0 && (major.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}₦{grouped}.{minor:02}")
}
