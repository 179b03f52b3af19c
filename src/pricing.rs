//! Checkout arithmetic. All amounts are integer kobo.

use serde::Serialize;

use crate::entities::Plan;

/// Currency every price in the catalog is quoted in.
pub const CURRENCY: &str = "NGN";

/// A priced line in a checkout quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub box_id: i32,
    pub name: String,
    pub unit_price: i64,
    pub quantity: i64,
    pub line_total: i64,
}

impl QuoteLine {
    /// Build a line, clamping the quantity to at least one item.
    #[must_use]
    pub fn new(box_id: i32, name: String, unit_price: i64, quantity: i64) -> Self {
        let quantity = quantity.max(1);
        Self {
            box_id,
            name,
            unit_price,
            quantity,
            line_total: unit_price.saturating_mul(quantity),
        }
    }
}

/// Totals for a cart under a subscription plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub plan: Plan,
    /// Billing period label, e.g. `"3 months"`.
    pub period: &'static str,
    pub item_count: i64,
    pub subtotal: i64,
    pub discount_percent: i64,
    pub discount: i64,
    /// Amount handed to the payment provider.
    pub total: i64,
    pub currency: &'static str,
}

impl Quote {
    #[must_use]
    pub fn new(lines: Vec<QuoteLine>, plan: Plan) -> Self {
        let subtotal = lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.line_total));
        let item_count = lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity));
        let discount_percent = plan.discount_percent();
        let discount = discount_for(subtotal, discount_percent);

        Self {
            lines,
            plan,
            period: plan.period(),
            item_count,
            subtotal,
            discount_percent,
            discount,
            total: subtotal - discount,
            currency: CURRENCY,
        }
    }
}

/// Discount on `amount` at `percent`, rounded down to the kobo.
#[must_use]
pub const fn discount_for(amount: i64, percent: i64) -> i64 {
    amount.saturating_mul(percent) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_is_clamped_to_one() {
        let line = QuoteLine::new(1, "Box".to_string(), 1_000, 0);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.line_total, 1_000);

        let line = QuoteLine::new(1, "Box".to_string(), 1_000, -4);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn monthly_has_no_discount() {
        let quote = Quote::new(
            vec![QuoteLine::new(1, "Pantry".to_string(), 3_450_000, 2)],
            Plan::Monthly,
        );
        assert_eq!(quote.subtotal, 6_900_000);
        assert_eq!(quote.discount, 0);
        assert_eq!(quote.total, 6_900_000);
        assert_eq!(quote.item_count, 2);
    }

    #[test]
    fn quarterly_and_annual_discounts() {
        let lines = vec![
            QuoteLine::new(1, "Farm".to_string(), 1_400_000, 1),
            QuoteLine::new(2, "Prime".to_string(), 2_600_000, 1),
        ];

        let quarterly = Quote::new(lines.clone(), Plan::Quarterly);
        assert_eq!(quarterly.subtotal, 4_000_000);
        assert_eq!(quarterly.discount, 200_000);
        assert_eq!(quarterly.total, 3_800_000);

        let annual = Quote::new(lines, Plan::Annual);
        assert_eq!(annual.discount, 600_000);
        assert_eq!(annual.total, 3_400_000);
        assert_eq!(annual.currency, "NGN");
        assert_eq!(annual.period, "year");
    }

    #[test]
    fn huge_lines_saturate_instead_of_wrapping() {
        let quote = Quote::new(
            vec![
                QuoteLine::new(1, "Pantry".to_string(), 3_450_000, i64::MAX),
                QuoteLine::new(2, "Farm".to_string(), 1_400_000, i64::MAX),
            ],
            Plan::Annual,
        );
        assert_eq!(quote.subtotal, i64::MAX);
        assert_eq!(quote.item_count, i64::MAX);
        assert!(quote.total > 0);
    }

    #[test]
    fn discount_rounds_down() {
        assert_eq!(discount_for(999, 5), 49);
        assert_eq!(discount_for(0, 15), 0);
    }
}
