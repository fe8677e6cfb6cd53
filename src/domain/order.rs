use super::money::{self, Price};
use thiserror::Error;

/// Most cups a single order may hold.
pub const MAX_CUPS: u8 = 20;

/// A refused operation on the pending order.
///
/// These are recoverable signals for the caller to surface as transient
/// messages; the state that raised them is always left untouched. The
/// display text of each variant is the exact message shown to the
/// customer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderRejection {
    #[error("Maximum 20 cups can be ordered at a time!")]
    LimitReached,
    #[error("Quantity should at least be 1!")]
    MinimumReached,
    #[error("That's Invalid!")]
    InvalidDecrement,
    #[error("Quantity can't be 0!")]
    EmptyQuantity,
    #[error("Enter your name!")]
    EmptyName,
}

/// The pending order a customer is assembling.
///
/// Quantity drives a three-region machine: at 0 no summary is shown and
/// the order cannot be placed, at 1 decrementing is refused, at
/// `MAX_CUPS` incrementing is refused. `total` is derived and recomputed
/// on every accepted mutation; it stays zero until the first cup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderState {
    quantity: u8,
    cream: bool,
    chocolate: bool,
    total: Price,
}

impl OrderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self) -> u8 {
        self.quantity
    }

    pub fn cream(&self) -> bool {
        self.cream
    }

    pub fn chocolate(&self) -> bool {
        self.chocolate
    }

    pub fn total(&self) -> Price {
        self.total
    }

    /// Adds one cup, up to `MAX_CUPS`.
    pub fn increment(&mut self) -> Result<(), OrderRejection> {
        if self.quantity < MAX_CUPS {
            self.quantity += 1;
            self.recompute();
            Ok(())
        } else {
            Err(OrderRejection::LimitReached)
        }
    }

    /// Removes one cup, down to a single cup.
    ///
    /// A zero-quantity order refuses with a signal distinct from the
    /// one-cup refusal; the two carry different customer-facing messages.
    pub fn decrement(&mut self) -> Result<(), OrderRejection> {
        if self.quantity > 1 {
            self.quantity -= 1;
            self.recompute();
            Ok(())
        } else if self.quantity == 1 {
            Err(OrderRejection::MinimumReached)
        } else {
            Err(OrderRejection::InvalidDecrement)
        }
    }

    /// Selects or deselects whipped cream.
    pub fn set_cream(&mut self, selected: bool) {
        self.cream = selected;
        if self.quantity > 0 {
            self.recompute();
        }
    }

    /// Selects or deselects chocolate.
    pub fn set_chocolate(&mut self, selected: bool) {
        self.chocolate = selected;
        if self.quantity > 0 {
            self.recompute();
        }
    }

    /// Recomputes `total` from the current quantity and add-ons.
    fn recompute(&mut self) {
        self.total = money::UNIT_PRICE.for_cups(self.quantity);
        if self.cream {
            self.total += money::CREAM_PRICE.for_cups(self.quantity);
        }
        if self.chocolate {
            self.total += money::CHOCOLATE_PRICE.for_cups(self.quantity);
        }
    }

    /// Validates the pending order and snapshots it for submission.
    ///
    /// The quantity check wins over the name check. The state itself is
    /// left as-is so the customer can keep adjusting after a refusal.
    pub fn place(&self, customer_name: &str) -> Result<Order, OrderRejection> {
        let name = customer_name.trim();
        if self.quantity == 0 {
            return Err(OrderRejection::EmptyQuantity);
        }
        if name.is_empty() {
            return Err(OrderRejection::EmptyName);
        }
        Ok(Order {
            customer_name: name.to_string(),
            quantity: self.quantity,
            cream: self.cream,
            chocolate: self.chocolate,
            total: self.total,
        })
    }

    /// Two-line quantity/price rendering, absent until the first cup.
    pub fn summary(&self) -> Option<String> {
        if self.quantity == 0 {
            return None;
        }
        let unit = if self.quantity == 1 { "cup" } else { "cups" };
        Some(format!(
            "Quantity : {} {}\nTotal Price : $ {}",
            self.quantity, unit, self.total
        ))
    }
}

/// A validated order, ready to be forwarded.
///
/// Produced by [`OrderState::place`]; the name is trimmed and non-empty
/// and the quantity is at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub customer_name: String,
    pub quantity: u8,
    pub cream: bool,
    pub chocolate: bool,
    pub total: Price,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_order_is_empty() {
        let state = OrderState::new();
        assert_eq!(state.quantity(), 0);
        assert!(!state.cream());
        assert!(!state.chocolate());
        assert_eq!(state.total(), Price::ZERO);
        assert_eq!(state.summary(), None);
    }

    #[test]
    fn test_increment_recomputes_total() {
        let mut state = OrderState::new();
        state.increment().unwrap();
        assert_eq!(state.quantity(), 1);
        assert_eq!(state.total(), Price::new(dec!(5)));

        state.increment().unwrap();
        assert_eq!(state.total(), Price::new(dec!(10)));
    }

    #[test]
    fn test_increment_refused_at_limit() {
        let mut state = OrderState::new();
        for _ in 0..MAX_CUPS {
            state.increment().unwrap();
        }
        let before = state.clone();

        assert_eq!(state.increment(), Err(OrderRejection::LimitReached));
        assert_eq!(state, before);
        assert_eq!(state.quantity(), MAX_CUPS);
    }

    #[test]
    fn test_decrement_signals_stay_distinct() {
        let mut state = OrderState::new();
        assert_eq!(state.decrement(), Err(OrderRejection::InvalidDecrement));
        assert_eq!(state.quantity(), 0);

        state.increment().unwrap();
        assert_eq!(state.decrement(), Err(OrderRejection::MinimumReached));
        assert_eq!(state.quantity(), 1);
    }

    #[test]
    fn test_decrement_above_one() {
        let mut state = OrderState::new();
        state.increment().unwrap();
        state.increment().unwrap();
        state.decrement().unwrap();
        assert_eq!(state.quantity(), 1);
        assert_eq!(state.total(), Price::new(dec!(5)));
    }

    #[test]
    fn test_toggles_reprice_per_cup() {
        let mut state = OrderState::new();
        state.increment().unwrap();
        state.set_cream(true);
        assert_eq!(state.total(), Price::new(dec!(6)));
        assert_eq!(
            state.summary().unwrap(),
            "Quantity : 1 cup\nTotal Price : $ 6"
        );

        state.increment().unwrap();
        state.set_chocolate(true);
        assert_eq!(state.total(), Price::new(dec!(16)));
        assert_eq!(
            state.summary().unwrap(),
            "Quantity : 2 cups\nTotal Price : $ 16"
        );
    }

    #[test]
    fn test_toggle_round_trip_restores_total() {
        let mut state = OrderState::new();
        for _ in 0..3 {
            state.increment().unwrap();
        }
        let before = state.total();

        state.set_cream(true);
        state.set_cream(false);
        assert_eq!(state.total(), before);
    }

    #[test]
    fn test_toggles_at_zero_keep_total_zero() {
        let mut state = OrderState::new();
        state.set_cream(true);
        state.set_chocolate(true);
        assert_eq!(state.total(), Price::ZERO);
        assert_eq!(state.summary(), None);
    }

    #[test]
    fn test_place_requires_quantity_before_name() {
        let state = OrderState::new();
        assert_eq!(state.place("Alice"), Err(OrderRejection::EmptyQuantity));
        assert_eq!(state.place(""), Err(OrderRejection::EmptyQuantity));
    }

    #[test]
    fn test_place_requires_name() {
        let mut state = OrderState::new();
        for _ in 0..3 {
            state.increment().unwrap();
        }
        assert_eq!(state.place(""), Err(OrderRejection::EmptyName));
        assert_eq!(state.place("   "), Err(OrderRejection::EmptyName));
    }

    #[test]
    fn test_place_trims_name_and_snapshots() {
        let mut state = OrderState::new();
        state.increment().unwrap();
        state.increment().unwrap();
        state.set_cream(true);

        let order = state.place("  Alice  ").unwrap();
        assert_eq!(order.customer_name, "Alice");
        assert_eq!(order.quantity, 2);
        assert!(order.cream);
        assert!(!order.chocolate);
        assert_eq!(order.total, Price::new(dec!(12)));

        // Placing is a snapshot, not a reset.
        assert_eq!(state.quantity(), 2);
    }
}
