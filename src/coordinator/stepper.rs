//! Quantity stepper behind each menu card's `-` / `+` buttons.

use serde::Serialize;

/// Smallest quantity a stepper will show
pub const MIN_QUANTITY: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityStepper {
    quantity: u32,
}

impl Default for QuantityStepper {
    fn default() -> Self {
        Self {
            quantity: MIN_QUANTITY,
        }
    }
}

impl QuantityStepper {
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `-` is disabled at the minimum
    pub fn can_decrement(&self) -> bool {
        self.quantity > MIN_QUANTITY
    }

    pub fn increment(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_add(1);
        self.quantity
    }

    pub fn decrement(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_sub(1).max(MIN_QUANTITY);
        self.quantity
    }

    /// Returns the current quantity and resets to the minimum
    pub fn take(&mut self) -> u32 {
        std::mem::take(self).quantity
    }
}

/// Quantity the cart line `-` button asks for, never below the minimum
pub fn decremented(quantity: u32) -> u32 {
    quantity.saturating_sub(1).max(MIN_QUANTITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one_and_floors_there() {
        let mut stepper = QuantityStepper::default();
        assert_eq!(stepper.quantity(), 1);
        assert!(!stepper.can_decrement());
        assert_eq!(stepper.decrement(), 1);
    }

    #[test]
    fn take_resets_to_one() {
        let mut stepper = QuantityStepper::default();
        stepper.increment();
        stepper.increment();
        assert!(stepper.can_decrement());
        assert_eq!(stepper.take(), 3);
        assert_eq!(stepper.quantity(), 1);
    }

    #[test]
    fn line_decrement_never_goes_below_one() {
        assert_eq!(decremented(5), 4);
        assert_eq!(decremented(1), 1);
        assert_eq!(decremented(0), 1);
    }
}
