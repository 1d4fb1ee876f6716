//! Coins and the decoration inventory.

use std::collections::BTreeMap;

/// Wallet and owned-but-unplaced items keyed by catalog id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Economy {
    pub coins: u64,
    pub inventory: BTreeMap<String, u32>,
}

impl Economy {
    /// Quantity held for `item_id` (zero when never owned).
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.inventory.get(item_id).copied().unwrap_or(0)
    }

    pub fn credit(&mut self, amount: u64) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Removes `amount` coins if the balance covers it.
    pub fn try_debit(&mut self, amount: u64) -> bool {
        match self.coins.checked_sub(amount) {
            Some(remaining) => {
                self.coins = remaining;
                true
            }
            None => false,
        }
    }

    /// Adds one unit of `item_id`, inserting the entry when missing.
    pub fn stock(&mut self, item_id: &str) {
        let quantity = self.inventory.entry(item_id.to_owned()).or_insert(0);
        *quantity = quantity.saturating_add(1);
    }

    /// Takes one unit of `item_id` out of the inventory.
    ///
    /// The entry is kept at zero so the item still shows as previously owned.
    pub fn take(&mut self, item_id: &str) -> bool {
        match self.inventory.get_mut(item_id) {
            Some(quantity) if *quantity > 0 => {
                *quantity -= 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_requires_balance() {
        let mut economy = Economy {
            coins: 10,
            ..Economy::default()
        };
        assert!(!economy.try_debit(50));
        assert_eq!(economy.coins, 10);
        assert!(economy.try_debit(10));
        assert_eq!(economy.coins, 0);
    }

    #[test]
    fn stock_and_take_track_quantity() {
        let mut economy = Economy::default();
        assert!(!economy.take("rock_1"));

        economy.stock("rock_1");
        economy.stock("rock_1");
        assert_eq!(economy.quantity("rock_1"), 2);

        assert!(economy.take("rock_1"));
        assert!(economy.take("rock_1"));
        assert!(!economy.take("rock_1"));
        assert_eq!(economy.inventory.get("rock_1"), Some(&0));
    }
}
