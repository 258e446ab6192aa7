use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rentledger_core::{Entity, RentalError, RentalResult};
use rentledger_inventory::{Equipment, Inventory};

/// A renting member and their cash balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    name: String,
    balance: i64,
}

impl Member {
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Rent every item in `equipment_to_rent` for `number_of_days` days.
    ///
    /// Each requested name must match a distinct available inventory entry, so
    /// a name that is missing, unavailable or listed twice fails the whole
    /// request with [`RentalError::EquipmentNotAvailable`]. The total
    /// (`Σ rental_cost × number_of_days`) must not exceed the balance, else
    /// [`RentalError::NotEnoughBalance`].
    ///
    /// All checks run before the balance is touched: on error nothing changes.
    /// The dates are recorded in logs only; availability flags are left as-is.
    pub fn rent<S: AsRef<str>>(
        &mut self,
        inventory: &Inventory,
        equipment_to_rent: &[S],
        start_date: &str,
        end_date: &str,
        number_of_days: i64,
    ) -> RentalResult<()> {
        let matched: Vec<&Equipment> = inventory
            .iter()
            .filter(|e| e.available && equipment_to_rent.iter().any(|n| e.is(n.as_ref())))
            .collect();

        if matched.len() != equipment_to_rent.len() {
            debug!(
                member = %self.name,
                requested = equipment_to_rent.len(),
                matched = matched.len(),
                "rental rejected: equipment not available"
            );
            return Err(RentalError::EquipmentNotAvailable);
        }

        // A single cost × days product always fits in i128; only the sum can overflow.
        let Some(total_cost) = matched.iter().try_fold(0i128, |total, e| {
            total.checked_add(i128::from(e.rental_cost) * i128::from(number_of_days))
        }) else {
            debug!(
                member = %self.name,
                items = matched.len(),
                days = number_of_days,
                "rental rejected: total cost overflows"
            );
            return Err(RentalError::NotEnoughBalance);
        };

        let balance = i128::from(self.balance);
        if total_cost > balance {
            debug!(
                member = %self.name,
                balance = self.balance,
                total_cost = %total_cost,
                "rental rejected: not enough balance"
            );
            return Err(RentalError::NotEnoughBalance);
        }

        // Only a negative total can push the result past i64::MAX; the balance
        // saturates there instead of wrapping.
        self.balance = i64::try_from(balance - total_cost).unwrap_or(i64::MAX);

        info!(
            member = %self.name,
            items = matched.len(),
            start_date,
            end_date,
            days = number_of_days,
            total_cost = %total_cost,
            balance = self.balance,
            "equipment rented"
        );
        Ok(())
    }
}
