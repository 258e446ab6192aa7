use serde::{Deserialize, Serialize};

use rentledger_core::Entity;

/// A rentable item, identified by its (case-sensitive) name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    /// Price per rented day, in whole currency units.
    pub rental_cost: i64,
    pub available: bool,
}

impl Equipment {
    /// New, available equipment.
    pub fn new(name: impl Into<String>, rental_cost: i64) -> Self {
        Self {
            name: name.into(),
            rental_cost,
            available: true,
        }
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rental_cost(&self) -> i64 {
        self.rental_cost
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}

impl Entity for Equipment {
    type Id = str;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
