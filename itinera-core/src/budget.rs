use serde::{Deserialize, Serialize};

/// Budget below this is treated as low.
pub const LOW_BUDGET_CEILING: u32 = 30_000;
/// Budget below this (and at least the low ceiling) is mid-range.
pub const MID_BUDGET_CEILING: u32 = 70_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Mid,
    Premium,
}

impl BudgetTier {
    pub fn from_budget(budget: u32) -> Self {
        if budget < LOW_BUDGET_CEILING {
            BudgetTier::Low
        } else if budget < MID_BUDGET_CEILING {
            BudgetTier::Mid
        } else {
            BudgetTier::Premium
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            BudgetTier::Low => {
                "Opt for budget-friendly dining, public transport, and free attractions."
            }
            BudgetTier::Mid => {
                "Mix economical choices with occasional splurges on well-reviewed experiences."
            }
            BudgetTier::Premium => {
                "Enjoy premium experiences, fine dining, and exclusive guided tours."
            }
        }
    }
}

pub fn budget_tip(budget: u32) -> &'static str {
    BudgetTier::from_budget(budget).tip()
}
