//! Budget limits module - per-category spending ceilings.

mod budget_limits_model;
mod budget_limits_service;
mod budget_limits_traits;

pub use budget_limits_model::{BudgetLimit, NewBudgetLimit};
pub use budget_limits_service::BudgetLimitService;
pub use budget_limits_traits::{BudgetLimitRepositoryTrait, BudgetLimitServiceTrait};
