//! Savings goals module - target/current amount trackers.

mod savings_goals_model;
mod savings_goals_service;
mod savings_goals_traits;

pub use savings_goals_model::{NewSavingsGoal, SavingsGoal};
pub use savings_goals_service::SavingsGoalService;
pub use savings_goals_traits::{SavingsGoalRepositoryTrait, SavingsGoalServiceTrait};
