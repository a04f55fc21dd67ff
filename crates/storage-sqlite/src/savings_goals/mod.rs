//! SQLite storage implementation for savings goals.

mod model;
mod repository;

pub use model::SavingsGoalDB;
pub use repository::SavingsGoalRepository;
