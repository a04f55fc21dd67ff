//! SQLite storage implementation for budget limits.

mod model;
mod repository;

pub use model::BudgetLimitDB;
pub use repository::BudgetLimitRepository;
