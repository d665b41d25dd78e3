pub mod backtracking;
pub mod dominating_set;

pub use backtracking::{BacktrackingSolver, minimum_dominating_set, solve_with_budget};
pub use dominating_set::DominatingSet;
