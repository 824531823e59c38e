pub mod change_solver;
pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use change_solver::ChangeSolver;
pub use coin_change::min_coins_for_change;
