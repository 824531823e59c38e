pub mod cs;
pub mod error;

pub use cs::dynamic;
pub use cs::dynamic::{min_coins_for_change, ChangeSolver};
pub use error::{ChangeError, Result};
