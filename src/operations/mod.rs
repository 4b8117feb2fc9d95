mod clip;
mod hull;
mod split;

pub use clip::ClipConvex;
pub use hull::ConvexHull;
pub use split::SplitConvex;

use crate::error::{OperationError, Result};

/// Rejects a tolerance that is negative or not finite.
fn check_epsilon(epsilon: f64) -> Result<()> {
    if epsilon.is_finite() && epsilon >= 0.0 {
        Ok(())
    } else {
        Err(OperationError::InvalidInput(format!(
            "tolerance {epsilon} must be finite and non-negative"
        ))
        .into())
    }
}
