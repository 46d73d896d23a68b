//! Serving scale model

use serde::{Deserialize, Serialize};

/// An original/target serving pair chosen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServingScale {
    pub original: u32,
    pub target: u32,
}

impl ServingScale {
    pub fn new(original: u32, target: u32) -> Self {
        Self { original, target }
    }

    /// `target / original`, or `None` when there are no original servings
    pub fn factor(&self) -> Option<f64> {
        if self.original == 0 {
            return None;
        }
        Some(self.target as f64 / self.original as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor() {
        assert_eq!(ServingScale::new(4, 6).factor(), Some(1.5));
        assert_eq!(ServingScale::new(2, 5).factor(), Some(2.5));
        assert_eq!(ServingScale::new(4, 4).factor(), Some(1.0));
    }

    #[test]
    fn test_zero_original_has_no_factor() {
        assert_eq!(ServingScale::new(0, 4).factor(), None);
    }
}
