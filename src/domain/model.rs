use serde::{Deserialize, Serialize};

/// A person's height (meters) and weight (kilograms).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coder {
    pub height: f64,
    pub weight: f64,
}

impl Coder {
    pub fn new(height: f64, weight: f64) -> Self {
        Self { height, weight }
    }
}
