pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::csv_source::{read_coders, read_coders_from_path};
pub use config::CalculatorSettings;
pub use core::bmi::{
    find_coder_with_worst_bmi, get_bmi_scores, is_diet_recommended, BmiCalculator,
};
pub use domain::model::Coder;
pub use utils::error::{BmiError, Result};
