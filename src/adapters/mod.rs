// Adapters layer: concrete readers for external tabular sources.

pub mod csv_source;
