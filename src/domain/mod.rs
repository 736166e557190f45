// Domain layer: value types shared by the calculator and adapters.

pub mod model;
