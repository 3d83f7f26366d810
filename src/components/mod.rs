//! View components.

pub mod architecture_diagram;
