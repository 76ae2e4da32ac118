pub mod model;
pub mod predict;
