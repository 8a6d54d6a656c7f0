pub mod fade;
pub mod geo;
pub mod models;
pub mod visibility;
