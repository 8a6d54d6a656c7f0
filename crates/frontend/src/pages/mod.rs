pub mod add_listing;
pub mod browse;
