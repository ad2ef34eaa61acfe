//! Shared numeric helpers.

mod vector;

pub use vector::{center_vector, mean, sum_of_products};
