pub mod hit_testing;

pub use hit_testing::{outline_bounds, point_in_polygon};
