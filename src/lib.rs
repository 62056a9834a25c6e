#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod map_view;
pub mod navigation;
pub mod panels;
pub mod region;
pub mod selection;
pub mod transform;

pub use app::MapApp;
pub use config::GestureConfig;
pub use error::{ConfigError, RegionMapError};
pub use input::{GestureInterpreter, GestureOutput, GestureState, TouchEvent, TouchPoint, TouchSet};
pub use map_view::MapView;
pub use navigation::{Navigator, Route};
pub use region::{Region, RegionMap};
pub use selection::{RegionHit, RegionHitTest};
pub use transform::{MapTransform, TransformAccumulator, TransformDelta};
