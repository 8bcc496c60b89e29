//! Chart Context - 图表

mod entities;
mod errors;
mod value_objects;

pub use entities::{ChartObject, ChartSet, ChartSpec, FigureSpec, LABEL_ROTATION_DEGREES};
pub use errors::ChartError;
pub use value_objects::{ChartKind, ChartLibrary};
