pub mod catalog;
pub mod journey;
pub mod shared;
pub mod source;

pub mod prelude {
    pub use crate::catalog::{Catalog, Route};
    pub use crate::journey::{Journey, JourneyKind, Planner, search_direct};
    pub use crate::journey::{filter, matcher, rank, segment, transfer};
    pub use crate::shared::Metrics;
    pub use crate::shared::fare;
    pub use crate::shared::geo::Coordinate;
    pub use crate::source::Source;
}
