mod journey;
mod route;

pub use journey::*;
pub use route::*;
