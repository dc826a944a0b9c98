mod path;
mod reviews;
mod routes;
mod search;

pub use path::*;
pub use reviews::*;
pub use routes::*;
pub use search::*;
