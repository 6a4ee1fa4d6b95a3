pub mod responses;
pub mod router;

pub use router::{route, Intent, ResponseTag, RouteResponse};
