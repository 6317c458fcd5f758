//! Page Controllers
//!
//! Fetch-then-render logic of both pages, generic over the data source
//! ([`BossApi`](crate::api::BossApi)) and the rendering surface.

mod detail;
mod list;

pub use detail::*;
pub use list::*;
