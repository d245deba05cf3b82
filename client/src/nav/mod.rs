//! Session-routing core.
//!
//! DESIGN
//! ======
//! A `Session` value resolves to exactly one static `RouteGraph`; every
//! screen the app can show belongs to one of those graphs. Resolution is a
//! total function — a signed-in user without a role lands on the
//! role-selection graph instead of rendering nothing.

pub mod graph;
pub mod resolve;
pub mod session;

pub use graph::{Destination, GraphKind, RouteGraph, RoutingError};
pub use resolve::resolve_graph;
pub use session::{Role, Session};
