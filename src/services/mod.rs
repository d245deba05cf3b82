//! Service modules behind the HTTP handlers.

pub mod session;
