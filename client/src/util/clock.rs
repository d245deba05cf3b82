//! Wall-clock access for schedule partitioning.
//!
//! Browser builds read `Date.now()`; server rendering uses the epoch so SSR
//! output is deterministic and corrected on hydration.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            js_sys::Date::now() as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
