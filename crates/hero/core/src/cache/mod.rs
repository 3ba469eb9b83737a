//! Time-windowed memoization primitives.
mod clock;
mod keys;
mod ttl;

pub use clock::{Clock, ManualClock, SystemClock};
pub use keys::{FlagKey, FlagResolver};
pub use ttl::TtlCache;
