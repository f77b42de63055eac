// tests/support/mocks/mod.rs
pub mod lookup;
pub mod time;
pub mod util;

pub use lookup::{FailingLookup, StaticRowsLookup};
pub use time::fixed_now;
pub use util::{DummyClock, DummySlug};
