//! Provider adapters that turn raw SERP scrapes into the canonical
//! [`serpintel_core::NormalizedSerpResult`].

pub mod adapter;
pub mod apify;
pub mod clock;
pub mod error;

mod parse_helpers;

pub use adapter::SerpAdapter;
pub use apify::{ApifyGoogleSearchAdapter, ACTOR, PROVIDER};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::AdapterError;
