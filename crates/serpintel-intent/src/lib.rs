//! SERP archetype classification and keyword intent inference.
//!
//! Both stages are pure functions over immutable inputs: no I/O, no shared
//! state, safe to call from any number of threads.

pub mod archetype;
pub mod intent;

pub use archetype::{classify_domain, count_serp_archetypes};
pub use intent::{infer_intent, infer_intent_with, normalize_cpc, MAX_CPC};
