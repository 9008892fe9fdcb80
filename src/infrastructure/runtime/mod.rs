//! Search runtime - the async worker plus the bridge the UI talks to.

mod bridge;
mod worker;

use std::time::Duration;

pub use bridge::{SearchBridge, SearchCommand, SearchEvent};
pub use worker::resolve_identifier;

/// Quiet period before a name query is sent.
pub const NAME_SEARCH_DEBOUNCE: Duration = Duration::from_millis(1000);
