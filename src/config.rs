use dioxus::prelude::*;
use log::LevelFilter;

use crate::router::Route;

#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Router setup shared by every platform. Only the history backend differs:
/// `web` builds get URL-bar history mode, desktop builds an in-memory stack.
pub fn router_config() -> RouterConfig<Route> {
    RouterConfig::default()
        .history(history())
        .on_update(|state| {
            log::debug!("navigated to {}", state.current());
            None
        })
}

// Browser builds drive navigation from the URL bar without reloading the page.
#[cfg(feature = "web")]
fn history() -> WebHistory<Route> {
    WebHistory::default()
}

// Desktop windows have no URL bar, so history lives in memory and starts at `/`.
#[cfg(not(feature = "web"))]
fn history() -> MemoryHistory<Route> {
    MemoryHistory::default()
}
