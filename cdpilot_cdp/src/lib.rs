//! Hand-curated subset of the Chrome DevTools Protocol.
//!
//! A full build of this crate would be generated from the upstream `.pdl`
//! protocol descriptions the way `chromiumoxide_cdp` generates its types
//! from `browser_protocol.pdl`/`js_protocol.pdl`. Generating and vendoring
//! the entire protocol surface is out of scope for the core this crate
//! backs; instead each module below covers exactly the commands, events
//! and return types the session/element layer in the `cdpilot` crate
//! issues, written in the same shape a generator would produce.

pub mod browser_protocol {
    pub mod browser;
    pub mod dom;
    pub mod input;
    pub mod network;
    pub mod page;
    pub mod storage;
    pub mod target;
}

pub mod js_protocol {
    pub mod runtime;
}

pub use cdpilot_types as types;
