//! Rendering core: peer view building and report assembly
//!
//! Shared by both delivery adapters (server-rendered HTML and the JSON
//! API) so the derivation logic exists exactly once.

pub mod builder;
pub mod render;

pub use builder::{build_rows, PeerRow, ONLINE_TOOLTIP};
pub use render::{Report, REPORT_HEADERS};
