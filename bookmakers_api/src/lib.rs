//! Data layer for the bookmakers board: HTTP client, sort modes, tab
//! parameter extraction, and the fetch-validate-sort-render pipeline.

mod client;
mod errors;
pub mod pipeline;
pub mod sort;
pub mod tabs;
pub mod types;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::pipeline::Renderer;
pub use self::sort::{SortMode, Subrating};
pub use self::tabs::{Tab, TabSet};
