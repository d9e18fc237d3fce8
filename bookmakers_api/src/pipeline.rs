//! The load pipeline: fetch, validate, sort, and hand off to a renderer.

use crate::{client::Client, sort, sort::SortMode};
use crate::types::Bookmaker;

/// Output seam the pipeline delivers into. A successful load renders the
/// ordered entries; any failure shows a single error message instead.
/// Each call fully replaces whatever the renderer showed before.
pub trait Renderer {
    /// Replaces the previous output with one row per entry, in order.
    fn render(&mut self, entries: &[Bookmaker]);

    /// Replaces the previous output with a single error row.
    fn show_error(&mut self, message: &str);
}

/// Runs one full load: fetch `bookmakers.json`, sort per `mode`, render.
///
/// Every failure is routed to [`Renderer::show_error`] with the
/// failure's display message; nothing propagates past this boundary.
/// The renderer never sees an empty list, the client rejects that as a
/// shape error first.
pub async fn load<R: Renderer>(client: &Client, mode: SortMode, renderer: &mut R) {
    match client.get_bookmakers().await {
        Ok(entries) => renderer.render(&sort::sorted(&entries, mode)),
        Err(e) => {
            tracing::error!("Load failed: {}", e);
            renderer.show_error(&e.to_string());
        }
    }
}
