//! Async hosting for a session on tokio time.

use tracing::debug;

use crate::core::TokioClock;
use crate::session::{GameSession, Selection};

/// Sleep until the pending draw is due, then run it.
///
/// Returns `None` right away when nothing is pending. Dropping the future
/// before it completes leaves the session in `Selecting`; follow up with
/// `cancel_selection` or `reset` when the host goes away.
pub async fn await_selection(session: &mut GameSession<TokioClock>) -> Option<Selection> {
    loop {
        let remaining = session.time_until_selection()?;
        if !remaining.is_zero() {
            debug!(remaining_ms = remaining.as_millis() as u64, "waiting for draw");
            tokio::time::sleep(remaining).await;
        }
        if let Some(selection) = session.poll() {
            return Some(selection);
        }
    }
}
