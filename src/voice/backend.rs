//! Backend seams for host speech integrations.
//!
//! The session drives one synthesis backend and one recognition backend.
//! Hosts wrap their platform speech services in these traits; tests use
//! recording mocks.

use crate::error::Result;
use crate::voice::UtteranceId;

/// Speech-synthesis primitive operations.
///
/// Implementations own at most one utterance at a time; the session
/// guarantees `cancel` is called before a second `start`.
pub trait SynthesisBackend: Send {
    /// Begin speaking `text`. The id is echoed back through the session's
    /// completion events so stale utterances can be told apart.
    fn start(&mut self, id: UtteranceId, text: &str) -> Result<()>;

    /// Stop the in-flight utterance, if any. Idempotent.
    fn cancel(&mut self) -> Result<()>;

    /// Pause the in-flight utterance.
    fn pause(&mut self) -> Result<()>;

    /// Resume a paused utterance.
    fn resume(&mut self) -> Result<()>;
}

/// Speech-recognition primitive operations.
///
/// Single-shot sessions (no continuous mode, no interim results).
pub trait RecognitionBackend: Send {
    /// Begin one recognition session.
    fn start(&mut self) -> Result<()>;

    /// Stop the recognition session, if any. Idempotent.
    fn stop(&mut self) -> Result<()>;
}
