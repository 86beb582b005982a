//! Voice session wrapper: one utterance, one recognition session, never both.
//!
//! A [`VoiceSession`] is constructed by the view that needs it and dropped
//! when that view goes away; dropping cancels any live utterance and stops
//! recognition, so navigating away cannot leak a speaking session. There is
//! no global singleton.
//!
//! The session moves between three states:
//!
//! ```text
//!            speak()                    start_listening()
//!   Idle ───────────────▶ Speaking    Idle ───────────────▶ Listening
//!     ▲                      │           ▲                      │
//!     └──── end / error ─────┘           └── result / error ────┘
//! ```
//!
//! `speak` always cancels the previous utterance first, and
//! `start_listening` cancels a live utterance *before* the recognition
//! backend is started, so there is no window in which both are active.
//! Completion events carry the utterance id they belong to; events for a
//! cancelled utterance are ignored.

pub mod backend;

use crate::error::{CompanionError, Result};
use backend::{RecognitionBackend, SynthesisBackend};
use tracing::{debug, warn};

/// Identifier for one synthesized utterance.
///
/// Monotonically increasing within a session; a cancelled utterance's id is
/// never reused, which is what lets the session drop stale end events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtteranceId(u64);

/// What the session is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    /// Nothing in flight.
    Idle,
    /// One utterance is being synthesized.
    Speaking {
        /// Whether playback is paused.
        paused: bool,
    },
    /// One recognition session is running.
    Listening,
}

/// Which speech capabilities the host environment provides.
///
/// Probed once at session construction; operations on a missing capability
/// report [`CompanionError::VoiceUnavailable`] instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceCapability {
    pub synthesis: bool,
    pub recognition: bool,
}

/// A recognition outcome delivered back to the session owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    /// A final transcript.
    Transcript(String),
    /// The recognition session failed (e.g. microphone permission denied).
    Failed(String),
}

/// Manages a single speech-synthesis utterance and a single
/// speech-recognition session with mutual exclusion between the two.
pub struct VoiceSession {
    synthesis: Option<Box<dyn SynthesisBackend>>,
    recognition: Option<Box<dyn RecognitionBackend>>,
    capability: VoiceCapability,
    state: VoiceState,
    /// Id of the live utterance, if any.
    current_utterance: Option<UtteranceId>,
    next_utterance: u64,
}

impl VoiceSession {
    /// Construct a session from whatever backends the host provides.
    ///
    /// A missing backend just marks that capability unavailable; the
    /// session itself always constructs.
    pub fn new(
        synthesis: Option<Box<dyn SynthesisBackend>>,
        recognition: Option<Box<dyn RecognitionBackend>>,
    ) -> Self {
        let capability = VoiceCapability {
            synthesis: synthesis.is_some(),
            recognition: recognition.is_some(),
        };
        Self {
            synthesis,
            recognition,
            capability,
            state: VoiceState::Idle,
            current_utterance: None,
            next_utterance: 0,
        }
    }

    /// The capability probe result computed at construction.
    pub fn capability(&self) -> VoiceCapability {
        self.capability
    }

    /// Current session state.
    pub fn state(&self) -> VoiceState {
        self.state
    }

    /// Whether an utterance is live (paused counts as speaking).
    pub fn is_speaking(&self) -> bool {
        matches!(self.state, VoiceState::Speaking { .. })
    }

    /// The id of the live utterance, if any.
    pub fn current_utterance(&self) -> Option<UtteranceId> {
        self.current_utterance
    }

    /// Speak `text`, cancelling any in-flight utterance first.
    ///
    /// If the session was Listening, recognition is stopped. At most one
    /// utterance is alive afterwards.
    ///
    /// # Errors
    ///
    /// [`CompanionError::VoiceUnavailable`] when the host has no synthesis
    /// backend; [`CompanionError::Voice`] when the backend fails to start.
    pub fn speak(&mut self, text: &str) -> Result<UtteranceId> {
        if !self.capability.synthesis {
            return Err(CompanionError::VoiceUnavailable(
                "speech synthesis is not available".to_owned(),
            ));
        }
        if self.state == VoiceState::Listening {
            self.stop_listening();
        }
        self.cancel();

        let id = UtteranceId(self.next_utterance);
        self.next_utterance += 1;

        if let Some(synthesis) = self.synthesis.as_mut() {
            synthesis.start(id, text)?;
        }
        self.current_utterance = Some(id);
        self.state = VoiceState::Speaking { paused: false };
        debug!(utterance = id.0, "speaking");
        Ok(id)
    }

    /// Cancel the in-flight utterance, if any, returning to Idle.
    ///
    /// The cancelled utterance's end event will be ignored if the backend
    /// still delivers it. Backend cancel failures are logged, not surfaced:
    /// the session must always reach Idle.
    pub fn cancel(&mut self) {
        if !self.is_speaking() {
            return;
        }
        if let Some(synthesis) = self.synthesis.as_mut() {
            if let Err(e) = synthesis.cancel() {
                warn!(error = %e, "synthesis cancel failed");
            }
        }
        self.current_utterance = None;
        self.state = VoiceState::Idle;
    }

    /// Pause the live utterance. No effect unless Speaking and unpaused.
    pub fn pause(&mut self) -> Result<()> {
        if self.state != (VoiceState::Speaking { paused: false }) {
            return Ok(());
        }
        if let Some(synthesis) = self.synthesis.as_mut() {
            synthesis.pause()?;
        }
        self.state = VoiceState::Speaking { paused: true };
        Ok(())
    }

    /// Resume a paused utterance. No effect unless Speaking and paused.
    pub fn resume(&mut self) -> Result<()> {
        if self.state != (VoiceState::Speaking { paused: true }) {
            return Ok(());
        }
        if let Some(synthesis) = self.synthesis.as_mut() {
            synthesis.resume()?;
        }
        self.state = VoiceState::Speaking { paused: false };
        Ok(())
    }

    /// Begin one recognition session.
    ///
    /// A live utterance is cancelled synchronously *before* the recognition
    /// backend starts, so speaking and listening can never overlap.
    ///
    /// # Errors
    ///
    /// [`CompanionError::VoiceUnavailable`] when the host has no recognition
    /// backend; [`CompanionError::Voice`] when the backend fails to start
    /// (the session stays Idle in that case).
    pub fn start_listening(&mut self) -> Result<()> {
        if !self.capability.recognition {
            return Err(CompanionError::VoiceUnavailable(
                "speech recognition is not available".to_owned(),
            ));
        }
        if self.state == VoiceState::Listening {
            return Ok(());
        }
        self.cancel();

        if let Some(recognition) = self.recognition.as_mut() {
            recognition.start()?;
        }
        self.state = VoiceState::Listening;
        debug!("listening");
        Ok(())
    }

    /// Stop the recognition session, if any, returning to Idle.
    pub fn stop_listening(&mut self) {
        if self.state != VoiceState::Listening {
            return;
        }
        if let Some(recognition) = self.recognition.as_mut() {
            if let Err(e) = recognition.stop() {
                warn!(error = %e, "recognition stop failed");
            }
        }
        self.state = VoiceState::Idle;
    }

    /// Backend event: utterance `id` finished naturally.
    ///
    /// Returns `true` if the event applied to the live utterance. Events
    /// for cancelled or superseded utterances are ignored.
    pub fn utterance_ended(&mut self, id: UtteranceId) -> bool {
        if self.current_utterance != Some(id) {
            debug!(utterance = id.0, "ignoring stale utterance end");
            return false;
        }
        self.current_utterance = None;
        self.state = VoiceState::Idle;
        true
    }

    /// Backend event: utterance `id` failed. Stale ids are ignored.
    pub fn utterance_failed(&mut self, id: UtteranceId, reason: &str) -> bool {
        if self.current_utterance != Some(id) {
            return false;
        }
        warn!(utterance = id.0, reason, "utterance failed");
        self.current_utterance = None;
        self.state = VoiceState::Idle;
        true
    }

    /// Backend event: the recognition session produced a transcript or
    /// failed. Either way the session returns to Idle; a recognition error
    /// (e.g. microphone denied) never leaves it stuck Listening.
    pub fn recognition_finished(&mut self, outcome: RecognitionOutcome) -> RecognitionOutcome {
        if self.state == VoiceState::Listening {
            self.state = VoiceState::Idle;
        }
        if let RecognitionOutcome::Failed(ref reason) = outcome {
            warn!(reason, "recognition failed");
        }
        outcome
    }
}

impl Drop for VoiceSession {
    fn drop(&mut self) {
        self.cancel();
        self.stop_listening();
    }
}
