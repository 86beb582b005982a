//! Top-level view dispatch.
//!
//! One section is visible at a time. The landing page is the hub: sections
//! are entered from it, and the only way out of a section is back to it.
//! There is no history stack and no deep linking. Navigating always drops
//! the previous section's state: a full unmount, never a background
//! suspend.

use std::any::Any;

/// The six feature views plus the landing hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Landing,
    Chat,
    ReportAnalyzer,
    Appointments,
    Articles,
    DietPlanner,
    FacilityMap,
}

impl Default for Section {
    fn default() -> Self {
        Self::Landing
    }
}

/// Single-selection dispatcher over the sections.
///
/// Owns the mounted section's state (transcripts, voice sessions, form
/// drafts) as an opaque box so that every transition drops it.
#[derive(Default)]
pub struct ViewController {
    current: Section,
    mounted_state: Option<Box<dyn Any>>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently visible section.
    pub fn current(&self) -> Section {
        self.current
    }

    /// Enter a section from the landing page, mounting its state.
    ///
    /// Returns `false` (and changes nothing) when a section is already
    /// open or when asked to "enter" the landing page itself: sections are
    /// only reachable from the hub.
    pub fn enter(&mut self, section: Section, state: Box<dyn Any>) -> bool {
        if self.current != Section::Landing || section == Section::Landing {
            return false;
        }
        self.current = section;
        self.mounted_state = Some(state);
        true
    }

    /// Return to the landing page, dropping the mounted section's state.
    pub fn back(&mut self) {
        self.current = Section::Landing;
        self.mounted_state = None;
    }

    /// Borrow the mounted section's state, if the type matches.
    pub fn state<T: 'static>(&self) -> Option<&T> {
        self.mounted_state.as_ref().and_then(|s| s.downcast_ref())
    }

    /// Mutably borrow the mounted section's state, if the type matches.
    pub fn state_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.mounted_state.as_mut().and_then(|s| s.downcast_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatTranscript;

    #[test]
    fn starts_on_landing() {
        let controller = ViewController::new();
        assert_eq!(controller.current(), Section::Landing);
    }

    #[test]
    fn enter_only_from_landing() {
        let mut controller = ViewController::new();
        assert!(controller.enter(Section::Chat, Box::new(ChatTranscript::new())));
        assert_eq!(controller.current(), Section::Chat);

        // Already in a section: no lateral navigation.
        assert!(!controller.enter(Section::DietPlanner, Box::new(())));
        assert_eq!(controller.current(), Section::Chat);
    }

    #[test]
    fn entering_landing_is_rejected() {
        let mut controller = ViewController::new();
        assert!(!controller.enter(Section::Landing, Box::new(())));
    }

    #[test]
    fn back_unmounts_section_state() {
        let mut controller = ViewController::new();
        controller.enter(Section::Chat, Box::new(ChatTranscript::new()));
        controller
            .state_mut::<ChatTranscript>()
            .expect("chat state mounted")
            .push_user("hello");
        assert_eq!(controller.state::<ChatTranscript>().map(ChatTranscript::len), Some(1));

        controller.back();
        assert_eq!(controller.current(), Section::Landing);
        assert!(controller.state::<ChatTranscript>().is_none());

        // Re-entering gets a fresh transcript, not the old one.
        controller.enter(Section::Chat, Box::new(ChatTranscript::new()));
        assert_eq!(controller.state::<ChatTranscript>().map(ChatTranscript::len), Some(0));
    }

    #[test]
    fn state_downcast_requires_matching_type() {
        let mut controller = ViewController::new();
        controller.enter(Section::DietPlanner, Box::new(42_u32));
        assert!(controller.state::<ChatTranscript>().is_none());
        assert_eq!(controller.state::<u32>(), Some(&42));
    }
}
