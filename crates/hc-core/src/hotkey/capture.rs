//! Hotkey capture state machine.
//!
//! Pure transition function for the armed/recording arbitration. The caller
//! runs the returned actions in order; every transition that changes what is
//! listening starts with [`CaptureAction::Disarm`].

use super::{ChordSpec, KeyEvent};

/// Capture state. Exactly one instance exists per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Listening for the held chord. `None` means inert.
    Armed(Option<ChordSpec>),
    /// Waiting for the user to press a new chord.
    Recording { previous: Option<ChordSpec> },
}

impl CaptureState {
    pub fn chord(&self) -> Option<ChordSpec> {
        match self {
            CaptureState::Armed(chord) => *chord,
            CaptureState::Recording { previous } => *previous,
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, CaptureState::Recording { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureEvent {
    /// Hold and listen for `chord` (start-up and re-arm).
    Arm(ChordSpec),
    StartRecording,
    CancelRecording,
    /// Key-down delivered to the recorder.
    RecordedKey(KeyEvent),
    Clear,
}

/// Progress notifications for a recording session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingSignal {
    Started,
    CandidateRejected { display: String },
    /// Recording ended; `chord` is what is held afterwards.
    Finished {
        chord: Option<ChordSpec>,
        display: String,
    },
}

impl RecordingSignal {
    fn finished(chord: Option<ChordSpec>) -> Self {
        RecordingSignal::Finished {
            chord,
            display: display_or_unset(chord),
        }
    }
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureAction {
    /// Drop every key subscription the service holds.
    Disarm,
    ArmMatcher(ChordSpec),
    ArmRecorder,
    PersistChord(ChordSpec),
    DeletePersistedChord,
    Notify(RecordingSignal),
}

pub fn display_or_unset(chord: Option<ChordSpec>) -> String {
    chord
        .map(|chord| chord.to_string())
        .unwrap_or_else(|| "not set".to_string())
}

pub struct CaptureMachine;

impl CaptureMachine {
    pub fn transition(state: CaptureState, event: CaptureEvent) -> (CaptureState, Vec<CaptureAction>) {
        match (state, event) {
            (CaptureState::Armed(_), CaptureEvent::Arm(chord)) => (
                CaptureState::Armed(Some(chord)),
                vec![CaptureAction::Disarm, CaptureAction::ArmMatcher(chord)],
            ),
            (CaptureState::Armed(previous), CaptureEvent::StartRecording) => (
                CaptureState::Recording { previous },
                vec![
                    CaptureAction::Disarm,
                    CaptureAction::ArmRecorder,
                    CaptureAction::Notify(RecordingSignal::Started),
                ],
            ),
            (CaptureState::Recording { previous }, CaptureEvent::CancelRecording) => {
                Self::restore(previous)
            }
            (CaptureState::Recording { previous }, CaptureEvent::RecordedKey(event)) => {
                if event.is_escape() {
                    return Self::restore(previous);
                }
                // wait for the non-modifier key of the chord
                if event.key_code.is_modifier() {
                    return (CaptureState::Recording { previous }, Vec::new());
                }
                let candidate = ChordSpec::from_key_event(&event);
                if !candidate.is_valid() {
                    return (
                        CaptureState::Recording { previous },
                        vec![CaptureAction::Notify(RecordingSignal::CandidateRejected {
                            display: candidate.to_string(),
                        })],
                    );
                }
                (
                    CaptureState::Armed(Some(candidate)),
                    vec![
                        CaptureAction::Disarm,
                        CaptureAction::PersistChord(candidate),
                        CaptureAction::ArmMatcher(candidate),
                        CaptureAction::Notify(RecordingSignal::finished(Some(candidate))),
                    ],
                )
            }
            (CaptureState::Armed(_), CaptureEvent::Clear) => (
                CaptureState::Armed(None),
                vec![CaptureAction::Disarm, CaptureAction::DeletePersistedChord],
            ),
            (CaptureState::Recording { .. }, CaptureEvent::Clear) => (
                CaptureState::Armed(None),
                vec![
                    CaptureAction::Disarm,
                    CaptureAction::DeletePersistedChord,
                    CaptureAction::Notify(RecordingSignal::finished(None)),
                ],
            ),
            (state, _event) => (state, Vec::new()),
        }
    }

    fn restore(previous: Option<ChordSpec>) -> (CaptureState, Vec<CaptureAction>) {
        let mut actions = vec![CaptureAction::Disarm];
        if let Some(chord) = previous {
            actions.push(CaptureAction::ArmMatcher(chord));
        }
        actions.push(CaptureAction::Notify(RecordingSignal::finished(previous)));
        (CaptureState::Armed(previous), actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotkey::{KeyCode, Modifiers};

    fn control_option_k() -> ChordSpec {
        ChordSpec::new(KeyCode::K, Modifiers::CONTROL | Modifiers::OPTION)
    }

    fn key(code: KeyCode, mods: Modifiers) -> CaptureEvent {
        CaptureEvent::RecordedKey(KeyEvent::new(code, mods))
    }

    #[test]
    fn start_recording_disarms_before_arming_recorder() {
        let (next, actions) = CaptureMachine::transition(
            CaptureState::Armed(Some(ChordSpec::default())),
            CaptureEvent::StartRecording,
        );
        assert_eq!(
            next,
            CaptureState::Recording {
                previous: Some(ChordSpec::default())
            }
        );
        assert_eq!(
            actions,
            vec![
                CaptureAction::Disarm,
                CaptureAction::ArmRecorder,
                CaptureAction::Notify(RecordingSignal::Started),
            ]
        );
    }

    #[test]
    fn escape_restores_previous_chord() {
        let state = CaptureState::Recording {
            previous: Some(ChordSpec::default()),
        };
        let (next, actions) =
            CaptureMachine::transition(state, key(KeyCode::ESCAPE, Modifiers::empty()));
        assert_eq!(next, CaptureState::Armed(Some(ChordSpec::default())));
        assert_eq!(actions[0], CaptureAction::Disarm);
        assert_eq!(actions[1], CaptureAction::ArmMatcher(ChordSpec::default()));
        assert!(!actions.iter().any(|a| matches!(a, CaptureAction::PersistChord(_))));
    }

    #[test]
    fn cancel_without_previous_chord_stays_inert() {
        let (next, actions) = CaptureMachine::transition(
            CaptureState::Recording { previous: None },
            CaptureEvent::CancelRecording,
        );
        assert_eq!(next, CaptureState::Armed(None));
        assert!(!actions.iter().any(|a| matches!(a, CaptureAction::ArmMatcher(_))));
    }

    #[test]
    fn valid_candidate_is_persisted_then_armed() {
        let (next, actions) = CaptureMachine::transition(
            CaptureState::Recording {
                previous: Some(ChordSpec::default()),
            },
            key(KeyCode::K, Modifiers::CONTROL | Modifiers::OPTION),
        );
        assert_eq!(next, CaptureState::Armed(Some(control_option_k())));
        assert_eq!(
            actions,
            vec![
                CaptureAction::Disarm,
                CaptureAction::PersistChord(control_option_k()),
                CaptureAction::ArmMatcher(control_option_k()),
                CaptureAction::Notify(RecordingSignal::Finished {
                    chord: Some(control_option_k()),
                    display: "⌃⌥K".into(),
                }),
            ]
        );
    }

    #[test]
    fn invalid_candidate_keeps_recording() {
        let state = CaptureState::Recording { previous: None };
        for mods in [Modifiers::COMMAND, Modifiers::SHIFT, Modifiers::empty()] {
            let (next, actions) = CaptureMachine::transition(state, key(KeyCode::V, mods));
            assert_eq!(next, state);
            assert!(matches!(
                actions.as_slice(),
                [CaptureAction::Notify(RecordingSignal::CandidateRejected { .. })]
            ));
        }
    }

    #[test]
    fn modifier_key_alone_is_ignored() {
        let state = CaptureState::Recording { previous: None };
        let (next, actions) =
            CaptureMachine::transition(state, key(KeyCode::SHIFT, Modifiers::CONTROL));
        assert_eq!(next, state);
        assert!(actions.is_empty());
    }

    #[test]
    fn pressing_held_chord_while_recording_reaccepts_it() {
        let (next, actions) = CaptureMachine::transition(
            CaptureState::Recording {
                previous: Some(ChordSpec::default()),
            },
            key(KeyCode::V, Modifiers::COMMAND | Modifiers::SHIFT),
        );
        assert_eq!(next, CaptureState::Armed(Some(ChordSpec::default())));
        assert!(actions.contains(&CaptureAction::PersistChord(ChordSpec::default())));
    }

    #[test]
    fn clear_unsubscribes_and_deletes() {
        let (next, actions) = CaptureMachine::transition(
            CaptureState::Armed(Some(ChordSpec::default())),
            CaptureEvent::Clear,
        );
        assert_eq!(next, CaptureState::Armed(None));
        assert_eq!(
            actions,
            vec![CaptureAction::Disarm, CaptureAction::DeletePersistedChord]
        );

        let (next, actions) = CaptureMachine::transition(
            CaptureState::Recording {
                previous: Some(ChordSpec::default()),
            },
            CaptureEvent::Clear,
        );
        assert_eq!(next, CaptureState::Armed(None));
        assert_eq!(actions.len(), 3);
    }

    #[test]
    fn redundant_events_are_noops() {
        let armed = CaptureState::Armed(Some(ChordSpec::default()));
        for event in [
            CaptureEvent::CancelRecording,
            key(KeyCode::K, Modifiers::CONTROL),
        ] {
            let (next, actions) = CaptureMachine::transition(armed, event);
            assert_eq!(next, armed);
            assert!(actions.is_empty());
        }

        let recording = CaptureState::Recording { previous: None };
        for event in [CaptureEvent::StartRecording, CaptureEvent::Arm(control_option_k())] {
            let (next, actions) = CaptureMachine::transition(recording, event);
            assert_eq!(next, recording);
            assert!(actions.is_empty());
        }
    }
}
