//! Game notifications
//!
//! The engine pushes [`GameEvent`]s to every registered [`GameObserver`]
//! synchronously, in registration order. Delivery is fire-and-forget.

use serde::Serialize;
use std::sync::mpsc::Sender;

/// Notification emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// A new target was chosen; the definition is meant for hint display
    TargetSelected { word: String, definition: String },
    /// The player guessed the target on attempt `attempts`
    Won {
        word: String,
        definition: String,
        attempts: usize,
    },
    /// The player used every attempt without guessing the target
    Lost {
        word: String,
        definition: String,
        attempts: usize,
    },
}

impl GameEvent {
    /// Check if this event ends a game
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// Handle returned by `GuessEngine::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(super) usize);

/// Receiver of engine notifications
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> GameObserver for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// Forward events over a channel; a dropped receiver is ignored
impl GameObserver for Sender<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        let _ = self.send(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn won() -> GameEvent {
        GameEvent::Won {
            word: "stare".to_string(),
            definition: "To look fixedly.".to_string(),
            attempts: 3,
        }
    }

    #[test]
    fn terminal_events() {
        assert!(won().is_terminal());
        assert!(
            !GameEvent::TargetSelected {
                word: "stare".to_string(),
                definition: String::new(),
            }
            .is_terminal()
        );
    }

    #[test]
    fn closure_observer_receives_event() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &GameEvent| seen.push(event.clone());
            observer.on_event(&won());
        }
        assert_eq!(seen, vec![won()]);
    }

    #[test]
    fn channel_observer_forwards_and_tolerates_closed_receiver() {
        let (mut tx, rx) = mpsc::channel();
        tx.on_event(&won());
        assert_eq!(rx.try_recv().unwrap(), won());

        drop(rx);
        tx.on_event(&won());
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(won()).unwrap();
        assert_eq!(json["type"], "won");
        assert_eq!(json["attempts"], 3);
    }
}
