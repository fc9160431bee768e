use std::sync::mpsc::{channel, Receiver, Sender};

use serde::Serialize;
use tracing::debug;

use super::scene::SceneKey;

/// Broadcast payload published every time a scene becomes active. Carries
/// enough for a host shell to pick its affordances: which scene is up and
/// where the machine came from. Serializable so non-Rust hosts can take it
/// as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SceneActivated {
    pub scene: SceneKey,
    pub prior: Option<SceneKey>,
}

impl SceneActivated {
    /// The start/restart control is shown on every scene except the live
    /// game.
    pub fn shows_advance_control(&self) -> bool {
        self.scene != SceneKey::Game
    }

    pub fn prior_was_terminal(&self) -> bool {
        self.prior.is_some_and(SceneKey::is_terminal)
    }

    /// "Restart" once a playthrough has ended, "Start" otherwise.
    pub fn advance_label(&self) -> &'static str {
        if self.scene.is_terminal() || self.prior_was_terminal() {
            "Restart"
        } else {
            "Start"
        }
    }
}

/// Single-writer, multi-reader in-process broadcast. Delivery is
/// synchronous; subscribers whose receiving end is gone are pruned on the
/// next publish.
#[derive(Debug, Default)]
pub(crate) struct LifecycleBridge {
    subscribers: Vec<Sender<SceneActivated>>,
}

impl LifecycleBridge {
    pub(crate) fn subscribe(&mut self) -> Receiver<SceneActivated> {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        receiver
    }

    pub(crate) fn publish(&mut self, event: SceneActivated) {
        self.subscribers.retain(|sender| sender.send(event).is_ok());
        debug!(
            scene = event.scene.name(),
            subscribers = self.subscriber_count(),
            "scene_activated_published"
        );
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_every_subscriber() {
        let mut bridge = LifecycleBridge::default();
        let first = bridge.subscribe();
        let second = bridge.subscribe();

        let event = SceneActivated {
            scene: SceneKey::MainMenu,
            prior: Some(SceneKey::Boot),
        };
        bridge.publish(event);

        assert_eq!(first.try_recv(), Ok(event));
        assert_eq!(second.try_recv(), Ok(event));
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_publish() {
        let mut bridge = LifecycleBridge::default();
        let keep = bridge.subscribe();
        drop(bridge.subscribe());
        assert_eq!(bridge.subscriber_count(), 2);

        bridge.publish(SceneActivated {
            scene: SceneKey::Game,
            prior: Some(SceneKey::MainMenu),
        });

        assert_eq!(bridge.subscriber_count(), 1);
        assert!(keep.try_recv().is_ok());
    }

    #[test]
    fn advance_control_is_hidden_only_during_the_game() {
        let during_game = SceneActivated {
            scene: SceneKey::Game,
            prior: Some(SceneKey::MainMenu),
        };
        let on_menu = SceneActivated {
            scene: SceneKey::MainMenu,
            prior: Some(SceneKey::Boot),
        };
        assert!(!during_game.shows_advance_control());
        assert!(on_menu.shows_advance_control());
    }

    #[test]
    fn advance_label_distinguishes_start_from_restart() {
        let fresh_menu = SceneActivated {
            scene: SceneKey::MainMenu,
            prior: Some(SceneKey::Boot),
        };
        let game_over = SceneActivated {
            scene: SceneKey::GameOver,
            prior: Some(SceneKey::Game),
        };
        let menu_after_game_over = SceneActivated {
            scene: SceneKey::MainMenu,
            prior: Some(SceneKey::GameOver),
        };

        assert_eq!(fresh_menu.advance_label(), "Start");
        assert_eq!(game_over.advance_label(), "Restart");
        assert_eq!(menu_after_game_over.advance_label(), "Restart");
    }

    #[test]
    fn initial_activation_has_no_prior_scene() {
        let boot = SceneActivated {
            scene: SceneKey::Boot,
            prior: None,
        };
        assert!(!boot.prior_was_terminal());
        assert_eq!(boot.advance_label(), "Start");
    }
}
