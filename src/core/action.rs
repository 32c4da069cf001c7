//! # Actions
//!
//! Everything that can happen in Settle becomes an `Action`.
//! User picks a friend? That's `Action::SelectFriend(id)`.
//! Split form submitted? That's `Action::SplitBill(delta)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state in place. No I/O here beyond logging.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Panel transitions:
//!
//! ```text
//!            ToggleAddForm                 SelectFriend(id)
//!   None ───────────────▶ AddingFriend ───────────────────▶ SplittingBill(id)
//!    ▲  ◀───────────────       │       ◀───────────────────        │
//!    │    ToggleAddForm        │          ToggleAddForm            │
//!    │                         │ AddFriend                         │ SplitBill / SelectFriend(id)
//!    └─────────────────────────┴───────────────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::core::friend::{Friend, FriendId, format_amount};
use crate::core::state::{App, Panel};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleAddForm,
    /// Append an already-validated friend.
    AddFriend(Friend),
    /// Select a friend, or close the split form if it is already selected.
    SelectFriend(FriendId),
    /// Add a signed delta to the selected friend's balance.
    SplitBill(f64),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} (panel={:?})", action, app.panel);

    match action {
        Action::ToggleAddForm => {
            app.panel = match app.panel {
                Panel::AddingFriend => Panel::None,
                Panel::None | Panel::SplittingBill(_) => Panel::AddingFriend,
            };
            Effect::None
        }
        Action::AddFriend(friend) => {
            info!("Added friend {} ({})", friend.name, friend.id);
            app.status_message = format!("Added {}", friend.name);
            app.friends.push(friend);
            app.panel = Panel::None;
            Effect::None
        }
        Action::SelectFriend(id) => {
            if app.friend(&id).is_none() {
                warn!("SelectFriend ignored: no friend with id {}", id);
                return Effect::None;
            }
            app.panel = match &app.panel {
                Panel::SplittingBill(current) if *current == id => Panel::None,
                _ => Panel::SplittingBill(id),
            };
            Effect::None
        }
        Action::SplitBill(delta) => {
            let Some(id) = app.selected_id().cloned() else {
                warn!("SplitBill ignored: no friend selected");
                return Effect::None;
            };
            app.friends = app
                .friends
                .iter()
                .map(|friend| {
                    if friend.id == id {
                        Friend {
                            balance: friend.balance + delta,
                            ..friend.clone()
                        }
                    } else {
                        friend.clone()
                    }
                })
                .collect();
            let status = app.friend(&id).map(|friend| {
                info!(
                    "Split bill with {}: delta {}, balance now {}",
                    friend.name, delta, friend.balance
                );
                format!(
                    "Split with {}: {}{}",
                    friend.name,
                    signed_amount(delta),
                    app.settings.currency
                )
            });
            if let Some(status) = status {
                app.status_message = status;
            }
            app.panel = Panel::None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn signed_amount(delta: f64) -> String {
    if delta < 0.0 {
        format!("-{}", format_amount(delta.abs()))
    } else {
        format!("+{}", format_amount(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_friend};

    fn three_friends() -> App {
        test_app(vec![
            test_friend("1", "Clark", -7.0),
            test_friend("2", "Sarah", 20.0),
            test_friend("3", "Anthony", 0.0),
        ])
    }

    #[test]
    fn test_toggle_add_form() {
        let mut app = three_friends();
        update(&mut app, Action::ToggleAddForm);
        assert_eq!(app.panel, Panel::AddingFriend);
        update(&mut app, Action::ToggleAddForm);
        assert_eq!(app.panel, Panel::None);
    }

    #[test]
    fn test_toggle_add_form_while_splitting_drops_selection() {
        let mut app = three_friends();
        update(&mut app, Action::SelectFriend(FriendId::from("1")));
        update(&mut app, Action::ToggleAddForm);
        assert_eq!(app.panel, Panel::AddingFriend);
        assert!(app.selected_id().is_none());
    }

    #[test]
    fn test_add_friend_appends_and_closes_form() {
        let mut app = three_friends();
        let before = app.friends.clone();
        update(&mut app, Action::ToggleAddForm);

        update(&mut app, Action::AddFriend(test_friend("4", "Dana", 0.0)));

        assert_eq!(app.friends.len(), 4);
        assert_eq!(&app.friends[..3], &before[..]);
        assert_eq!(app.friends[3].name, "Dana");
        assert_eq!(app.panel, Panel::None);
    }

    #[test]
    fn test_select_friend_closes_add_form() {
        let mut app = three_friends();
        update(&mut app, Action::ToggleAddForm);
        update(&mut app, Action::SelectFriend(FriendId::from("2")));
        assert_eq!(app.panel, Panel::SplittingBill(FriendId::from("2")));
        assert!(!app.is_add_form_open());
    }

    #[test]
    fn test_select_same_friend_twice_clears_selection() {
        let mut app = three_friends();
        update(&mut app, Action::SelectFriend(FriendId::from("2")));
        update(&mut app, Action::SelectFriend(FriendId::from("2")));
        assert_eq!(app.panel, Panel::None);
    }

    #[test]
    fn test_select_other_friend_switches_selection() {
        let mut app = three_friends();
        update(&mut app, Action::SelectFriend(FriendId::from("1")));
        update(&mut app, Action::SelectFriend(FriendId::from("3")));
        assert_eq!(app.selected_id(), Some(&FriendId::from("3")));
    }

    #[test]
    fn test_select_unknown_friend_is_ignored() {
        let mut app = three_friends();
        update(&mut app, Action::ToggleAddForm);
        update(&mut app, Action::SelectFriend(FriendId::from("nope")));
        assert_eq!(app.panel, Panel::AddingFriend);
    }

    #[test]
    fn test_split_bill_updates_only_selected_friend() {
        let mut app = three_friends();
        update(&mut app, Action::SelectFriend(FriendId::from("1")));
        update(&mut app, Action::SplitBill(30.0));

        assert_eq!(app.friends[0].balance, 23.0);
        assert_eq!(app.friends[1].balance, 20.0);
        assert_eq!(app.friends[2].balance, 0.0);
        assert_eq!(app.panel, Panel::None);
        assert_eq!(app.status_message, "Split with Clark: +30€");
    }

    #[test]
    fn test_split_bill_negative_delta() {
        let mut app = three_friends();
        update(&mut app, Action::SelectFriend(FriendId::from("1")));
        update(&mut app, Action::SplitBill(-20.0));
        assert_eq!(app.friends[0].balance, -27.0);
    }

    #[test]
    fn test_split_bill_without_selection_is_noop() {
        let mut app = three_friends();
        let before = app.friends.clone();
        update(&mut app, Action::SplitBill(10.0));
        assert_eq!(app.friends, before);
    }

    #[test]
    fn test_quit_effect() {
        let mut app = three_friends();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(update(&mut app, Action::ToggleAddForm), Effect::None);
    }
}
