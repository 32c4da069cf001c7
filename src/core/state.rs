//! # Application State
//!
//! Core business state for Settle. Domain data only; presentation state
//! (focus, highlighted row, field text) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── friends: Vec<Friend>       // display order = insertion order
//! ├── panel: Panel               // what the secondary area shows
//! ├── settings: Settings         // currency, avatar base URL
//! └── status_message: String     // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::friend::{DEFAULT_AVATAR_BASE_URL, Friend, FriendId, Standing};

/// The secondary panel. At most one form is ever open, and the selected
/// friend exists only while the split form is showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Panel {
    #[default]
    None,
    AddingFriend,
    SplittingBill(FriendId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub currency: String,
    pub avatar_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "€".to_string(),
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
        }
    }
}

pub struct App {
    pub friends: Vec<Friend>,
    pub panel: Panel,
    pub settings: Settings,
    pub status_message: String,
}

impl App {
    pub fn new(friends: Vec<Friend>, settings: Settings) -> Self {
        Self {
            friends,
            panel: Panel::None,
            settings,
            status_message: String::from("Welcome to Settle!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.friends.clone(),
            Settings {
                currency: config.currency.clone(),
                avatar_base_url: config.avatar_base_url.clone(),
            },
        )
    }

    pub fn selected_id(&self) -> Option<&FriendId> {
        match &self.panel {
            Panel::SplittingBill(id) => Some(id),
            _ => None,
        }
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        let id = self.selected_id()?;
        self.friend(id)
    }

    pub fn friend(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn is_add_form_open(&self) -> bool {
        self.panel == Panel::AddingFriend
    }

    /// Sums of all positive and all negative balances.
    pub fn totals(&self) -> Totals {
        self.friends
            .iter()
            .fold(Totals::default(), |mut totals, friend| {
                match friend.standing() {
                    Standing::FriendOwes(amount) => totals.owed_to_user += amount,
                    Standing::UserOwes(amount) => totals.user_owes += amount,
                    Standing::Even => {}
                }
                totals
            })
    }
}

/// Money owed in each direction, both non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub owed_to_user: f64,
    pub user_owes: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_friend};

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(Vec::new(), Settings::default());
        assert_eq!(app.status_message, "Welcome to Settle!");
        assert_eq!(app.panel, Panel::None);
        assert_eq!(app.settings.currency, "€");
        assert!(!app.is_add_form_open());
        assert!(app.selected_friend().is_none());
    }

    #[test]
    fn test_selected_friend_follows_panel() {
        let mut app = test_app(vec![test_friend("1", "Clark", -7.0), test_friend("2", "Sarah", 20.0)]);
        app.panel = Panel::SplittingBill(FriendId::from("2"));
        assert_eq!(app.selected_friend().map(|f| f.name.as_str()), Some("Sarah"));

        app.panel = Panel::AddingFriend;
        assert!(app.selected_friend().is_none());
        assert!(app.is_add_form_open());
    }

    #[test]
    fn test_totals() {
        let app = test_app(vec![
            test_friend("1", "Clark", -7.0),
            test_friend("2", "Sarah", 20.0),
            test_friend("3", "Anthony", 0.0),
            test_friend("4", "Dana", 5.5),
        ]);
        assert_eq!(
            app.totals(),
            Totals {
                owed_to_user: 25.5,
                user_owes: 7.0
            }
        );
    }
}
