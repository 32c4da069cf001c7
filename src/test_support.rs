//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::friend::{Friend, FriendId};
use crate::core::state::{App, Settings};

/// A friend with a predictable id and avatar.
pub fn test_friend(id: &str, name: &str, balance: f64) -> Friend {
    Friend::new(
        FriendId::from(id),
        name,
        format!("https://i.pravatar.cc/48?u={id}"),
        balance,
    )
}

/// Creates a test App with default settings.
pub fn test_app(friends: Vec<Friend>) -> App {
    App::new(friends, Settings::default())
}
