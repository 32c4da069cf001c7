//! # Friends
//!
//! The one domain entity: a friend and the running balance between them and
//! the user.
//!
//! ```text
//! balance > 0   friend owes the user
//! balance < 0   the user owes the friend (shown as its absolute value)
//! balance == 0  settled
//! ```

use std::fmt;

/// Default avatar service. New friends get `<base>?u=<id>`.
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://i.pravatar.cc/48";

/// Stable identifier of a friend. Unique within a session, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    /// Fresh random id (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FriendId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FriendId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar URL.
    pub image: String,
    pub balance: f64,
}

/// Who owes whom, derived from the sign of a balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Standing {
    /// The user owes the friend this (positive) amount.
    UserOwes(f64),
    /// The friend owes the user this (positive) amount.
    FriendOwes(f64),
    Even,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>, balance: f64) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance,
        }
    }

    /// Balances that round to zero cents count as even.
    pub fn standing(&self) -> Standing {
        let cents = (self.balance * 100.0).round();
        if cents < 0.0 {
            Standing::UserOwes(self.balance.abs())
        } else if cents > 0.0 {
            Standing::FriendOwes(self.balance)
        } else {
            Standing::Even
        }
    }

    /// Human-readable balance line, e.g. "You owe Clark 7€".
    pub fn balance_message(&self, currency: &str) -> String {
        match self.standing() {
            Standing::UserOwes(amount) => {
                format!("You owe {} {}{}", self.name, format_amount(amount), currency)
            }
            Standing::FriendOwes(amount) => {
                format!("{} owes you {}{}", self.name, format_amount(amount), currency)
            }
            Standing::Even => format!("You and {} are even", self.name),
        }
    }
}

/// Appends `id` to an avatar URL as the `u` query parameter.
pub fn avatar_url(base: &str, id: &FriendId) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}u={id}")
}

/// Formats an amount without a trailing `.00` for whole numbers.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        let fixed = format!("{amount:.2}");
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// The three friends every fresh session starts with unless disabled.
pub fn demo_friends() -> Vec<Friend> {
    [("118836", "Clark", -7.0), ("933372", "Sarah", 20.0), ("499476", "Anthony", 0.0)]
        .into_iter()
        .map(|(id, name, balance)| {
            let id = FriendId::from(id);
            let image = avatar_url(DEFAULT_AVATAR_BASE_URL, &id);
            Friend::new(id, name, image, balance)
        })
        .collect()
}
