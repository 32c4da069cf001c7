//! # Form Drafts
//!
//! Local, uncommitted input for the two forms. A draft never touches `App`
//! directly: `submit()` hands back the `Action` to dispatch, or `None` when
//! the input is not acceptable. Rejected submissions are silent no-ops.

use log::debug;

use crate::core::action::Action;
use crate::core::friend::{Friend, FriendId, avatar_url};

// ============================================================================
// Add-friend draft
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FriendDraft {
    pub name: String,
    pub image_url: String,
    default_image_url: String,
}

impl FriendDraft {
    pub fn new(default_image_url: impl Into<String>) -> Self {
        let default_image_url = default_image_url.into();
        Self {
            name: String::new(),
            image_url: default_image_url.clone(),
            default_image_url,
        }
    }

    /// Builds a new friend with a fresh id and resets the draft.
    ///
    /// Empty name or image URL leaves the draft untouched and returns `None`.
    pub fn submit(&mut self) -> Option<Action> {
        if self.name.is_empty() || self.image_url.is_empty() {
            debug!("Add friend rejected: empty name or image URL");
            return None;
        }

        let id = FriendId::generate();
        let image = avatar_url(&self.image_url, &id);
        let friend = Friend::new(id, std::mem::take(&mut self.name), image, 0.0);
        self.reset();
        Some(Action::AddFriend(friend))
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image_url = self.default_image_url.clone();
    }
}

// ============================================================================
// Split-bill draft
// ============================================================================

/// Whoever fronted the whole bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn toggle(self) -> Self {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillDraft {
    bill_total: Option<f64>,
    user_portion: Option<f64>,
    pub payer: Payer,
}

impl BillDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill_total(&self) -> Option<f64> {
        self.bill_total
    }

    pub fn user_portion(&self) -> Option<f64> {
        self.user_portion
    }

    pub fn set_bill_total(&mut self, value: Option<f64>) {
        self.bill_total = value;
    }

    /// Stores the user's portion, clamped so it never exceeds the bill.
    /// An unset bill counts as zero. Returns the stored value.
    ///
    /// Lowering the bill afterwards does not re-clamp.
    pub fn set_user_portion(&mut self, value: Option<f64>) -> Option<f64> {
        self.user_portion = match value {
            Some(v) if v > self.bill_total.unwrap_or(0.0) => self.bill_total,
            other => other,
        };
        self.user_portion
    }

    /// `bill_total - user_portion`, or `None` while the bill is unset or zero.
    pub fn friend_portion(&self) -> Option<f64> {
        self.bill_total
            .filter(|total| *total != 0.0)
            .map(|total| total - self.user_portion.unwrap_or(0.0))
    }

    /// Signed delta for the selected friend's balance.
    ///
    /// A friend portion of exactly zero is rejected like a missing bill, so an
    /// even split where the user covers everything cannot be recorded.
    pub fn submit(&self) -> Option<Action> {
        let friend_portion = match self.friend_portion() {
            Some(portion) if portion != 0.0 => portion,
            _ => {
                debug!("Split rejected: bill={:?} user={:?}", self.bill_total, self.user_portion);
                return None;
            }
        };

        let delta = match self.payer {
            Payer::User => friend_portion,
            Payer::Friend => -self.user_portion.unwrap_or(0.0),
        };
        Some(Action::SplitBill(delta))
    }
}
