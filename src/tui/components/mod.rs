//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, totals, and status message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `FriendList`: sidebar rows with a highlight cursor (persistent state +
//!   transient wrapper)
//! - `AddFriendForm`: name and avatar URL draft
//! - `SplitBillForm`: bill amounts and payer for the selected friend
//! - `TextField`: single-line input shared by both forms
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props and never reach into `App`.
//! Forms hand back a `FormEvent`; the event loop turns it into an `Action`
//! for `core::action::update`.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status bar)
//! ├── friend_list.rs      (Sidebar friend rows)
//! ├── add_friend_form.rs  (Add-friend form)
//! ├── split_bill_form.rs  (Split-bill form)
//! └── text_field.rs       (Single-line input)
//! ```

pub mod add_friend_form;
pub mod friend_list;
pub mod split_bill_form;
pub mod text_field;
mod title_bar;

pub use add_friend_form::AddFriendForm;
pub use friend_list::{FriendList, FriendListEvent, FriendListState};
pub use split_bill_form::SplitBillForm;
pub use title_bar::TitleBar;

use crate::core::action::Action;

/// High-level events emitted by the forms.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A valid submission, ready for `update()`.
    Submit(Action),
    /// The user asked to close the form.
    Close,
}
