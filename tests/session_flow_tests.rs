use settle::core::action::{Action, Effect, update};
use settle::core::config::{CliOverrides, SettleConfig, resolve};
use settle::core::draft::{BillDraft, FriendDraft, Payer};
use settle::core::friend::{Friend, FriendId};
use settle::core::state::{App, Panel, Settings};
use settle::tui::event::TuiEvent;
use settle::tui::{TuiState, handle_event};

// ============================================================================
// Helper Functions
// ============================================================================

fn friend(id: &str, name: &str, balance: f64) -> Friend {
    Friend::new(FriendId::from(id), name, format!("https://i.pravatar.cc/48?u={id}"), balance)
}

fn single_friend_app(balance: f64) -> App {
    App::new(vec![friend("1", "Clark", balance)], Settings::default())
}

fn split(app: &mut App, total: f64, user: f64, payer: Payer) {
    let mut draft = BillDraft::new();
    draft.set_bill_total(Some(total));
    draft.set_user_portion(Some(user));
    draft.payer = payer;
    if let Some(action) = draft.submit() {
        update(app, action);
    }
}

// ============================================================================
// Core flows
// ============================================================================

#[test]
fn test_user_pays_example() {
    let mut app = single_friend_app(-7.0);
    update(&mut app, Action::SelectFriend(FriendId::from("1")));
    split(&mut app, 50.0, 20.0, Payer::User);

    assert_eq!(app.friends[0].balance, 23.0);
    assert_eq!(app.panel, Panel::None);
}

#[test]
fn test_friend_pays_example() {
    let mut app = single_friend_app(-7.0);
    update(&mut app, Action::SelectFriend(FriendId::from("1")));
    split(&mut app, 50.0, 20.0, Payer::Friend);

    assert_eq!(app.friends[0].balance, -27.0);
}

#[test]
fn test_zero_bill_is_noop_and_keeps_selection() {
    let mut app = single_friend_app(-7.0);
    update(&mut app, Action::SelectFriend(FriendId::from("1")));
    split(&mut app, 0.0, 0.0, Payer::User);

    assert_eq!(app.friends[0].balance, -7.0);
    assert_eq!(app.selected_id(), Some(&FriendId::from("1")));
}

#[test]
fn test_added_friends_get_unused_ids_and_keep_order() {
    let mut app = App::new(vec![friend("1", "Clark", -7.0), friend("2", "Sarah", 20.0)], Settings::default());
    let before = app.friends.clone();
    let mut draft = FriendDraft::new(app.settings.avatar_base_url.clone());

    update(&mut app, Action::ToggleAddForm);
    for name in ["Dana", "Eli"] {
        draft.name = name.to_string();
        let action = draft.submit().expect("valid draft");
        update(&mut app, action);
    }

    assert_eq!(app.friends.len(), 4);
    assert_eq!(&app.friends[..2], &before[..]);
    assert_ne!(app.friends[2].id, app.friends[3].id);
    assert!(before.iter().all(|f| f.id != app.friends[2].id && f.id != app.friends[3].id));
    assert!(app.friends[2..].iter().all(|f| f.balance == 0.0));
}

#[test]
fn test_rejected_add_leaves_form_open() {
    let mut app = single_friend_app(0.0);
    update(&mut app, Action::ToggleAddForm);

    let mut draft = FriendDraft::new(app.settings.avatar_base_url.clone());
    assert!(draft.submit().is_none());

    assert_eq!(app.friends.len(), 1);
    assert!(app.is_add_form_open());
}

#[test]
fn test_resolved_config_seeds_demo_session() {
    let resolved = resolve(&SettleConfig::default(), &CliOverrides::default());
    let app = App::from_config(&resolved);

    assert_eq!(app.friends.len(), 3);
    assert_eq!(app.totals().owed_to_user, 20.0);
    assert_eq!(app.totals().user_owes, 7.0);
}

// ============================================================================
// Keyboard-driven session
// ============================================================================

#[test]
fn test_keyboard_session_end_to_end() {
    let mut app = App::new(vec![friend("1", "Clark", -7.0), friend("2", "Sarah", 20.0)], Settings::default());
    let mut tui = TuiState::new();
    tui.sync_with_app(&app);

    let mut events = vec![TuiEvent::CursorDown, TuiEvent::CursorDown, TuiEvent::Submit];
    events.extend("40".chars().map(TuiEvent::InputChar));
    events.push(TuiEvent::NextField);
    events.extend("100".chars().map(TuiEvent::InputChar)); // clamped to 40 on the way
    events.push(TuiEvent::Backspace); // "4"
    events.push(TuiEvent::Submit);

    for event in &events {
        assert_eq!(handle_event(&mut app, &mut tui, event), Effect::None);
    }

    // Sarah: 20 + (40 - 4)
    assert_eq!(app.friends[1].balance, 56.0);
    assert_eq!(app.friends[0].balance, -7.0);
    assert_eq!(app.panel, Panel::None);

    assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::InputChar('q')), Effect::Quit);
}
