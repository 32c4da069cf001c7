//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Keystrokes go either to the friend list or to the open panel's form.
//! Opening a panel moves focus into it; closing it returns focus to the list.
//! `Tab` from the list jumps into an already-open panel.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize).

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Panel};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AddFriendForm, FormEvent, FriendListEvent, FriendListState, SplitBillForm,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Panel,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub friend_list: FriendListState,
    /// Present while `App::panel` is `AddingFriend`.
    pub add_form: Option<AddFriendForm>,
    /// Present while `App::panel` is `SplittingBill`, for that friend.
    pub split_form: Option<SplitBillForm>,
    pub focus: Focus,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            friend_list: FriendListState::new(),
            add_form: None,
            split_form: None,
            focus: Focus::List,
        }
    }

    /// Mount or drop form components so they match `app.panel`.
    ///
    /// A newly mounted form starts from an empty draft and takes focus.
    pub fn sync_with_app(&mut self, app: &App) {
        match &app.panel {
            Panel::None => {
                self.add_form = None;
                self.split_form = None;
                self.focus = Focus::List;
            }
            Panel::AddingFriend => {
                self.split_form = None;
                if self.add_form.is_none() {
                    self.add_form = Some(AddFriendForm::new(&app.settings.avatar_base_url));
                    self.focus = Focus::Panel;
                }
            }
            Panel::SplittingBill(id) => {
                self.add_form = None;
                let stale = self.split_form.as_ref().is_none_or(|form| &form.friend_id != id);
                if stale {
                    self.split_form = app.friend(id).map(SplitBillForm::new);
                    self.focus = Focus::Panel;
                }
            }
        }
    }
}

/// Route one terminal event to the focused component and apply the
/// resulting action, if any.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let effect = match event {
        TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        // Clicks always reach the list, whatever has focus
        TuiEvent::MouseClick(..) => match tui.friend_list.handle_event(event, &app.friends) {
            Some(FriendListEvent::Toggle(id)) => update(app, Action::SelectFriend(id)),
            None => Effect::None,
        },
        _ => match tui.focus {
            Focus::List => handle_list_event(app, tui, event),
            Focus::Panel => handle_panel_event(app, tui, event),
        },
    };
    tui.sync_with_app(app);
    effect
}

fn handle_list_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Escape | TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::InputChar('a') => update(app, Action::ToggleAddForm),
        TuiEvent::NextField => {
            if app.panel != Panel::None {
                tui.focus = Focus::Panel;
            }
            Effect::None
        }
        _ => match tui.friend_list.handle_event(event, &app.friends) {
            Some(FriendListEvent::Toggle(id)) => update(app, Action::SelectFriend(id)),
            None => Effect::None,
        },
    }
}

fn handle_panel_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let form_event = if let Some(form) = tui.add_form.as_mut() {
        form.handle_event(event)
    } else if let Some(form) = tui.split_form.as_mut() {
        form.handle_event(event)
    } else {
        tui.focus = Focus::List;
        None
    };

    match form_event {
        Some(FormEvent::Submit(action)) => update(app, action),
        Some(FormEvent::Close) => match app.panel.clone() {
            Panel::AddingFriend => update(app, Action::ToggleAddForm),
            Panel::SplittingBill(id) => update(app, Action::SelectFriend(id)),
            Panel::None => Effect::None,
        },
        None => Effect::None,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();
    tui.sync_with_app(&app);

    let mut terminal = ratatui::init();
    let result = {
        let _terminal_mode_guard = TerminalModeGuard::new();
        event_loop(&mut terminal, &mut app, &mut tui)
    };
    ratatui::restore();

    info!("Settle exiting with {} friends", app.friends.len());
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(app, tui, &event) == Effect::Quit {
                debug!("Quit requested");
                return Ok(());
            }
        }
    }
}
