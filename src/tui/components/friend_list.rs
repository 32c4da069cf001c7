//! # FriendList Component
//!
//! Sidebar list of friends with their balances.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FriendListState` lives in `TuiState` (highlight cursor, last layout)
//! - `FriendList` is created each frame with borrowed props
//!
//! Each row is two lines:
//!
//! ```text
//! (C) Clark                      [Select]
//!     You owe Clark 7€
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthStr;

use crate::core::friend::{Friend, FriendId, Standing};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

const ROW_HEIGHT: u16 = 2;

const AVATAR_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
    Color::LightGreen,
    Color::LightRed,
    Color::LightYellow,
];

/// Persistent state for the friend list.
#[derive(Default)]
pub struct FriendListState {
    pub list_state: ListState,
    /// Area the list was last drawn into, for mouse hit testing.
    last_area: Rect,
}

/// Events emitted by the friend list.
#[derive(Debug, Clone, PartialEq)]
pub enum FriendListEvent {
    /// The row's Select/Close button was pressed.
    Toggle(FriendId),
}

impl FriendListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Handle a key event against the current friends.
    pub fn handle_event(&mut self, event: &TuiEvent, friends: &[Friend]) -> Option<FriendListEvent> {
        if friends.is_empty() {
            self.list_state.select(None);
            return None;
        }
        let last = friends.len() - 1;
        let current = self.list_state.selected().map(|i| i.min(last));

        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.list_state
                    .select(Some(current.map_or(last, |i| i.saturating_sub(1))));
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.list_state
                    .select(Some(current.map_or(0, |i| (i + 1).min(last))));
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => current
                .and_then(|i| friends.get(i))
                .map(|friend| FriendListEvent::Toggle(friend.id.clone())),
            TuiEvent::MouseClick(col, row) => {
                let index = self.hit_test(*col, *row)?;
                let friend = friends.get(index)?;
                self.list_state.select(Some(index));
                Some(FriendListEvent::Toggle(friend.id.clone()))
            }
            _ => None,
        }
    }

    /// Row index under a screen position, using the last drawn layout.
    fn hit_test(&self, col: u16, row: u16) -> Option<usize> {
        let inner = Block::default().borders(Borders::ALL).inner(self.last_area);
        if !inner.contains((col, row).into()) {
            return None;
        }
        let row_in_list = (row - inner.y) / ROW_HEIGHT;
        Some(self.list_state.offset() + row_in_list as usize)
    }
}

/// Transient render wrapper for the friend list.
pub struct FriendList<'a> {
    state: &'a mut FriendListState,
    friends: &'a [Friend],
    selected: Option<&'a FriendId>,
    currency: &'a str,
    focused: bool,
}

impl<'a> FriendList<'a> {
    pub fn new(
        state: &'a mut FriendListState,
        friends: &'a [Friend],
        selected: Option<&'a FriendId>,
        currency: &'a str,
        focused: bool,
    ) -> Self {
        Self {
            state,
            friends,
            selected,
            currency,
            focused,
        }
    }

    fn row(&self, friend: &Friend, width: u16) -> ListItem<'static> {
        let is_selected = self.selected == Some(&friend.id);
        let badge = avatar_badge(friend);
        let button = if is_selected { "[Close]" } else { "[Select]" };

        let used = badge.content.width() + 1 + friend.name.width() + button.width();
        let gap = (width as usize).saturating_sub(used).max(1);

        let name_style = if is_selected {
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let button_style = if is_selected {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let first = Line::from(vec![
            badge,
            Span::raw(" "),
            Span::styled(friend.name.clone(), name_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(button, button_style),
        ]);
        let second = Line::from(vec![
            Span::raw("    "),
            Span::styled(friend.balance_message(self.currency), standing_style(friend.standing())),
        ]);

        ListItem::new(vec![first, second])
    }
}

impl Component for FriendList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.last_area = area;

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Friends ")
            .padding(Padding::horizontal(1));
        let inner_width = block.inner(area).width;

        let items: Vec<ListItem> = self
            .friends
            .iter()
            .map(|friend| self.row(friend, inner_width))
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Coloured initial standing in for the avatar image.
fn avatar_badge(friend: &Friend) -> Span<'static> {
    let initial = friend
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    let hash = friend.id.as_str().bytes().fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    let color = AVATAR_COLORS[hash % AVATAR_COLORS.len()];
    Span::styled(format!("({initial})"), Style::default().fg(color))
}

fn standing_style(standing: Standing) -> Style {
    match standing {
        Standing::UserOwes(_) => Style::default().fg(Color::Red),
        Standing::FriendOwes(_) => Style::default().fg(Color::Green),
        Standing::Even => Style::default().fg(Color::Gray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_friend;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn friends() -> Vec<Friend> {
        vec![
            test_friend("1", "Clark", -7.0),
            test_friend("2", "Sarah", 20.0),
            test_friend("3", "Anthony", 0.0),
        ]
    }

    fn render_text(friends: &[Friend], selected: Option<&FriendId>) -> String {
        let backend = TestBackend::new(50, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = FriendListState::new();
        terminal
            .draw(|f| {
                FriendList::new(&mut state, friends, selected, "€", true).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_balance_messages() {
        let text = render_text(&friends(), None);
        assert!(text.contains("You owe Clark 7€"));
        assert!(text.contains("Sarah owes you 20€"));
        assert!(text.contains("You and Anthony are even"));
    }

    #[test]
    fn test_button_label_follows_selection() {
        let friends = friends();
        let text = render_text(&friends, None);
        assert_eq!(text.matches("[Select]").count(), 3);
        assert!(!text.contains("[Close]"));

        let selected = FriendId::from("2");
        let text = render_text(&friends, Some(&selected));
        assert_eq!(text.matches("[Select]").count(), 2);
        assert_eq!(text.matches("[Close]").count(), 1);
    }

    #[test]
    fn test_keyboard_navigation_and_toggle() {
        let friends = friends();
        let mut state = FriendListState::new();

        assert_eq!(state.handle_event(&TuiEvent::CursorDown, &friends), None);
        assert_eq!(state.highlighted(), Some(0));
        state.handle_event(&TuiEvent::CursorDown, &friends);
        state.handle_event(&TuiEvent::InputChar('j'), &friends);
        state.handle_event(&TuiEvent::CursorDown, &friends);
        assert_eq!(state.highlighted(), Some(2));

        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &friends),
            Some(FriendListEvent::Toggle(FriendId::from("3")))
        );

        state.handle_event(&TuiEvent::CursorUp, &friends);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar(' '), &friends),
            Some(FriendListEvent::Toggle(FriendId::from("2")))
        );
    }

    #[test]
    fn test_submit_without_highlight_does_nothing() {
        let mut state = FriendListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit, &friends()), None);
    }

    #[test]
    fn test_empty_list_ignores_events() {
        let mut state = FriendListState::new();
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, &[]), None);
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn test_mouse_click_hits_row() {
        let friends = friends();
        let mut state = FriendListState::new();
        state.last_area = Rect::new(0, 0, 40, 10);

        // Border at row 0; Clark on rows 1-2, Sarah on rows 3-4
        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(5, 3), &friends),
            Some(FriendListEvent::Toggle(FriendId::from("2")))
        );
        assert_eq!(state.highlighted(), Some(1));

        assert_eq!(state.handle_event(&TuiEvent::MouseClick(5, 0), &friends), None);
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(5, 8), &friends), None);
    }
}
