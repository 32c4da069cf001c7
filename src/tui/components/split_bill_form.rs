//! # SplitBillForm Component
//!
//! Main-panel form for splitting a bill with the selected friend.
//!
//! ```text
//! ┌ Split a bill with Clark ───────────┐
//! │ ╭ Bill value ───────────────────╮  │
//! │ ╭ Your expense ─────────────────╮  │
//! │ ╭ Clark's expense ──────────────╮  │   read-only, derived
//! │ ╭ Who is paying the bill? ──────╮  │   ◀ You ▶ / ◀ Clark ▶
//! │      [Split bill] Enter            │
//! └────────────────────────────────────┘
//! ```
//!
//! The numbers live in a `BillDraft`; the text fields only mirror them.
//! When the draft clamps the user's expense, the field is rewritten to match.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::core::draft::{BillDraft, Payer};
use crate::core::friend::{Friend, FriendId, format_amount};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::FormEvent;
use crate::tui::components::text_field::{FIELD_HEIGHT, FieldKind, TextField};
use crate::tui::event::TuiEvent;

const BILL: usize = 0;
const USER: usize = 1;
const PAYER: usize = 2;
const FOCUSABLE: usize = 3;

pub struct SplitBillForm {
    pub friend_id: FriendId,
    friend_name: String,
    draft: BillDraft,
    bill: TextField,
    user_portion: TextField,
    friend_portion: TextField,
    focus: usize,
    /// Whether the form has keyboard focus (Prop)
    pub focused: bool,
}

impl SplitBillForm {
    pub fn new(friend: &Friend) -> Self {
        Self {
            friend_id: friend.id.clone(),
            friend_name: friend.name.clone(),
            draft: BillDraft::new(),
            bill: TextField::new(" Bill value ", FieldKind::Amount),
            user_portion: TextField::new(" Your expense ", FieldKind::Amount),
            friend_portion: TextField::read_only(format!(" {}'s expense ", friend.name)),
            focus: BILL,
            focused: false,
        }
    }

    pub fn draft(&self) -> &BillDraft {
        &self.draft
    }

    fn on_bill_changed(&mut self) {
        self.draft.set_bill_total(self.bill.amount());
        self.refresh_friend_portion();
    }

    fn on_user_portion_changed(&mut self) {
        let typed = self.user_portion.amount();
        let stored = self.draft.set_user_portion(typed);
        if stored != typed {
            // Clamped to the bill: mirror the bill text so the field matches the stored value.
            let text = if stored.is_some() { self.bill.buffer.clone() } else { String::new() };
            self.user_portion.set_text(text);
        }
        self.refresh_friend_portion();
    }

    fn refresh_friend_portion(&mut self) {
        self.friend_portion
            .set_text(self.draft.friend_portion().map(format_amount).unwrap_or_default());
    }

    fn payer_label(&self) -> &str {
        match self.draft.payer {
            Payer::User => "You",
            Payer::Friend => &self.friend_name,
        }
    }

    fn render_payer(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focused && self.focus == PAYER;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Who is paying the bill? ");
        let line = Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.payer_label().to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

impl Component for SplitBillForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Split a bill with {} ", self.friend_name));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [bill_area, user_area, friend_area, payer_area, action_area] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.bill.focused = self.focused && self.focus == BILL;
        self.user_portion.focused = self.focused && self.focus == USER;
        self.bill.render(frame, bill_area);
        self.user_portion.render(frame, user_area);
        self.friend_portion.render(frame, friend_area);
        self.render_payer(frame, payer_area);

        let hint = Line::from(" [Split bill] Enter   Tab next field   Esc close ").centered();
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            action_area,
        );
    }
}

impl EventHandler for SplitBillForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => return Some(FormEvent::Close),
            TuiEvent::Submit => return self.draft.submit().map(FormEvent::Submit),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % FOCUSABLE;
                return None;
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = (self.focus + FOCUSABLE - 1) % FOCUSABLE;
                return None;
            }
            _ => {}
        }

        match self.focus {
            BILL => {
                if self.bill.handle_event(event).is_some() {
                    self.on_bill_changed();
                }
            }
            USER => {
                if self.user_portion.handle_event(event).is_some() {
                    self.on_user_portion_changed();
                }
            }
            _ => {
                if matches!(
                    event,
                    TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::InputChar(' ')
                ) {
                    self.draft.payer = self.draft.payer.toggle();
                }
            }
        }
        None
    }
}
