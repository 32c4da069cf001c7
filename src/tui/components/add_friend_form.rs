//! # AddFriendForm Component
//!
//! Sidebar form collecting a name and an avatar URL. Submission goes through
//! `FriendDraft`, which rejects empty fields and resets itself on success.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::draft::FriendDraft;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::FormEvent;
use crate::tui::components::text_field::{FIELD_HEIGHT, FieldKind, TextField};
use crate::tui::event::TuiEvent;

/// Rows the form needs: two fields, the action line, and borders.
pub const FORM_HEIGHT: u16 = FIELD_HEIGHT * 2 + 3;

pub struct AddFriendForm {
    draft: FriendDraft,
    name: TextField,
    image_url: TextField,
    /// Index of the focused field (0 = name, 1 = image URL)
    focus: usize,
    /// Whether the form as a whole has keyboard focus (Prop)
    pub focused: bool,
}

impl AddFriendForm {
    pub fn new(default_image_url: &str) -> Self {
        let mut form = Self {
            draft: FriendDraft::new(default_image_url),
            name: TextField::new(" Friend name ", FieldKind::Text),
            image_url: TextField::new(" Image URL ", FieldKind::Text),
            focus: 0,
            focused: false,
        };
        form.sync_fields();
        form
    }

    fn sync_fields(&mut self) {
        self.name.set_text(self.draft.name.clone());
        self.image_url.set_text(self.draft.image_url.clone());
    }

    fn focused_field(&mut self) -> &mut TextField {
        if self.focus == 0 { &mut self.name } else { &mut self.image_url }
    }

    fn submit(&mut self) -> Option<FormEvent> {
        self.draft.name = self.name.buffer.clone();
        self.draft.image_url = self.image_url.buffer.clone();
        let action = self.draft.submit()?;
        self.sync_fields();
        self.focus = 0;
        Some(FormEvent::Submit(action))
    }
}

impl Component for AddFriendForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Add friend ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [name_area, image_area, action_area] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.name.focused = self.focused && self.focus == 0;
        self.image_url.focused = self.focused && self.focus == 1;
        self.name.render(frame, name_area);
        self.image_url.render(frame, image_area);

        let hint = Line::from(" [Add] Enter   Tab next field   Esc close ").centered();
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            action_area,
        );
    }
}

impl EventHandler for AddFriendForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => Some(FormEvent::Close),
            TuiEvent::Submit => self.submit(),
            TuiEvent::NextField | TuiEvent::CursorDown | TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = 1 - self.focus;
                None
            }
            other => {
                self.focused_field().handle_event(other);
                None
            }
        }
    }
}
