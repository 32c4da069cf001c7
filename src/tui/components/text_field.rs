//! # TextField Component
//!
//! Single-line labelled input used by both forms.
//!
//! ## Responsibilities
//!
//! - Capture text input, paste, and caret movement
//! - Optionally restrict input to an amount (digits and one decimal point)
//! - Render as a bordered box whose border highlights while focused
//!
//! The buffer is internal state; `focused` is a prop set by the owning form.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows a field occupies: one line of text plus borders.
pub const FIELD_HEIGHT: u16 = 3;

/// Emitted whenever the buffer content changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Changed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Amount,
}

pub struct TextField {
    pub label: String,
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether this field receives keystrokes (Prop)
    pub focused: bool,
    /// Read-only fields render dimmed and ignore input.
    pub read_only: bool,
    kind: FieldKind,
    /// Caret as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl TextField {
    pub fn new(label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            buffer: String::new(),
            focused: false,
            read_only: false,
            kind,
            cursor: 0,
        }
    }

    pub fn read_only(label: impl Into<String>) -> Self {
        Self {
            read_only: true,
            ..Self::new(label, FieldKind::Text)
        }
    }

    /// Replace the whole buffer and move the caret to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.len();
    }

    /// Parsed amount, or `None` when empty or not a number.
    pub fn amount(&self) -> Option<f64> {
        self.buffer.parse::<f64>().ok()
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Text => !c.is_control(),
            FieldKind::Amount => c.is_ascii_digit() || (c == '.' && !self.buffer.contains('.')),
        }
    }

    fn insert(&mut self, text: &str) -> Option<Changed> {
        let mut inserted = false;
        for c in text.chars() {
            if self.accepts(c) {
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                inserted = true;
            }
        }
        inserted.then_some(Changed)
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text_style = if self.read_only {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label.as_str());
        frame.render_widget(Paragraph::new(self.buffer.as_str()).style(text_style).block(block), area);

        if self.focused && !self.read_only {
            let caret_col = u16::try_from(self.buffer[..self.cursor].width()).unwrap_or(u16::MAX);
            let x = area
                .x
                .saturating_add(1)
                .saturating_add(caret_col)
                .min(area.right().saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = Changed;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.read_only {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
