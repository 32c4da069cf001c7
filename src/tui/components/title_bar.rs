//! # TitleBar Component
//!
//! Top status bar: app name, running totals across all friends, and the
//! latest status message.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.totals(), "€", "Added Dana");
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Settle | owed to you 20€ · you owe 7€ | Added Dana"`
//! 2. **Default**: `"Settle | owed to you 20€ · you owe 7€"`

use crate::core::friend::format_amount;
use crate::core::state::Totals;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub totals: Totals,
    pub currency: &'a str,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(totals: Totals, currency: &'a str, status_message: &'a str) -> Self {
        Self {
            totals,
            currency,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Settle", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::styled(
                format!("owed to you {}{}", format_amount(self.totals.owed_to_user), self.currency),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" · "),
            Span::styled(
                format!("you owe {}{}", format_amount(self.totals.user_owes), self.currency),
                Style::default().fg(Color::Red),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
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
    fn test_title_bar_with_status_message() {
        let totals = Totals {
            owed_to_user: 20.0,
            user_owes: 7.0,
        };
        let text = render(&mut TitleBar::new(totals, "€", "Added Dana"));

        assert!(text.contains("Settle"));
        assert!(text.contains("owed to you 20€"));
        assert!(text.contains("you owe 7€"));
        assert!(text.contains("Added Dana"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = render(&mut TitleBar::new(Totals::default(), "$", ""));

        assert!(text.contains("owed to you 0$"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
