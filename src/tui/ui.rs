use crate::core::state::{App, Panel};
use crate::tui::component::Component;
use crate::tui::components::add_friend_form::FORM_HEIGHT;
use crate::tui::components::{FriendList, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of the split form: four fields, the action line, and borders.
const SPLIT_FORM_HEIGHT: u16 = 3 * 4 + 3;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let [title_area, body_area, footer_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [sidebar_area, main_area] =
        Layout::horizontal([Percentage(45), Percentage(55)]).areas(body_area);

    TitleBar::new(app.totals(), &app.settings.currency, &app.status_message)
        .render(frame, title_area);

    draw_sidebar(frame, sidebar_area, app, tui);
    draw_main(frame, main_area, tui);
    draw_footer(frame, footer_area, app, tui.focus);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let form_height = if tui.add_form.is_some() { FORM_HEIGHT } else { 0 };
    let [list_area, form_area, button_area] =
        Layout::vertical([Min(0), Length(form_height), Length(1)]).areas(area);

    FriendList::new(
        &mut tui.friend_list,
        &app.friends,
        app.selected_id(),
        &app.settings.currency,
        tui.focus == Focus::List,
    )
    .render(frame, list_area);

    if let Some(form) = tui.add_form.as_mut() {
        form.focused = tui.focus == Focus::Panel;
        form.render(frame, form_area);
    }

    let label = if app.is_add_form_open() { "[Close]" } else { "[Add friend]" };
    let button = Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(" a", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(button, button_area);
}

fn draw_main(frame: &mut Frame, area: Rect, tui: &mut TuiState) {
    if let Some(form) = tui.split_form.as_mut() {
        let [form_area, _] =
            Layout::vertical([Constraint::Length(SPLIT_FORM_HEIGHT), Constraint::Min(0)])
                .areas(area);
        form.focused = tui.focus == Focus::Panel;
        form.render(frame, form_area);
        return;
    }

    let placeholder = Paragraph::new("Select a friend to split a bill")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(placeholder, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, focus: Focus) {
    let hints = match focus {
        Focus::List if app.panel != Panel::None => {
            " ↑↓ move  Enter select/close  a add friend  Tab form  q quit "
        }
        Focus::List => " ↑↓ move  Enter select/close  a add friend  q quit ",
        Focus::Panel => " Tab/↑↓ field  ←→ payer  Enter submit  Esc close  Ctrl+C quit ",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
