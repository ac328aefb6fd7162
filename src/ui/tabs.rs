use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Tab};
use crate::games::Game;

const ACTIVE: Color = Color::Rgb(255, 220, 80);
const IDLE: Color = Color::Rgb(120, 120, 140);

/// Short live status shown next to a game's tab title.
fn tab_status(app: &App, tab: Tab) -> Option<String> {
    match tab {
        Tab::Home => None,
        Tab::Pong => {
            let (left, right) = app.pong.scoreboard().displayed();
            Some(format!("{left}:{right}"))
        }
        Tab::Crossing if app.crossing.is_game_over() => Some("✖".to_string()),
        Tab::Crossing => Some(format!("L{}", app.crossing.scoreboard().displayed_level())),
    }
}

pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|&tab| {
            let color = if tab == app.current_tab { ACTIVE } else { IDLE };
            let mut spans = vec![Span::styled(tab.title(), Style::default().fg(color).add_modifier(Modifier::BOLD))];
            if let Some(status) = tab_status(app, tab) {
                spans.push(Span::styled(format!("[{status}] "), Style::default().fg(Color::Rgb(80, 200, 255))));
            }
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" 🐢 Turtle Arcade ")
        .title_style(Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(ACTIVE).add_modifier(Modifier::BOLD))
        .divider(Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))));

    frame.render_widget(tabs, area);
}
