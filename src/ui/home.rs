use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::NUM_GAMES;
use crate::scores::{PersonalBests, Record};

const BANNER: &str = r#"
 ╔══════════════════════════════════════════════════════╗
 ║   _____         _   _         _                 _     ║
 ║  |_   _|  _ _ _| |_| |___    /_\  _ _ __ __ _ __| |___ ║
 ║    | || || | '_|  _| / -_)  / _ \| '_/ _/ _` / _` / -_)║
 ║    |_| \_,_|_|  \__|_\___| /_/ \_\_| \__\__,_\__,_\___|║
 ╚══════════════════════════════════════════════════════╝"#;

const KEY_COLOR: Color = Color::Rgb(80, 200, 255);
const TEXT_COLOR: Color = Color::Rgb(140, 140, 140);
const HEADING_COLOR: Color = Color::Rgb(255, 220, 80);

struct GameTile {
    key: &'static str,
    icon: &'static str,
    name: &'static str,
    desc: &'static str,
    color: Color,
    border_color: Color,
    record: Record,
    record_label: &'static str,
}

const GAME_TILES: [GameTile; NUM_GAMES] = [
    GameTile {
        key: "1",
        icon: "🏓",
        name: "Pong",
        desc: "Two paddles, one ball,\nno mercy.",
        color: Color::Rgb(100, 180, 255),
        border_color: Color::Rgb(50, 90, 140),
        record: Record::PongPoints,
        record_label: "Most points",
    },
    GameTile {
        key: "2",
        icon: "🐢",
        name: "Turtle Crossing",
        desc: "Get the turtle across\nthe busy road!",
        color: Color::Rgb(80, 220, 80),
        border_color: Color::Rgb(40, 120, 40),
        record: Record::CrossingLevel,
        record_label: "Best level",
    },
];

fn key_line(key: &'static str, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("    {key:<17}"), Style::default().fg(KEY_COLOR)),
        Span::styled(what, Style::default().fg(TEXT_COLOR)),
    ])
}

fn heading(text: String, color: Color) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)))
}

fn render_game_tile(frame: &mut Frame, area: Rect, tile: &GameTile, selected: bool) {
    let border_color = if selected { HEADING_COLOR } else { tile.border_color };
    let border_type = if selected { BorderType::Double } else { BorderType::Rounded };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let name_color = if selected { Color::White } else { tile.color };
    let desc_color = if selected { Color::Rgb(180, 180, 200) } else { Color::Rgb(120, 120, 140) };
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("[{}] ", tile.key), Style::default().fg(HEADING_COLOR).add_modifier(Modifier::BOLD)),
        Span::styled(format!("{} ", tile.icon), Style::default()),
        Span::styled(tile.name, Style::default().fg(name_color).add_modifier(Modifier::BOLD)),
    ])];
    lines.extend(tile.desc.split('\n').map(|d| Line::from(Span::styled(d, Style::default().fg(desc_color)))));
    if selected {
        lines.push(Line::from(Span::styled(
            "▶ Enter to play",
            Style::default().fg(HEADING_COLOR).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn game_controls(game_idx: usize) -> Vec<Line<'static>> {
    let tile = &GAME_TILES[game_idx];
    let mut lines = vec![
        Line::from(""),
        heading(format!("  {} {}", tile.icon, tile.name), tile.color),
        Line::from(""),
    ];
    match tile.record {
        Record::PongPoints => {
            lines.push(key_line("W / S", "Left paddle up / down"));
            lines.push(key_line("↑ / ↓", "Right paddle up / down"));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  The rally speeds up on every return.",
                Style::default().fg(Color::Rgb(100, 100, 120)),
            )));
        }
        Record::CrossingLevel => {
            lines.push(key_line("↑ / ↓", "Step forward / back"));
            lines.push(key_line("Enter", "New run after game over"));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Each crossing makes traffic faster.",
                Style::default().fg(Color::Rgb(100, 100, 120)),
            )));
        }
    }
    lines.push(key_line("P", "Pause"));
    lines.push(key_line("R", "Restart"));
    lines
}

pub fn render_home(frame: &mut Frame, area: Rect, selected_game: usize, show_bests: bool, bests: &PersonalBests) {
    let selected_game = selected_game.min(NUM_GAMES - 1);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Banner
            Constraint::Length(7), // Game tiles
            Constraint::Min(8),    // Controls
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let banner = Paragraph::new(BANNER)
        .style(Style::default().fg(KEY_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let games_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" 🎮 Games · ←→ Select, Enter to Play ")
        .title_style(Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD));
    let games_inner = games_block.inner(chunks[1]);
    frame.render_widget(games_block, chunks[1]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(games_inner);
    for (i, tile) in GAME_TILES.iter().enumerate() {
        render_game_tile(frame, cols[i], tile, selected_game == i);
    }

    let ctrl_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    let navigation = Paragraph::new(vec![
        Line::from(""),
        key_line("Tab / Shift+Tab", "Switch tabs"),
        key_line("1 / 2", "Launch game"),
        key_line("Esc", "Return to Home"),
        key_line("H", "Personal bests"),
        key_line("q / Ctrl+C", "Quit"),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
            .title(" ⌨ Navigation ")
            .title_style(Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(navigation, ctrl_cols[0]);

    let tile = &GAME_TILES[selected_game];
    let game_ctrl = Paragraph::new(game_controls(selected_game)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(tile.border_color))
            .title(format!(" 🎮 {} Controls ", tile.name))
            .title_style(Style::default().fg(tile.color).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(game_ctrl, ctrl_cols[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("  🦀 ", Style::default().fg(Color::Rgb(255, 100, 50))),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Rgb(80, 80, 100)),
        ),
        Span::styled("  │  ", Style::default().fg(Color::Rgb(40, 40, 60))),
        Span::styled("H", Style::default().fg(HEADING_COLOR).add_modifier(Modifier::BOLD)),
        Span::styled(" Personal Bests", Style::default().fg(Color::Rgb(100, 100, 130))),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);

    if show_bests {
        render_bests_overlay(frame, area, bests);
    }
}

fn render_bests_overlay(frame: &mut Frame, area: Rect, bests: &PersonalBests) {
    let overlay_w = 40u16.min(area.width.saturating_sub(4));
    let overlay_h = 12u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 200, 80)))
        .title(" 🏆 Personal Bests ")
        .title_style(Style::default().fg(HEADING_COLOR).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines = vec![Line::from("")];
    for tile in &GAME_TILES {
        lines.push(heading(format!("  {} {}", tile.icon, tile.name), tile.color));
        let best = bests.best(tile.record);
        lines.push(if best > 0 {
            Line::from(vec![
                Span::styled(format!("    {}: ", tile.record_label), Style::default().fg(Color::Rgb(200, 200, 220))),
                Span::styled(
                    best.to_string(),
                    Style::default().fg(Color::Rgb(255, 215, 0)).add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(Span::styled("    Nothing yet", Style::default().fg(Color::Rgb(60, 60, 80))))
        });
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("  Press ", Style::default().fg(Color::Rgb(80, 80, 100))),
        Span::styled("H", Style::default().fg(HEADING_COLOR).add_modifier(Modifier::BOLD)),
        Span::styled(" to close", Style::default().fg(Color::Rgb(80, 80, 100))),
    ]));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(Color::Rgb(15, 15, 25))), inner);
}
