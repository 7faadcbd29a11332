//! Layout and drawing of the browser screen.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use ratatui_image::StatefulImage;

use super::app::App;

const SPINNER: [char; 8] = ['|', '/', '-', '\\', '|', '/', '-', '\\'];

pub fn draw(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(4)])
        .split(frame.area());

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(40)])
        .split(main_layout[0]);

    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(9)])
        .split(top_layout[0]);

    // Shape list
    let items: Vec<ListItem> = app
        .patterns
        .iter()
        .enumerate()
        .map(|(i, p)| {
            ListItem::new(format!(
                "#{:<3} P{:<3} S{}",
                i,
                p.perimeter(),
                p.symmetry_order()
            ))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} triangle(s) ", app.count))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    frame.render_stateful_widget(list, sidebar_layout[0], &mut app.list_state);

    // Stats panel
    let stats_text = format!(
        "Shapes: {}\nSketches: {}\nCompared: {}\nRejected: {}\nGen: {:.1}ms\nSearch: {}\nGrid {} Axes {}",
        app.patterns.len(),
        app.stats.sketches_expanded,
        app.stats.candidates_compared,
        app.stats.duplicates_rejected,
        app.gen_time_ms,
        app.policy,
        on_off(app.style.show_grid),
        on_off(app.style.show_axes),
    );
    let stats = Paragraph::new(stats_text)
        .block(
            Block::default()
                .title(" Stats ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(stats, sidebar_layout[1]);

    // Preview
    let title = if app.is_loading {
        let spinner = SPINNER[app.spinner_frame % SPINNER.len()];
        format!(" [{}] Generating {} triangle(s)... ", spinner, app.count)
    } else if let Some(status) = &app.status {
        format!(" {} ", status)
    } else {
        match app.list_state.selected() {
            Some(i) => format!(" Shape {} of {} ", i, app.patterns.len()),
            None => " No shapes ".to_string(),
        }
    };

    let border_color = if app.is_loading {
        Color::Yellow
    } else if app.status.is_some() {
        Color::Red
    } else {
        Color::Green
    };

    let image_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = image_block.inner(top_layout[1]);
    frame.render_widget(image_block, top_layout[1]);

    if let Some(ref mut image_state) = app.image_state {
        let image_widget = StatefulImage::new(None);
        frame.render_stateful_widget(image_widget, inner_area, image_state);
    }

    // Help
    let help = Paragraph::new("↑↓ shape  ←→ triangles\ng grid  x axes  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, main_layout[1]);
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
