use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use reelex_core::LoadPhase;
use reelex_model::MovieRecord;

use crate::app::App;

const HELP_LINE: &str =
    "type to search | Tab cycle sort | ←/→ page | ↑/↓ select | Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(frame.size());

    draw_header(frame, app, chunks[0]);
    draw_body(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let catalog = &app.catalog;
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Search: "),
            Span::styled(
                format!("{}▏", catalog.search_term()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Sort: "),
            Span::styled(
                catalog.sort_key().label(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Movie Explorer "),
    );
    frame.render_widget(header, area);
}

fn draw_body(frame: &mut Frame, app: &App, area: Rect) {
    let catalog = &app.catalog;
    let block = Block::default().borders(Borders::ALL).title(" Movies ");

    match catalog.phase() {
        LoadPhase::Loading => {
            let notice = Paragraph::new("Loading movies...")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(notice, area);
        }
        LoadPhase::Failed => {
            let notice = Paragraph::new("Failed to load movies.")
                .style(Style::default().fg(Color::Red))
                .block(block);
            frame.render_widget(notice, area);
        }
        LoadPhase::Ready if catalog.filtered().is_empty() => {
            let notice =
                Paragraph::new("No movies found matching your criteria.")
                    .block(block);
            frame.render_widget(notice, area);
        }
        LoadPhase::Ready => {
            let selected = app.selected();
            let items: Vec<ListItem> = catalog
                .visible()
                .iter()
                .enumerate()
                .map(|(idx, movie)| {
                    let item = ListItem::new(movie_line(movie));
                    if idx == selected {
                        item.style(
                            Style::default().add_modifier(Modifier::REVERSED),
                        )
                    } else {
                        item
                    }
                })
                .collect();
            frame.render_widget(List::new(items).block(block), area);
        }
    }
}

fn movie_line(movie: &MovieRecord) -> Line<'_> {
    let date = movie.release_date.as_deref().filter(|d| !d.is_empty());
    Line::from(vec![
        Span::styled(
            movie.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            date.unwrap_or("----------").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            movie.rating_label(),
            Style::default().fg(Color::Green),
        ),
    ])
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let catalog = &app.catalog;
    let total = catalog.total_pages();
    let page_display = if total > 0 {
        format!("Page {} of {}", catalog.current_page(), total)
    } else {
        "Page 0 of 0".to_string()
    };

    let control = |label: &str, enabled: bool| {
        if enabled {
            Span::styled(label.to_string(), Style::default().fg(Color::Cyan))
        } else {
            Span::styled(
                label.to_string(),
                Style::default().fg(Color::DarkGray),
            )
        }
    };

    let mut lines = vec![Line::from(vec![
        control("◀ Previous", catalog.has_prev_page()),
        Span::raw(format!("  {page_display}  ")),
        control("Next ▶", catalog.has_next_page()),
    ])];

    match app.selected_movie() {
        Some(movie) => {
            lines.push(Line::from(Span::styled(
                format!("Poster: {}", app.poster_url_for(movie)),
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            HELP_LINE,
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let footer = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Pages "));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn movie(id: u64, title: &str) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            release_date: Some("2022-03-01".to_string()),
            poster_path: Some("/poster.jpg".to_string()),
            vote_average: Some(7.7),
        }
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn loading_screen_shows_notice() {
        let app = App::new("https://image.tmdb.org/t/p".to_string());
        let rendered = render(&app);
        assert!(rendered.contains("Loading movies..."));
    }

    #[test]
    fn failed_screen_shows_notice() {
        let mut app = App::new("https://image.tmdb.org/t/p".to_string());
        app.catalog.finish_load(Err(
            reelex_core::ProviderError::ApiError("boom".to_string()),
        ));
        let rendered = render(&app);
        assert!(rendered.contains("Failed to load movies."));
    }

    #[test]
    fn ready_screen_shows_rows_page_indicator_and_poster() {
        let mut app = App::new("https://image.tmdb.org/t/p".to_string());
        let movies: Vec<MovieRecord> =
            (1..=25).map(|id| movie(id, &format!("Movie {id}"))).collect();
        app.catalog.finish_load(Ok(movies));

        let rendered = render(&app);
        assert!(rendered.contains("Movie 1"));
        assert!(rendered.contains("Page 1 of 2"));
        assert!(rendered.contains("7.7"));
        assert!(
            rendered.contains("Poster: https://image.tmdb.org/t/p/w342/poster.jpg")
        );
    }

    #[test]
    fn empty_filter_shows_no_results_notice() {
        let mut app = App::new("https://image.tmdb.org/t/p".to_string());
        app.catalog.finish_load(Ok(vec![movie(1, "Heat")]));
        app.catalog.set_search_term("zzz");

        let rendered = render(&app);
        assert!(rendered.contains("No movies found matching your criteria."));
        assert!(rendered.contains("Page 0 of 0"));
    }
}
