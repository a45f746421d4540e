use client_core::{ClientSettings, ListViewState};
use shared::domain::MovieItem;

const SCREEN_TITLE: &str = "Movie Browser";
const CELL_WIDTH: usize = 28;
const OVERLAY_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub columns: usize,
    pub image_base_url: String,
    pub poster_size: String,
}

impl RenderOptions {
    pub fn from_settings(settings: &ClientSettings, columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            image_base_url: settings.image_base_url.clone(),
            poster_size: settings.poster_size.clone(),
        }
    }
}

pub fn render_screen(state: &ListViewState, options: &RenderOptions, notice: &str) -> String {
    let mut out = String::new();
    out.push_str(SCREEN_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(SCREEN_TITLE.len()));
    out.push('\n');
    out.push_str(&render_grid(state, options.columns));

    if let Some(item) = state.overlay_item() {
        out.push('\n');
        out.push_str(&render_overlay(item, options));
    }

    out.push('\n');
    out.push_str(&state.status_line());
    out.push('\n');
    if !notice.is_empty() {
        out.push_str(notice);
        out.push('\n');
    }
    out
}

/// Grid of titles, `columns` per row, numbered from 1.
pub fn render_grid(state: &ListViewState, columns: usize) -> String {
    let columns = columns.max(1);
    let count = state.item_count();
    let mut out = String::new();

    for row_start in (0..count).step_by(columns) {
        let row_end = (row_start + columns).min(count);
        let cells: Vec<String> = (row_start..row_end)
            .filter_map(|index| {
                state.item_at(index).ok().map(|item| {
                    format!(
                        "{:>3}. {:<width$}",
                        index + 1,
                        truncate(item.title(), CELL_WIDTH),
                        width = CELL_WIDTH
                    )
                })
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}

pub fn render_overlay(item: &MovieItem, options: &RenderOptions) -> String {
    let mut lines = Vec::new();
    lines.push(match item.release_date() {
        Some(date) => format!("{} ({})", item.title(), date.format("%Y")),
        None => item.title().to_string(),
    });
    lines.push(format!("Rating: {:.1}/10", item.vote_average()));
    if let Some(date) = item.release_date() {
        lines.push(format!("Released: {date}"));
    }
    if let Some(url) = item.poster_url(&options.image_base_url, &options.poster_size) {
        lines.push(format!("Poster: {url}"));
    }
    if !item.overview().is_empty() {
        lines.push(String::new());
        lines.extend(wrap(item.overview(), OVERLAY_WIDTH));
    }

    let mut out = String::from("+-- Details\n");
    for line in lines {
        out.push_str("| ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("+-- type 'close' to dismiss\n");
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use shared::domain::MovieId;

    fn options() -> RenderOptions {
        RenderOptions::from_settings(&ClientSettings::default(), 2)
    }

    #[test]
    fn truncates_long_titles_with_ellipsis() {
        assert_eq!(truncate("Heat", 10), "Heat");
        assert_eq!(truncate("Dr. Strangelove or: How I Learned", 10), "Dr. Stran…");
        assert_eq!(truncate("Dr. Strangelove or: How I Learned", 10).chars().count(), 10);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert!(wrap("   ", 9).is_empty());
    }

    #[test]
    fn overlay_shows_year_rating_poster_and_overview() {
        let item = MovieItem::new(MovieId(550), "Fight Club")
            .with_release_date(NaiveDate::from_ymd_opt(1999, 10, 15).expect("date"))
            .with_vote_average(8.433)
            .with_poster_path("/fc.jpg")
            .with_overview("An insomniac office worker crosses paths with a soap maker.");

        let rendered = render_overlay(&item, &options());

        assert!(rendered.contains("| Fight Club (1999)"));
        assert!(rendered.contains("| Rating: 8.4/10"));
        assert!(rendered.contains("| Released: 1999-10-15"));
        assert!(rendered.contains("| Poster: https://image.tmdb.org/t/p/w500/fc.jpg"));
        assert!(rendered.contains("soap maker."));
    }

    #[test]
    fn overlay_without_optional_fields_keeps_title_and_rating() {
        let item = MovieItem::new(MovieId(1), "Untitled");
        let rendered = render_overlay(&item, &options());

        assert!(rendered.contains("| Untitled\n"));
        assert!(!rendered.contains("Poster:"));
        assert!(!rendered.contains("Released:"));
    }

    #[test]
    fn columns_are_never_zero() {
        let opts = RenderOptions::from_settings(&ClientSettings::default(), 0);
        assert_eq!(opts.columns, 1);
    }
}
