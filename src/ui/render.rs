use crate::listing::Thumbnail;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, HEADER_TEXT, LINK_TEXT, MUTED_TEXT, REDDIT_ORANGE, SEARCH_BORDER,
    STATUS_ERROR,
};
use crate::ui::view::{self, Element, PostEntry};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const PLACEHOLDER_BLOCK: &str = "▒▒▒▒▒▒ no thumbnail";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let (banner, search, list) = body_regions(body);

    frame.render_widget(
        Header::new().widget(&app.listing_label(), app.is_fetching()),
        header,
    );
    frame.render_widget(Clear, body);

    let mut entries = Vec::new();
    for element in view::build(app.feed(), app.search_state()) {
        match element {
            Element::Heading(text) => {
                let style = Style::default()
                    .fg(REDDIT_ORANGE)
                    .add_modifier(Modifier::BOLD);
                frame.render_widget(Paragraph::new(Span::styled(text, style)), banner);
            }
            Element::Notice(text) => {
                let color = if app.feed().error().is_some() {
                    STATUS_ERROR
                } else {
                    HEADER_TEXT
                };
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                frame.render_widget(Paragraph::new(Span::styled(text, style)), banner);
            }
            Element::SearchBar { text } => draw_search_bar(frame, search, &text),
            Element::Post(entry) => entries.push(entry),
        }
    }

    if !entries.is_empty() && list.height > 0 {
        let items: Vec<ListItem> = entries.iter().map(post_item).collect();
        let widget = List::new(items)
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
            .highlight_symbol("▌ ");
        let mut state = ListState::default().with_selected(Some(app.selected()));
        frame.render_stateful_widget(widget, list, &mut state);
    }

    frame.render_widget(Footer::new().widget(footer, app.status()), footer);
}

fn draw_search_bar(frame: &mut Frame<'_>, area: Rect, text: &str) {
    if area.height == 0 {
        return;
    }
    let block = Block::default()
        .title(Span::styled(
            " Subreddit (empty for front page) ",
            Style::default().fg(REDDIT_ORANGE),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SEARCH_BORDER));
    let widget = Paragraph::new(Span::styled(
        text.to_string(),
        Style::default().fg(HEADER_TEXT),
    ))
    .block(block);
    frame.render_widget(widget, area);

    if area.width > 2 && area.height > 2 {
        let typed = text.chars().count() as u16;
        let x = area.x + 1 + typed.min(area.width.saturating_sub(3));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn post_item(entry: &PostEntry) -> ListItem<'static> {
    let thumbnail = match &entry.thumbnail {
        Thumbnail::Image(url) => Line::from(vec![
            Span::styled("  thumb ", Style::default().fg(MUTED_TEXT)),
            Span::styled(url.clone(), Style::default().fg(LINK_TEXT)),
        ]),
        Thumbnail::Placeholder => Line::from(Span::styled(
            format!("  {}", PLACEHOLDER_BLOCK),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )),
    };

    ListItem::new(vec![
        Line::from(Span::styled(
            entry.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", entry.hyperlink),
            Style::default()
                .fg(LINK_TEXT)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            format!("  {}", entry.subreddit_label),
            Style::default().fg(REDDIT_ORANGE),
        )),
        thumbnail,
        Line::from(Span::styled(
            format!("  {}", entry.upvotes_label),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ])
}
