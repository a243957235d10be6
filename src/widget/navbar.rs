use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::navbar::{BRAND, Navbar, TOGGLE_LABEL};
use crate::theme::Base16Palette;

pub const MENU_CLOSED: &str = "≡";
pub const MENU_OPEN: &str = "×";

pub fn header_line(navbar: &Navbar, width: u16, palette: &Base16Palette) -> Line<'static> {
    let brand = format!(" {} ", BRAND.label);
    let toggle = if navbar.expanded() {
        MENU_OPEN
    } else {
        MENU_CLOSED
    };
    let labelled = format!("{TOGGLE_LABEL} {toggle} ");
    let toggle = if brand.width() + labelled.width() <= width as usize {
        labelled
    } else {
        format!("{toggle} ")
    };
    let padding = (width as usize).saturating_sub(brand.width() + toggle.width());

    Line::from(vec![
        Span::styled(
            brand,
            Style::default()
                .fg(palette.base_00)
                .bg(palette.base_0d)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(toggle, Style::default().fg(palette.base_06)),
    ])
}

/// Draw the bar into `area` (one row) and, when open, the link menu below it
/// within `bounds`.
pub fn render(f: &mut Frame, area: Rect, bounds: Rect, navbar: &Navbar, palette: &Base16Palette) {
    let bar = Paragraph::new(header_line(navbar, area.width, palette))
        .style(Style::default().bg(palette.base_01));
    f.render_widget(bar, area);

    if !navbar.is_open() {
        return;
    }

    let links = navbar.links();
    let width = links
        .iter()
        .map(|l| l.label.width() as u16 + 4)
        .max()
        .unwrap_or(10)
        .min(bounds.width);
    let height = (links.len() as u16 + 2).min(bounds.height.saturating_sub(1));
    let menu_area = Rect {
        x: area.right().saturating_sub(width),
        y: area.bottom(),
        width,
        height,
    };

    let items: Vec<ListItem> = links
        .iter()
        .map(|link| ListItem::new(Line::from(format!(" {}", link.label))))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        )
        .style(palette.text())
        .highlight_style(palette.focused());

    let mut state = ListState::default();
    state.select(Some(navbar.selected()));

    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(list, menu_area, &mut state);
}
