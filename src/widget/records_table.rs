use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::pagination::ItemsPerPage;
use crate::records::{self, COLUMNS, PlayerRecord};
use crate::theme::Base16Palette;

const WIDTHS: [Constraint; 5] = [
    Constraint::Fill(3),
    Constraint::Length(5),
    Constraint::Length(4),
    Constraint::Length(4),
    Constraint::Length(5),
];

pub fn summary(total_items: usize, page: usize, items_per_page: ItemsPerPage) -> String {
    match records::page_range(total_items, page, items_per_page) {
        Some((first, last)) => format!("Showing {first}–{last} of {total_items}"),
        None => "No players to show".to_string(),
    }
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    rows: &[PlayerRecord],
    summary: &str,
    palette: &Base16Palette,
) {
    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(palette.text().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let body = rows.iter().map(|record| {
        Row::new(record.cells().into_iter().map(Cell::from)).style(palette.text())
    });

    let table = Table::new(body, WIDTHS).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(false))
            .title(" Players ")
            .title_bottom(Line::from(format!(" {summary} ")).right_aligned()),
    );

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_visible_rows() {
        assert_eq!(summary(45, 3, ItemsPerPage::Twenty), "Showing 41–45 of 45");
        assert_eq!(summary(0, 1, ItemsPerPage::Twenty), "No players to show");
    }
}
