use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::Base16Palette;
use crate::toast::ToastQueue;

const TOAST_WIDTH: u16 = 36;
const TOAST_HEIGHT: u16 = 3;

/// Areas for each visible toast, stacked down from the top-right corner of
/// `area`. Toasts that would not fit are skipped.
pub fn toast_areas(area: Rect, count: usize) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    (0..count)
        .map(|i| Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y + 1 + i as u16 * TOAST_HEIGHT,
            width,
            height: TOAST_HEIGHT,
        })
        .take_while(|rect| rect.bottom() <= area.bottom())
        .collect()
}

pub fn render(f: &mut Frame, area: Rect, toasts: &ToastQueue, palette: &Base16Palette) {
    for (toast, rect) in toasts
        .all()
        .iter()
        .zip(toast_areas(area, toasts.len()))
    {
        let accent = palette.toast_accent(toast.level);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(Line::from(Span::styled(
                format!(" {} ", toast.level.title()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
        let body = Paragraph::new(toast.message.clone())
            .block(block)
            .style(Style::default().fg(palette.base_06).bg(palette.base_01))
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, rect);
        f.render_widget(body, rect);
    }
}
