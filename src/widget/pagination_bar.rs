use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::pagination::{Control, ControlsView, PageSlot};
use crate::theme::Base16Palette;

pub const PREVIOUS_TEXT: &str = "← Previous";
pub const NEXT_TEXT: &str = "Next →";
pub const GAP_TEXT: &str = "...";

/// One-line rendering of a [`ControlsView`].
pub struct PaginationBar<'a> {
    view: &'a ControlsView,
    focused: Option<Control>,
    palette: &'a Base16Palette,
}

impl<'a> PaginationBar<'a> {
    pub fn new(view: &'a ControlsView, palette: &'a Base16Palette) -> Self {
        Self {
            view,
            focused: None,
            palette,
        }
    }

    pub fn focused(mut self, focused: Option<Control>) -> Self {
        self.focused = focused;
        self
    }

    fn control_style(&self, control: Control, disabled: bool, base: Style) -> Style {
        if disabled {
            self.palette.muted()
        } else if self.focused == Some(control) {
            self.palette.focused()
        } else {
            base
        }
    }

    pub fn line(&self) -> Line<'static> {
        let text = self.palette.text();
        let selector = &self.view.selector;

        let mut spans = vec![
            Span::styled(format!("{} ", selector.label), text),
            Span::styled(
                format!("{} ▾", selector.value),
                self.control_style(Control::ItemsPerPage, selector.disabled, text),
            ),
        ];

        let Some(nav) = &self.view.navigation else {
            return Line::from(spans);
        };

        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            PREVIOUS_TEXT,
            self.control_style(Control::Previous, nav.previous.disabled, text),
        ));

        for slot in &nav.pages {
            spans.push(Span::raw(" "));
            match slot {
                PageSlot::Page {
                    page,
                    current,
                    disabled,
                    ..
                } => {
                    let (label, base) = if *current {
                        (format!("[{page}]"), self.palette.active_page())
                    } else {
                        (page.to_string(), text)
                    };
                    spans.push(Span::styled(
                        label,
                        self.control_style(Control::Page(*page), *disabled, base),
                    ));
                }
                PageSlot::Gap => spans.push(Span::styled(GAP_TEXT, self.palette.muted())),
            }
        }

        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            NEXT_TEXT,
            self.control_style(Control::Next, nav.next.disabled, text),
        ));

        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{ItemsPerPage, PaginationControls, PaginationState};
    use crate::theme::PALETTE;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn bar_text(current: usize, total: usize) -> String {
        let view = PaginationControls::new(PaginationState::new(
            current,
            total,
            ItemsPerPage::Twenty,
            total * 20,
        ))
        .view();
        text_of(&PaginationBar::new(&view, &PALETTE).line())
    }

    #[test]
    fn small_total_lists_pages() {
        assert_eq!(
            bar_text(3, 5),
            "Items per page: 20 ▾  ← Previous 1 2 [3] 4 5 Next →"
        );
    }

    #[test]
    fn middle_page_between_gaps() {
        assert_eq!(
            bar_text(10, 20),
            "Items per page: 20 ▾  ← Previous 1 2 3 ... [10] ... 18 19 20 Next →"
        );
    }

    #[test]
    fn single_page_only_shows_selector() {
        assert_eq!(bar_text(1, 1), "Items per page: 20 ▾");
        assert_eq!(bar_text(1, 0), "Items per page: 20 ▾");
    }

    #[test]
    fn disabled_controls_are_muted() {
        let view = PaginationControls::new(PaginationState::new(1, 5, ItemsPerPage::Ten, 50))
            .disabled(true)
            .view();
        let line = PaginationBar::new(&view, &PALETTE)
            .focused(Some(Control::Next))
            .line();
        let next = line.spans.last().unwrap();
        assert_eq!(next.content, NEXT_TEXT);
        assert_eq!(next.style, PALETTE.muted());
    }

    #[test]
    fn focused_control_is_highlighted() {
        let view =
            PaginationControls::new(PaginationState::new(2, 5, ItemsPerPage::Ten, 50)).view();
        let line = PaginationBar::new(&view, &PALETTE)
            .focused(Some(Control::Page(4)))
            .line();
        let four = line.spans.iter().find(|s| s.content == "4").unwrap();
        assert_eq!(four.style, PALETTE.focused());
    }

    #[test]
    fn renders_into_buffer() {
        let view =
            PaginationControls::new(PaginationState::new(1, 8, ItemsPerPage::Ten, 80)).view();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        PaginationBar::new(&view, &PALETTE).render(area, &mut buf);

        let rendered: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(rendered.contains("[1] 2 3 ... 6 7 8"), "{rendered}");
    }
}
