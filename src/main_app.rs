use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};
use std::time::Duration;

use crate::event_source::EventSource;
use crate::navbar::{NavLink, Navbar};
use crate::pagination::{
    Control, ItemsPerPage, PaginationControls, PaginationHandler, PaginationState,
};
use crate::records::{self, PlayerRecord};
use crate::settings::Settings;
use crate::theme::palette;
use crate::toast::ToastQueue;
use crate::widget::{self, PaginationBar};

const HELP_TEXT: &str =
    "n/p: Next/Prev | Tab: Focus | Enter: Activate | +/-: Page size | m: Menu | h: Home | q: Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
}

/// Hands activated navbar links to the outside world.
pub trait LinkOpener {
    fn open(&mut self, link: &NavLink) -> Result<()>;
}

/// Opens links in the system browser.
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&mut self, link: &NavLink) -> Result<()> {
        open::that(link.url)?;
        Ok(())
    }
}

pub struct App {
    records: Vec<PlayerRecord>,
    current_page: usize,
    items_per_page: ItemsPerPage,
    /// Marks the bar busy, every pagination control goes inert.
    busy: bool,
    focus: Option<Control>,
    pub navbar: Navbar,
    pub toasts: ToastQueue,
    link_opener: Box<dyn LinkOpener>,
}

impl App {
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        Self::with_settings(records, &Settings::default())
    }

    pub fn with_settings(records: Vec<PlayerRecord>, settings: &Settings) -> Self {
        info!("Starting with {} records", records.len());
        Self {
            records,
            current_page: 1,
            items_per_page: settings.items_per_page,
            busy: false,
            focus: None,
            navbar: Navbar::new(),
            toasts: ToastQueue::new(settings.toast_duration(), settings.max_toasts),
            link_opener: Box::new(BrowserOpener),
        }
    }

    pub fn with_link_opener(mut self, opener: Box<dyn LinkOpener>) -> Self {
        self.link_opener = opener;
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> ItemsPerPage {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        records::total_pages(self.records.len(), self.items_per_page)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn focus(&self) -> Option<Control> {
        self.focus
    }

    pub fn visible_records(&self) -> &[PlayerRecord] {
        records::page_slice(&self.records, self.current_page, self.items_per_page)
    }

    /// Snapshot handed to the pagination controls for this render.
    pub fn pagination_state(&self) -> PaginationState {
        PaginationState::for_items(self.current_page, self.items_per_page, self.records.len())
            .clamped()
    }

    pub fn pagination_controls(&self) -> PaginationControls {
        PaginationControls::new(self.pagination_state()).disabled(self.busy)
    }

    /// Keep the page and focus valid after the data or page size changed.
    fn normalize(&mut self) {
        self.current_page = self.pagination_state().current_page;
        let controls = self.pagination_controls().view().controls();
        if let Some(focus) = self.focus {
            if !controls.contains(&focus) {
                self.focus = None;
            }
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let controls = self.pagination_controls().view().controls();
        if controls.is_empty() {
            self.focus = None;
            return;
        }
        let position = self
            .focus
            .and_then(|focus| controls.iter().position(|c| *c == focus));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => controls.len() - 1,
            (Some(i), true) => (i + 1) % controls.len(),
            (Some(i), false) => (i + controls.len() - 1) % controls.len(),
        };
        self.focus = Some(controls[next]);
    }

    fn activate_focused(&mut self) {
        let Some(focus) = self.focus else {
            return;
        };
        let controls = self.pagination_controls();
        if focus == Control::ItemsPerPage {
            controls.request_items_per_page(self.items_per_page.next(), self);
        } else {
            controls.activate(focus, self);
        }
    }

    fn change_items_per_page(&mut self, items_per_page: ItemsPerPage) {
        let controls = self.pagination_controls();
        controls.request_items_per_page(items_per_page, self);
    }

    fn open_selected_link(&mut self) {
        if let Some(link) = self.navbar.activate() {
            self.open_link(link);
        }
    }

    fn open_brand_link(&mut self) {
        let link = self.navbar.activate_brand();
        self.open_link(link);
    }

    fn open_link(&mut self, link: NavLink) {
        info!("Opening {}", link.url);
        if let Err(e) = self.link_opener.open(&link) {
            warn!("Failed to open {}: {e}", link.url);
            self.toasts.error(format!("Could not open {}", link.label));
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<AppAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if self.navbar.is_open() {
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.navbar.select_next(),
                KeyCode::Char('k') | KeyCode::Up => self.navbar.select_previous(),
                KeyCode::Enter => self.open_selected_link(),
                KeyCode::Char('h') => self.open_brand_link(),
                KeyCode::Esc | KeyCode::Char('m') => self.navbar.close(),
                KeyCode::Char('q') => return Some(AppAction::Quit),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(AppAction::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(AppAction::Quit);
            }
            KeyCode::Char('n') | KeyCode::Right => {
                let controls = self.pagination_controls();
                controls.request_next(self);
            }
            KeyCode::Char('p') | KeyCode::Left => {
                let controls = self.pagination_controls();
                controls.request_previous(self);
            }
            KeyCode::Char('+') => self.change_items_per_page(self.items_per_page.next()),
            KeyCode::Char('-') => self.change_items_per_page(self.items_per_page.previous()),
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Char('m') => self.navbar.toggle(),
            KeyCode::Char('h') => self.open_brand_link(),
            KeyCode::Char('x') => {
                self.busy = !self.busy;
                debug!("Pagination busy: {}", self.busy);
            }
            KeyCode::Esc => {
                if !self.toasts.dismiss_latest() {
                    self.focus = None;
                }
            }
            _ => {}
        }

        self.normalize();
        None
    }

    /// Periodic housekeeping, returns true when a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.toasts.prune()
    }

    pub fn draw(&self, f: &mut Frame) {
        let palette = palette();
        let area = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let summary = widget::records_table::summary(
            self.records.len(),
            self.current_page,
            self.items_per_page,
        );
        widget::records_table::render(f, chunks[1], self.visible_records(), &summary, palette);

        let view = self.pagination_controls().view();
        f.render_widget(
            PaginationBar::new(&view, palette).focused(self.focus),
            chunks[2],
        );

        let help =
            Paragraph::new(Line::from(HELP_TEXT)).style(Style::default().fg(palette.base_03));
        f.render_widget(help, chunks[3]);

        let body = Rect {
            y: chunks[1].y,
            height: area.height.saturating_sub(1),
            ..area
        };
        widget::toasts::render(f, body, &self.toasts, palette);
        widget::navbar::render(f, chunks[0], body, &self.navbar, palette);
    }
}

impl PaginationHandler for App {
    fn on_page_change(&mut self, page: usize) {
        debug!("Page change: {} -> {}", self.current_page, page);
        self.current_page = page;
    }

    fn on_items_per_page_change(&mut self, items_per_page: ItemsPerPage) {
        if items_per_page == self.items_per_page {
            return;
        }
        info!("Items per page: {} -> {}", self.items_per_page, items_per_page);
        self.items_per_page = items_per_page;
        self.current_page = 1;
        self.toasts.info(format!("Showing {items_per_page} players per page"));
    }
}

pub fn run_app_with_event_source<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_source: &mut dyn EventSource,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let tick_rate = Duration::from_millis(250);
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| app.draw(f))?;
            needs_redraw = false;
        }

        if event_source.poll(tick_rate)? {
            match event_source.read()? {
                Event::Key(key) => {
                    if app.handle_key_event(key) == Some(AppAction::Quit) {
                        info!("Quit requested");
                        return Ok(());
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        if app.tick() {
            needs_redraw = true;
        }
    }
}
