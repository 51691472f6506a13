//! Application state and core logic

use crate::config::SiteConfig;
use crate::endpoint::FormEndpoint;
use crate::error::SiteError;
use crate::office_hours::OfficeHoursMonitor;
use crate::platform::is_submit_shortcut;
use crate::state::{
    ContactFormState, CounterBoard, Debounce, Form, Hit, Lightbox, LoadingScreen, Navigator,
    PageLayout, ScrollTopButton, SectionId, SiteContent, SmoothScroll, SubmitOutcome,
};
use crate::validation::ContactSubmission;
use chrono::{Datelike, Timelike};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Main application struct
pub struct App {
    pub config: SiteConfig,
    pub content: SiteContent,
    pub navigator: Navigator,
    pub contact: ContactFormState,
    pub lightbox: Lightbox,
    pub counters: CounterBoard,
    pub office: OfficeHoursMonitor,
    /// Loading overlay; `None` once it has slid away or been skipped
    pub loading: Option<LoadingScreen>,
    pub scroll_top: ScrollTopButton,
    pub smooth_scroll: Option<SmoothScroll>,
    /// Highlighted gallery image
    pub gallery_selected: usize,
    /// Highlighted dropdown menu row
    pub menu_selected: usize,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Time of the last tick; drawing uses it so a frame is consistent
    pub frame_time: Instant,
    resize: Debounce,
    endpoint: Arc<dyn FormEndpoint>,
    quit: bool,
    /// Section opened once the page is ready, taken on first use
    start_section: Option<SectionId>,
}

impl App {
    /// Debounce window for terminal resizes
    pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

    /// Create a new App instance
    pub fn new(config: SiteConfig, endpoint: Arc<dyn FormEndpoint>, now: Instant) -> Self {
        let content = SiteContent::zanaki();
        let navigator = Navigator::new(content.sections.iter().map(|s| s.id));
        let counters = CounterBoard::new(&content.hero_stats, now);

        let loading = (!config.skip_loading_screen()).then(|| LoadingScreen::new(now));
        let start_section = config.start_section();

        let mut app = Self {
            config,
            content,
            navigator,
            contact: ContactFormState::new(),
            lightbox: Lightbox::default(),
            counters,
            office: OfficeHoursMonitor::new(now),
            loading,
            scroll_top: ScrollTopButton::new(),
            smooth_scroll: None,
            gallery_selected: 0,
            menu_selected: 0,
            terminal_size: None,
            frame_time: now,
            resize: Debounce::new(Self::RESIZE_DEBOUNCE),
            endpoint,
            quit: false,
            start_section,
        };
        if app.loading.is_none() {
            app.mark_page_ready(now);
        }
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Check if the loading screen is up
    pub fn in_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Screen geometry for the current terminal size
    pub fn layout(&self) -> PageLayout {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        PageLayout::new(Rect::new(0, 0, width, height), self.config.menu_breakpoint())
    }

    /// Page scroll is suppressed while the menu or lightbox is up
    pub fn scroll_locked(&self) -> bool {
        self.navigator.scroll_locked() || self.lightbox.locks_scroll()
    }

    /// Largest useful scroll offset for the active section
    pub fn max_scroll(&self) -> u16 {
        let body = self.layout().body();
        crate::ui::content_height(&self.content, self.navigator.active_section(), body.width)
            .saturating_sub(body.height)
    }

    /// Whether anything is mid-animation (drives the fast poll rate)
    pub fn is_animating(&self, now: Instant) -> bool {
        self.loading.is_some()
            || self.navigator.is_animating()
            || self.contact.is_animating(now)
            || self.lightbox.is_animating(now)
            || self.counters.is_animating(now)
            || self.smooth_scroll.is_some()
            || self.resize.is_pending()
    }

    /// Advance every timer. Returns handles for submissions sent this tick.
    pub fn tick<T: Datelike + Timelike>(&mut self, now: Instant, local: &T) -> Vec<JoinHandle<()>> {
        self.frame_time = now;

        if let Some(loading) = self.loading.as_mut() {
            let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
            loading.update(now, height);
            if loading.is_complete() {
                self.finish_loading(now);
            } else if loading.page_ready() {
                self.mark_page_ready(now);
            }
        }

        self.navigator.tick(now);
        self.lightbox.tick(now);

        let home_visible = !self.navigator.is_loading() && self.navigator.is_active(SectionId::Home);
        self.counters.tick(now, home_visible);

        self.office.tick(now, local);

        if let Some(scroll) = self.smooth_scroll {
            self.navigator.set_scroll(scroll.position(now));
            if scroll.is_finished(now) {
                self.smooth_scroll = None;
            }
        }

        if self.resize.poll(now) && !self.layout().compact && self.navigator.dismiss_menu() {
            tracing::debug!("menu closed after resize past breakpoint");
        }

        self.scroll_top.on_scroll(self.navigator.scroll_offset(), now);

        self.contact
            .tick(now)
            .into_iter()
            .map(|submission| self.dispatch(submission))
            .collect()
    }

    /// Hand a submission to the endpoint off the UI task
    fn dispatch(&self, submission: ContactSubmission) -> JoinHandle<()> {
        let endpoint = Arc::clone(&self.endpoint);
        tokio::spawn(async move {
            match endpoint.submit(&submission).await {
                Ok(()) => {}
                Err(SiteError::NoFormAction) => {
                    tracing::info!("no form action configured, submission dropped");
                }
                Err(err) => tracing::warn!(error = %err, "contact submission failed"),
            }
        })
    }

    fn finish_loading(&mut self, now: Instant) {
        self.loading = None;
        self.mark_page_ready(now);
    }

    /// Unlock navigation and open the configured start section
    fn mark_page_ready(&mut self, now: Instant) {
        if !self.navigator.is_loading() {
            return;
        }
        self.navigator.finish_loading();
        tracing::debug!(state = ?self.navigator.state(), "page ready");
        if let Some(id) = self.start_section.take() {
            self.go_to(id, now);
        }
    }

    /// Switch sections and reset per-section view state
    fn go_to(&mut self, id: SectionId, now: Instant) {
        if self.navigator.switch_section(id, now) {
            tracing::debug!(section = %id, generation = self.navigator.generation(), "section requested");
            self.smooth_scroll = None;
            self.menu_selected = id.index();
        }
    }

    fn toggle_menu(&mut self) {
        self.navigator.toggle_menu();
        if self.navigator.menu_open() {
            self.menu_selected = self.navigator.current_section().index();
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        if self.lightbox.locks_scroll() {
            return;
        }
        self.smooth_scroll = None;
        let max = self.max_scroll();
        self.navigator.scroll_by(delta, max);
    }

    fn scroll_to_top(&mut self, now: Instant) {
        if self.scroll_locked() {
            return;
        }
        let from = self.navigator.scroll_offset();
        if from > 0 {
            self.smooth_scroll = Some(SmoothScroll::new(from, 0, now));
        }
    }

    fn page_rows(&self) -> i32 {
        self.layout().body().height.saturating_sub(1).max(1) as i32
    }

    fn open_selected_image(&mut self, now: Instant) {
        if let Some(image) = self.content.gallery.get(self.gallery_selected) {
            self.lightbox.open(image.clone(), now);
        }
    }

    /// The terminal regained focus
    pub fn handle_focus_gained(&mut self) {
        self.office.request_refresh();
    }

    /// The terminal was resized
    pub fn handle_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.terminal_size = Some((height, width));
        self.resize.trigger(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // A key during the slide drops the overlay and reaches the page
        if let Some(loading) = self.loading.as_mut() {
            let page_ready = loading.page_ready();
            loading.skip();
            self.finish_loading(now);
            if !page_ready {
                return;
            }
        }

        // Lightbox is modal
        if self.lightbox.is_visible() {
            match key.code {
                KeyCode::Esc => {
                    self.lightbox.handle_escape(now);
                }
                KeyCode::Char('x') => self.lightbox.close(now),
                _ => {}
            }
            return;
        }

        if self.navigator.menu_open() {
            self.handle_menu_key(key, now);
            return;
        }

        match key.code {
            KeyCode::F(2) => return self.toggle_menu(),
            KeyCode::Left => return self.go_to(self.navigator.current_section().prev(), now),
            KeyCode::Right => return self.go_to(self.navigator.current_section().next(), now),
            KeyCode::PageDown => return self.scroll_by(self.page_rows()),
            KeyCode::PageUp => return self.scroll_by(-self.page_rows()),
            _ => {}
        }

        match self.navigator.input_section() {
            SectionId::Contact => self.handle_contact_key(key, now),
            SectionId::Gallery => self.handle_gallery_key(key, now),
            _ => self.handle_page_key(key, now),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent, now: Instant) {
        let count = SectionId::ALL.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.menu_selected = (self.menu_selected + 1) % count;
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.menu_selected = (self.menu_selected + count - 1) % count;
            }
            KeyCode::Enter => {
                if let Some(id) = SectionId::ALL.get(self.menu_selected) {
                    self.go_to(*id, now);
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(id) = c.to_digit(10).and_then(SectionId::from_number) {
                    self.go_to(id, now);
                }
            }
            KeyCode::Esc | KeyCode::F(2) | KeyCode::Char('m') => self.toggle_menu(),
            _ => {}
        }
    }

    /// Keys shared by every section without text input
    fn handle_page_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(id) = c.to_digit(10).and_then(SectionId::from_number) {
                    self.go_to(id, now);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Char('d') => self.scroll_by(self.page_rows() / 2),
            KeyCode::Char('u') => self.scroll_by(-(self.page_rows() / 2)),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(now),
            _ => {}
        }
    }

    fn handle_gallery_key(&mut self, key: KeyEvent, now: Instant) {
        let count = self.content.gallery.len();
        match key.code {
            KeyCode::Tab if count > 0 => {
                self.gallery_selected = (self.gallery_selected + 1) % count;
            }
            KeyCode::BackTab if count > 0 => {
                self.gallery_selected = (self.gallery_selected + count - 1) % count;
            }
            KeyCode::Enter => self.open_selected_image(now),
            _ => self.handle_page_key(key, now),
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent, now: Instant) {
        if is_submit_shortcut(&key) {
            self.submit_contact(now);
            return;
        }

        let form = &mut self.contact.form;
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter => {
                if form.is_submit_row_active() {
                    self.submit_contact(now);
                } else if form.get_active_field_mut().is_some_and(|f| f.is_multiline) {
                    form.newline();
                } else {
                    form.next_field();
                }
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Esc => self.scroll_to_top(now),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            _ => {}
        }
    }

    fn submit_contact(&mut self, now: Instant) {
        match self.contact.submit(now) {
            SubmitOutcome::Ignored => tracing::debug!("submit ignored while sending"),
            SubmitOutcome::Invalid(count) => {
                tracing::debug!(fields = count, "contact form has errors");
                // Jump to the first failing field
                if let Some(field) = self.contact.errors.fields().next() {
                    self.contact.form.focus(field);
                }
            }
            SubmitOutcome::Accepted => {}
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if let Some(loading) = self.loading.as_mut() {
            let page_ready = loading.page_ready();
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                loading.skip();
                self.finish_loading(now);
            }
            if !page_ready {
                return;
            }
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row, now),
            _ => {}
        }
    }

    fn handle_click(&mut self, col: u16, row: u16, now: Instant) {
        let layout = self.layout();

        if self.lightbox.is_visible() {
            let scale = self.lightbox.scale(now);
            let pos = Position::new(col, row);
            let on_close = layout.lightbox_close(scale).contains(pos);
            let on_backdrop = !layout.lightbox(scale).contains(pos);
            if on_close || on_backdrop {
                self.lightbox.close(now);
            }
            return;
        }

        let hit = layout.hit(col, row, self.navigator.menu_open(), self.scroll_top.is_visible());

        // Any click outside the menu and its trigger dismisses it
        let on_menu = matches!(hit, Hit::MenuItem(_) | Hit::Menu | Hit::MenuButton);
        if !on_menu && self.navigator.dismiss_menu() {
            tracing::debug!("menu dismissed by outside click");
        }

        match hit {
            Hit::NavTab(id) | Hit::MenuItem(id) => self.go_to(id, now),
            Hit::MenuButton => self.toggle_menu(),
            Hit::ScrollTop => self.scroll_to_top(now),
            Hit::Body { row, .. } => self.handle_body_click(row, now),
            Hit::Menu | Hit::Header | Hit::StatusBar => {}
        }
    }

    fn handle_body_click(&mut self, body_row: u16, now: Instant) {
        let scroll = self.navigator.scroll_offset();
        match self.navigator.active_section() {
            SectionId::Gallery => {
                let width = self.layout().body().width;
                if let Some(index) =
                    crate::ui::gallery_index_at(&self.content, width, scroll, body_row)
                {
                    self.gallery_selected = index;
                    self.open_selected_image(now);
                }
            }
            SectionId::Contact => {
                if let Some(slot) = crate::ui::contact_slot_at(scroll, body_row) {
                    self.contact.form.set_active_field(slot);
                    if self.contact.form.is_submit_row_active() {
                        self.submit_contact(now);
                    }
                }
            }
            _ => {}
        }
    }
}
