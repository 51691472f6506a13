//! Section navigation and menu state
//!
//! The [`Navigator`] owns the single [`PageState`] for the session. Section
//! swaps run through an explicit [`SectionTransition`] machine so that a
//! second switch arriving mid-animation supersedes the first instead of
//! racing it.

use super::SectionId;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use super::timing::progress;

/// Page-wide state, mutated only through [`Navigator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Last section the user asked for (drives the nav highlight)
    pub current_section: SectionId,
    /// The one section currently shown
    pub active_section: SectionId,
    pub menu_open: bool,
    pub loading: bool,
    /// Vertical scroll of the page body, in rows
    pub scroll_offset: u16,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_section: SectionId::Home,
            active_section: SectionId::Home,
            menu_open: false,
            loading: true,
            scroll_offset: 0,
        }
    }
}

/// Section swap animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionTransition {
    #[default]
    Idle,
    /// `from` is still shown and fading away; `to` replaces it afterwards
    FadingOut {
        from: SectionId,
        to: SectionId,
        started: Instant,
    },
    /// `section` is already active and fading in
    FadingIn { section: SectionId, started: Instant },
}

/// What the body should render this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionVisual {
    pub section: SectionId,
    /// 0.0 (invisible) to 1.0 (fully shown)
    pub opacity: f32,
    /// Rows the content is pushed down while entering
    pub offset_rows: u16,
}

/// Tracks the visible section and the collapsible menu
#[derive(Debug, Clone)]
pub struct Navigator {
    state: PageState,
    transition: SectionTransition,
    /// Sections the page actually has content for
    available: BTreeSet<SectionId>,
    /// Bumped on every accepted switch
    generation: u64,
    switched_at: Option<Instant>,
}

impl Navigator {
    pub const FADE_OUT: Duration = Duration::from_millis(300);
    pub const FADE_IN: Duration = Duration::from_millis(500);
    /// Delay after a switch before section cards start revealing
    pub const REVEAL_DELAY: Duration = Duration::from_millis(500);
    /// Gap between successive card reveals
    pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);
    /// Rows the entering section slides up from
    const ENTER_OFFSET_ROWS: f32 = 2.0;

    pub fn new(available: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            state: PageState::default(),
            transition: SectionTransition::Idle,
            available: available.into_iter().collect(),
            generation: 0,
            switched_at: None,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn transition(&self) -> SectionTransition {
        self.transition
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn current_section(&self) -> SectionId {
        self.state.current_section
    }

    pub fn active_section(&self) -> SectionId {
        self.state.active_section
    }

    /// Section that receives keyboard input: the incoming one during a fade-out
    pub fn input_section(&self) -> SectionId {
        match self.transition {
            SectionTransition::FadingOut { to, .. } => to,
            _ => self.state.active_section,
        }
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.state.active_section == id
    }

    /// Whether the nav control for `id` is highlighted
    pub fn is_highlighted(&self, id: SectionId) -> bool {
        self.state.current_section == id
    }

    pub fn menu_open(&self) -> bool {
        self.state.menu_open
    }

    /// Page scroll is suppressed while the menu is open
    pub fn scroll_locked(&self) -> bool {
        self.state.menu_open
    }

    pub fn scroll_offset(&self) -> u16 {
        self.state.scroll_offset
    }

    /// End the startup loading state. Called once by the loading timer.
    pub fn finish_loading(&mut self) {
        if self.state.loading {
            tracing::debug!("loading finished");
        }
        self.state.loading = false;
    }

    /// Switch the visible section.
    ///
    /// Returns false (and changes nothing) while loading. When the page has
    /// no content for `id` the request is still recorded, but the currently
    /// active section stays on screen.
    pub fn switch_section(&mut self, id: SectionId, now: Instant) -> bool {
        if self.state.loading {
            tracing::debug!(section = %id, "ignoring section switch while loading");
            return false;
        }

        self.state.current_section = id;
        self.dismiss_menu();
        self.state.scroll_offset = 0;

        if !self.available.contains(&id) {
            tracing::debug!(section = %id, "no content for section");
            return true;
        }

        self.generation += 1;
        self.switched_at = Some(now);
        self.transition = match self.transition {
            SectionTransition::Idle => SectionTransition::FadingOut {
                from: self.state.active_section,
                to: id,
                started: now,
            },
            // Still fading out: keep the clock, replace the destination
            SectionTransition::FadingOut { from, started, .. } => {
                SectionTransition::FadingOut { from, to: id, started }
            }
            SectionTransition::FadingIn { section, .. } => SectionTransition::FadingOut {
                from: section,
                to: id,
                started: now,
            },
        };
        true
    }

    /// Advance the transition machine
    pub fn tick(&mut self, now: Instant) {
        if let SectionTransition::FadingOut { to, started, .. } = self.transition {
            if now.saturating_duration_since(started) >= Self::FADE_OUT {
                self.state.active_section = to;
                self.transition = SectionTransition::FadingIn {
                    section: to,
                    started: started + Self::FADE_OUT,
                };
            }
        }
        if let SectionTransition::FadingIn { started, .. } = self.transition {
            if now.saturating_duration_since(started) >= Self::FADE_IN {
                self.transition = SectionTransition::Idle;
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition != SectionTransition::Idle
    }

    /// Section, opacity and offset to draw at `now`
    pub fn visual(&self, now: Instant) -> SectionVisual {
        match self.transition {
            SectionTransition::Idle => SectionVisual {
                section: self.state.active_section,
                opacity: 1.0,
                offset_rows: 0,
            },
            SectionTransition::FadingOut { from, started, .. } => {
                let p = progress(now.saturating_duration_since(started), Self::FADE_OUT);
                SectionVisual {
                    section: from,
                    opacity: 1.0 - simple_easing::sine_in_out(p),
                    offset_rows: 0,
                }
            }
            SectionTransition::FadingIn { section, started } => {
                let p = progress(now.saturating_duration_since(started), Self::FADE_IN);
                let eased = simple_easing::sine_in_out(p);
                SectionVisual {
                    section,
                    opacity: eased,
                    offset_rows: ((1.0 - eased) * Self::ENTER_OFFSET_ROWS).round() as u16,
                }
            }
        }
    }

    /// How many of the active section's `total` cards are revealed at `now`
    pub fn revealed_items(&self, now: Instant, total: usize) -> usize {
        let Some(switched_at) = self.switched_at else {
            return total;
        };
        let elapsed = now.saturating_duration_since(switched_at);
        if elapsed < Self::REVEAL_DELAY {
            return 0;
        }
        let steps = (elapsed - Self::REVEAL_DELAY).as_millis() / Self::REVEAL_STAGGER.as_millis();
        total.min(steps as usize + 1)
    }

    /// Flip the menu; open suppresses page scroll, closed restores it
    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        tracing::debug!(open = self.state.menu_open, "menu toggled");
    }

    /// Close the menu if it is open. Returns true if it was open.
    ///
    /// Used for clicks outside the menu and its trigger, and for resizes past
    /// the menu breakpoint.
    pub fn dismiss_menu(&mut self) -> bool {
        let was_open = self.state.menu_open;
        self.state.menu_open = false;
        was_open
    }

    /// Scroll the page body by `delta` rows, clamped to `0..=max`
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        if self.scroll_locked() {
            return;
        }
        let next = (self.state.scroll_offset as i32 + delta).clamp(0, max as i32);
        self.state.scroll_offset = next as u16;
    }

    /// Set the scroll position directly (used by smooth scrolling)
    pub fn set_scroll(&mut self, offset: u16) {
        self.state.scroll_offset = offset;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(SectionId::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn ready_navigator() -> Navigator {
        let mut nav = Navigator::default();
        nav.finish_loading();
        nav
    }

    fn active_count(nav: &Navigator) -> usize {
        SectionId::ALL.iter().filter(|s| nav.is_active(**s)).count()
    }

    mod page_state {
        use super::*;

        #[test]
        fn test_initial_state() {
            let state = PageState::default();
            assert!(state.loading);
            assert!(!state.menu_open);
            assert_eq!(state.current_section, SectionId::Home);
            assert_eq!(state.active_section, SectionId::Home);
            assert_eq!(state.scroll_offset, 0);
        }
    }

    mod switch_section {
        use super::*;

        #[test]
        fn test_ignored_while_loading() {
            let mut nav = Navigator::default();
            let before = nav.state().clone();

            assert!(!nav.switch_section(SectionId::About, Instant::now()));

            assert_eq!(nav.state(), &before);
            assert_eq!(nav.transition(), SectionTransition::Idle);
        }

        #[test]
        fn test_input_follows_the_incoming_section() {
            let mut nav = ready_navigator();
            let start = Instant::now();
            assert!(nav.switch_section(SectionId::Contact, start));

            assert_eq!(nav.active_section(), SectionId::Home);
            assert_eq!(nav.input_section(), SectionId::Contact);

            nav.tick(start + Duration::from_millis(300));
            assert_eq!(nav.active_section(), SectionId::Contact);
            assert_eq!(nav.input_section(), SectionId::Contact);
        }

        #[test]
        fn test_records_current_section_immediately() {
            let mut nav = ready_navigator();
            assert!(nav.switch_section(SectionId::About, Instant::now()));
            assert_eq!(nav.current_section(), SectionId::About);
            assert!(nav.is_highlighted(SectionId::About));
            assert!(!nav.is_highlighted(SectionId::Home));
        }

        #[test]
        fn test_active_changes_after_fade_out() {
            let start = Instant::now();
            let mut nav = ready_navigator();
            nav.switch_section(SectionId::Clubs, start);

            nav.tick(start + ms(299));
            assert!(nav.is_active(SectionId::Home));

            nav.tick(start + ms(300));
            assert!(nav.is_active(SectionId::Clubs));
            assert!(matches!(
                nav.transition(),
                SectionTransition::FadingIn { section: SectionId::Clubs, .. }
            ));

            nav.tick(start + ms(800));
            assert_eq!(nav.transition(), SectionTransition::Idle);
        }

        #[test]
        fn test_single_late_tick_completes_whole_transition() {
            let start = Instant::now();
            let mut nav = ready_navigator();
            nav.switch_section(SectionId::Results, start);
            nav.tick(start + ms(5_000));
            assert!(nav.is_active(SectionId::Results));
            assert!(!nav.is_animating());
        }

        #[test]
        fn test_closes_open_menu() {
            let mut nav = ready_navigator();
            nav.toggle_menu();
            assert!(nav.scroll_locked());

            nav.switch_section(SectionId::Gallery, Instant::now());

            assert!(!nav.menu_open());
            assert!(!nav.scroll_locked());
        }

        #[test]
        fn test_scrolls_to_top() {
            let mut nav = ready_navigator();
            nav.scroll_by(12, 40);
            assert_eq!(nav.scroll_offset(), 12);
            nav.switch_section(SectionId::About, Instant::now());
            assert_eq!(nav.scroll_offset(), 0);
        }

        #[test]
        fn test_missing_section_records_but_keeps_visible() {
            let start = Instant::now();
            let mut nav = Navigator::new([SectionId::Home, SectionId::About]);
            nav.finish_loading();

            assert!(nav.switch_section(SectionId::Gallery, start));
            nav.tick(start + ms(1_000));

            assert_eq!(nav.current_section(), SectionId::Gallery);
            assert!(nav.is_active(SectionId::Home));
            assert_eq!(nav.transition(), SectionTransition::Idle);
            assert_eq!(active_count(&nav), 1);
        }

        #[test]
        fn test_switch_during_fade_out_retargets() {
            let start = Instant::now();
            let mut nav = ready_navigator();
            nav.switch_section(SectionId::About, start);
            nav.switch_section(SectionId::Contact, start + ms(100));

            assert_eq!(
                nav.transition(),
                SectionTransition::FadingOut {
                    from: SectionId::Home,
                    to: SectionId::Contact,
                    started: start,
                }
            );

            nav.tick(start + ms(300));
            assert!(nav.is_active(SectionId::Contact));
        }

        #[test]
        fn test_switch_during_fade_in_restarts_from_entering_section() {
            let start = Instant::now();
            let mut nav = ready_navigator();
            nav.switch_section(SectionId::About, start);
            nav.tick(start + ms(400));
            assert!(nav.is_active(SectionId::About));

            nav.switch_section(SectionId::Clubs, start + ms(450));
            assert_eq!(
                nav.transition(),
                SectionTransition::FadingOut {
                    from: SectionId::About,
                    to: SectionId::Clubs,
                    started: start + ms(450),
                }
            );
        }

        #[test]
        fn test_generation_bumps_per_accepted_switch() {
            let mut nav = Navigator::default();
            nav.switch_section(SectionId::About, Instant::now());
            assert_eq!(nav.generation(), 0);

            nav.finish_loading();
            nav.switch_section(SectionId::About, Instant::now());
            nav.switch_section(SectionId::Clubs, Instant::now());
            assert_eq!(nav.generation(), 2);
        }

        #[test]
        fn test_exactly_one_active_after_any_sequence() {
            let start = Instant::now();
            let mut nav = ready_navigator();
            let mut t = start;
            // Deterministic pseudo-random walk over sections and tick gaps
            let mut seed: u64 = 0x2545_f491;
            for _ in 0..200 {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                let section = SectionId::ALL[(seed % 7) as usize];
                t += ms(seed % 700);
                nav.switch_section(section, t);
                nav.tick(t);
                assert_eq!(active_count(&nav), 1);
            }
            let last = nav.current_section();
            nav.tick(t + ms(1_000));
            assert_eq!(active_count(&nav), 1);
            assert!(nav.is_active(last));
        }
    }

    mod menu {
        use super::*;

        #[test]
        fn test_toggle_twice_restores() {
            let mut nav = ready_navigator();
            let original = nav.menu_open();
            nav.toggle_menu();
            assert_ne!(nav.menu_open(), original);
            nav.toggle_menu();
            assert_eq!(nav.menu_open(), original);
        }

        #[test]
        fn test_toggle_works_while_loading() {
            let mut nav = Navigator::default();
            nav.toggle_menu();
            assert!(nav.menu_open());
        }

        #[test]
        fn test_dismiss_menu_reports_previous_state() {
            let mut nav = ready_navigator();
            assert!(!nav.dismiss_menu());
            nav.toggle_menu();
            assert!(nav.dismiss_menu());
            assert!(!nav.menu_open());
        }

        #[test]
        fn test_scroll_suppressed_while_open() {
            let mut nav = ready_navigator();
            nav.toggle_menu();
            nav.scroll_by(5, 40);
            assert_eq!(nav.scroll_offset(), 0);
            nav.toggle_menu();
            nav.scroll_by(5, 40);
            assert_eq!(nav.scroll_offset(), 5);
        }
    }

    mod scrolling {
        use super::*;

        #[test]
        fn test_scroll_clamps_to_bounds() {
            let mut nav = ready_navigator();
            nav.scroll_by(-3, 10);
            assert_eq!(nav.scroll_offset(), 0);
            nav.scroll_by(50, 10);
            assert_eq!(nav.scroll_offset(), 10);
        }
    }

    mod visuals {
        use super::*;

        #[test]
        fn test_idle_is_fully_visible() {
            let nav = ready_navigator();
            let v = nav.visual(Instant::now());
            assert_eq!(v.section, SectionId::Home);
            assert_eq!(v.opacity, 1.0);
            assert_eq!(v.offset_rows, 0);
        }

        #[test]
        fn test_fading_out_shows_old_section() {
            let start = Instant::now();
            let mut nav = ready_navigator();
            nav.switch_section(SectionId::About, start);
            let v = nav.visual(start + ms(150));
            assert_eq!(v.section, SectionId::Home);
            assert!(v.opacity < 1.0);
        }

        #[test]
        fn test_fading_in_starts_offset() {
            let start = Instant::now();
            let mut nav = ready_navigator();
            nav.switch_section(SectionId::About, start);
            nav.tick(start + ms(300));
            let v = nav.visual(start + ms(300));
            assert_eq!(v.section, SectionId::About);
            assert_eq!(v.opacity, 0.0);
            assert_eq!(v.offset_rows, 2);
        }
    }

    mod reveal {
        use super::*;

        #[test]
        fn test_everything_revealed_before_first_switch() {
            let nav = ready_navigator();
            assert_eq!(nav.revealed_items(Instant::now(), 4), 4);
        }

        #[test]
        fn test_staggered_after_switch() {
            let start = Instant::now();
            let mut nav = ready_navigator();
            nav.switch_section(SectionId::Academics, start);

            assert_eq!(nav.revealed_items(start + ms(499), 5), 0);
            assert_eq!(nav.revealed_items(start + ms(500), 5), 1);
            assert_eq!(nav.revealed_items(start + ms(650), 5), 2);
            assert_eq!(nav.revealed_items(start + ms(2_000), 5), 5);
        }
    }
}
