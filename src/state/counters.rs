//! Hero stat count-up animation

use std::time::{Duration, Instant};

use super::timing::progress;
use super::HeroStat;

/// A single stat counting from zero to its target
#[derive(Debug, Clone)]
pub struct Counter {
    pub label: String,
    pub target: u32,
    started: Option<Instant>,
}

impl Counter {
    pub const DURATION: Duration = Duration::from_millis(2000);

    pub fn new(label: impl Into<String>, target: u32) -> Self {
        Self {
            label: label.into(),
            target,
            started: None,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Begin counting. A counter only ever animates once.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Displayed value at `now`
    pub fn value(&self, now: Instant) -> u32 {
        let Some(started) = self.started else {
            return 0;
        };
        let p = progress(now.saturating_duration_since(started), Self::DURATION);
        if p >= 1.0 {
            return self.target;
        }
        (simple_easing::linear(p) * self.target as f32).floor() as u32
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|s| now.saturating_duration_since(s) < Self::DURATION)
    }
}

/// All hero counters, armed a short while after startup
#[derive(Debug, Clone)]
pub struct CounterBoard {
    counters: Vec<Counter>,
    armed_at: Instant,
}

impl CounterBoard {
    /// Counters don't start before this long after startup
    pub const ARM_DELAY: Duration = Duration::from_secs(2);

    pub fn new(stats: &[HeroStat], started: Instant) -> Self {
        Self {
            counters: stats
                .iter()
                .map(|s| Counter::new(s.label.clone(), s.target))
                .collect(),
            armed_at: started + Self::ARM_DELAY,
        }
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// Start any waiting counters once armed and on screen
    pub fn tick(&mut self, now: Instant, visible: bool) {
        if !visible || now < self.armed_at {
            return;
        }
        for counter in self.counters.iter_mut().filter(|c| !c.is_started()) {
            tracing::debug!(label = %counter.label, target = counter.target, "starting counter");
            counter.start(now);
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.counters.iter().any(|c| c.is_running(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn stats() -> Vec<HeroStat> {
        vec![
            HeroStat { label: "Students".to_string(), target: 1200 },
            HeroStat { label: "Teachers".to_string(), target: 75 },
        ]
    }

    mod counter {
        use super::*;

        #[test]
        fn test_zero_before_start() {
            let counter = Counter::new("Students", 1200);
            assert_eq!(counter.value(Instant::now()), 0);
        }

        #[test]
        fn test_counts_linearly() {
            let start = Instant::now();
            let mut counter = Counter::new("Students", 1200);
            counter.start(start);
            assert_eq!(counter.value(start), 0);
            assert_eq!(counter.value(start + ms(1_000)), 600);
            assert_eq!(counter.value(start + ms(2_000)), 1200);
            assert_eq!(counter.value(start + ms(9_000)), 1200);
        }

        #[test]
        fn test_start_only_once() {
            let start = Instant::now();
            let mut counter = Counter::new("Clubs", 15);
            counter.start(start);
            counter.start(start + ms(1_500));
            assert_eq!(counter.value(start + ms(2_000)), 15);
        }

        #[test]
        fn test_never_exceeds_target() {
            let start = Instant::now();
            let mut counter = Counter::new("Years", 70);
            counter.start(start);
            for step in 0..=25 {
                assert!(counter.value(start + ms(step * 80)) <= 70);
            }
        }
    }

    mod board {
        use super::*;

        #[test]
        fn test_not_started_before_arm_delay() {
            let start = Instant::now();
            let mut board = CounterBoard::new(&stats(), start);
            board.tick(start + ms(1_999), true);
            assert!(board.counters().iter().all(|c| !c.is_started()));
        }

        #[test]
        fn test_not_started_while_hidden() {
            let start = Instant::now();
            let mut board = CounterBoard::new(&stats(), start);
            board.tick(start + ms(5_000), false);
            assert!(board.counters().iter().all(|c| !c.is_started()));
        }

        #[test]
        fn test_starts_when_armed_and_visible() {
            let start = Instant::now();
            let mut board = CounterBoard::new(&stats(), start);
            board.tick(start + ms(2_000), true);
            assert!(board.counters().iter().all(Counter::is_started));
            assert!(board.is_animating(start + ms(2_500)));
            assert!(!board.is_animating(start + ms(4_000)));
        }
    }
}
