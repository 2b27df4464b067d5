//! Hero banner state: fake loading bar, animated player counter, rotating tips
//! and the stat grid derived from configuration.

use crate::config::{Feature, GalleryImage, SiteConfig};
use rand::Rng;

/// Interval between loading bar steps.
pub const LOADING_TICK_MS: u32 = 30;
/// Interval between player counter steps.
pub const COUNTER_TICK_MS: u32 = 16;
/// Interval between loading tips.
pub const TIP_ROTATE_MS: u32 = 4000;

const LOADING_STEP: u8 = 2;
const COUNTER_DURATION_MS: u32 = 2000;
const COUNTER_FLOOR: u32 = 100;
const FEATURE_PILL_LIMIT: usize = 3;
const MINI_GALLERY_LIMIT: usize = 4;

/// Cosmetic loading bar shown before the hero renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingProgress {
    percent: u8,
    finished: bool,
}

impl LoadingProgress {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            percent: 0,
            finished: false,
        }
    }

    #[must_use]
    pub const fn percent(self) -> u8 {
        self.percent
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        self.finished
    }

    /// Advance one step. Returns `false` once the bar is done and the timer
    /// driving it should stop.
    pub fn tick(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if self.percent >= 100 {
            self.percent = 100;
            self.finished = true;
            return false;
        }
        self.percent = self.percent.saturating_add(LOADING_STEP).min(100);
        true
    }
}

/// Online players counter that climbs to a random target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerCounter {
    target: u32,
    max_players: u32,
    increment: f64,
    current: f64,
    shown: u32,
    done: bool,
}

impl PlayerCounter {
    /// Pick a target in `[min(100, max), max)`; exactly the lower bound when
    /// that range is empty.
    pub fn new<R: Rng + ?Sized>(max_players: u32, rng: &mut R) -> Self {
        let low = COUNTER_FLOOR.min(max_players);
        let target = if max_players > low {
            rng.gen_range(low..max_players)
        } else {
            low
        };
        Self::with_target(target, max_players)
    }

    #[must_use]
    pub fn with_target(target: u32, max_players: u32) -> Self {
        let steps = f64::from(COUNTER_DURATION_MS) / f64::from(COUNTER_TICK_MS);
        Self {
            target,
            max_players,
            increment: f64::from(target) / steps,
            current: 0.0,
            shown: 0,
            done: false,
        }
    }

    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub const fn shown(&self) -> u32 {
        self.shown
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// `"shown/max"` as displayed in the stat grid.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.shown, self.max_players)
    }

    /// Advance one step. Returns `false` once the target is reached.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.current += self.increment;
        if self.current >= f64::from(self.target) {
            self.shown = self.target;
            self.done = true;
            return false;
        }
        self.shown = self.current.floor() as u32;
        true
    }
}

/// Index into the configured loading tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TipRotation {
    index: usize,
    len: usize,
}

impl TipRotation {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Whether a rotation timer is needed at all.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.len > 0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            len: self.len,
        }
    }

    #[must_use]
    pub fn current<'a>(self, tips: &'a [String]) -> Option<&'a str> {
        tips.get(self.index).map(String::as_str)
    }
}

/// One cell of the hero stat grid; `label_key` is an i18n key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroStat {
    pub label_key: &'static str,
    pub value: String,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroStats {
    pub items: Vec<HeroStat>,
}

impl HeroStats {
    #[must_use]
    pub fn from_config(config: &SiteConfig, players_label: String) -> Self {
        Self {
            items: vec![
                HeroStat {
                    label_key: "hero.stats.players",
                    value: players_label,
                    highlight: false,
                },
                HeroStat {
                    label_key: "hero.stats.status",
                    value: "ONLINE".to_string(),
                    highlight: true,
                },
                HeroStat {
                    label_key: "hero.stats.jobs",
                    value: format!("{}+", config.jobs.list.len()),
                    highlight: false,
                },
                HeroStat {
                    label_key: "hero.stats.uptime",
                    value: "99.9%".to_string(),
                    highlight: false,
                },
            ],
        }
    }
}

/// Features highlighted as pills in the hero.
#[must_use]
pub fn feature_pills(config: &SiteConfig) -> &[Feature] {
    let end = config.features.len().min(FEATURE_PILL_LIMIT);
    &config.features[..end]
}

/// Thumbnails shown under the hero stats.
#[must_use]
pub fn mini_gallery(config: &SiteConfig) -> &[GalleryImage] {
    let end = config.gallery.images.len().min(MINI_GALLERY_LIMIT);
    &config.gallery.images[..end]
}
