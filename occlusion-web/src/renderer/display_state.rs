//! Display state - keeps the meter steady across detection dropouts
//!
//! A fresh result replaces the displayed value and cancels any pending
//! fade. A frame without a face arms a single fade timer; when it
//! expires before fresh data arrives the display is forced to full
//! occlusion.

use crate::occlusion::{OcclusionResult, RegionSpec};

pub const DEFAULT_FADE_MS: f64 = 2000.0;

/// The one outstanding deferred task
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadeTimer {
    Idle,
    Armed { due_at_ms: f64 },
    /// Fired; stays here until a fresh result arrives
    Expired,
}

pub struct DisplayState {
    last: OcclusionResult,
    fade: FadeTimer,
    fade_duration_ms: f64,
    regions: &'static [RegionSpec],
}

impl DisplayState {
    pub fn new(fade_duration_ms: f64, regions: &'static [RegionSpec]) -> Self {
        Self {
            last: OcclusionResult::empty(),
            fade: FadeTimer::Idle,
            fade_duration_ms,
            regions,
        }
    }

    /// Feed one frame's result (`None` = no face) and get what to display
    pub fn observe(&mut self, fresh: Option<&OcclusionResult>, now_ms: f64) -> &OcclusionResult {
        match fresh {
            Some(result) => {
                self.last = result.clone();
                self.cancel_fade();
            }
            None => {
                if self.fade == FadeTimer::Idle {
                    self.fade = FadeTimer::Armed {
                        due_at_ms: now_ms + self.fade_duration_ms,
                    };
                    log::debug!("face lost, meter fades in {}ms", self.fade_duration_ms);
                }
            }
        }
        self.poll(now_ms);
        &self.last
    }

    /// Fire the fade timer if it is due
    pub fn poll(&mut self, now_ms: f64) {
        if let FadeTimer::Armed { due_at_ms } = self.fade {
            if now_ms >= due_at_ms {
                self.last = OcclusionResult::fully_occluded(self.regions);
                self.fade = FadeTimer::Expired;
                log::debug!("fade elapsed, forcing full occlusion");
            }
        }
    }

    pub fn cancel_fade(&mut self) {
        self.fade = FadeTimer::Idle;
    }

    pub fn displayed(&self) -> &OcclusionResult {
        &self.last
    }

    pub fn fade(&self) -> FadeTimer {
        self.fade
    }
}
