use crate::sheet::{Grid, SheetTexture};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Playback settings for a [`FrameAnimator`](crate::FrameAnimator)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimatorConfig {
    /// Cells advanced per second; 0 is treated as 1
    pub framerate: u32,
    /// Play from the last cell towards the first
    pub reverse: bool,
    /// Running off the end of a row moves into the next row
    pub continuous: bool,
    /// Wrap around at the end of the sequence instead of finishing
    pub looping: bool,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            framerate: 1,
            reverse: false,
            continuous: true,
            looping: true,
            flip_h: false,
            flip_v: false,
        }
    }
}

impl AnimatorConfig {
    pub fn new(framerate: u32) -> Self {
        Self {
            framerate,
            ..Default::default()
        }
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn flip(mut self, horizontal: bool, vertical: bool) -> Self {
        self.flip_h = horizontal;
        self.flip_v = vertical;
        self
    }

    pub(crate) fn normalized(mut self) -> Self {
        self.framerate = self.framerate.max(1);
        self
    }
}

/// A pending swap to another sheet, applied by
/// [`FrameAnimator::change_sheet`](crate::FrameAnimator::change_sheet) once `delay` seconds have elapsed
///
/// Unlike [`AnimatorConfig::new`], the playback config here defaults to non-continuous
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetChange {
    pub sheet: SheetTexture,
    pub grid: Grid,
    pub config: AnimatorConfig,
    /// Seconds of elapsed time to wait before switching
    pub delay: f32,
}

impl SheetChange {
    pub fn new(sheet: SheetTexture, columns: usize, rows: usize, framerate: u32) -> Self {
        Self {
            sheet,
            grid: Grid::new(columns, rows),
            config: AnimatorConfig::new(framerate).continuous(false),
            delay: 0.0,
        }
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    pub fn config(mut self, config: AnimatorConfig) -> Self {
        self.config = config;
        self
    }
}
