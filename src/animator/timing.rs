use super::FrameAnimator;

// All remaining-time bookkeeping lives here. Time is counted in cells ("frames"),
// seconds are derived through the framerate.
impl FrameAnimator {
    /// Length of the playback sequence in cells: the whole sheet when continuous, else one row
    pub fn total_time_in_frames(&self) -> f32 {
        if self.config.continuous {
            self.grid.len() as f32
        } else {
            self.grid.columns() as f32
        }
    }

    pub fn total_time_in_seconds(&self) -> f32 {
        self.total_time_in_frames() / self.config.framerate as f32
    }

    pub fn time_remaining_in_frames(&self) -> f32 {
        self.time_remaining
    }

    pub fn time_remaining_in_seconds(&self) -> f32 {
        self.time_remaining / self.config.framerate as f32
    }

    /// Cells from the cursor to the end of the sequence in the current direction,
    /// the cursor's own cell included
    pub(crate) fn frames_to_sequence_end(&self) -> f32 {
        let (position, length) = if self.config.continuous {
            (self.current_frame, self.grid.len())
        } else {
            (self.current_column, self.grid.columns())
        };

        if self.config.reverse {
            (position + 1) as f32
        } else {
            (length - position) as f32
        }
    }

    pub(crate) fn reset_time_remaining(&mut self) {
        self.time_remaining = self.frames_to_sequence_end();
    }

    /// Reflects the remaining time across the sequence after a direction change
    ///
    /// This is `total - remaining`, one cell short of `frames_to_sequence_end`, which counts
    /// the cursor's own cell in both directions: reversing at frame 0 leaves 0 here while
    /// `go_to_frame(0)` in reverse leaves 1. Reconcile the two in this function only
    pub(crate) fn mirror_time_remaining(&mut self) {
        self.time_remaining = (self.total_time_in_frames() - self.time_remaining).max(0.0);
    }

    /// Counts down `delta` seconds worth of cells, never below zero
    pub(crate) fn consume_time(&mut self, delta: f32) {
        if self.time_remaining > 0.0 {
            self.time_remaining =
                (self.time_remaining - delta * self.config.framerate as f32).max(0.0);
        }
    }
}
