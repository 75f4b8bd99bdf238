use super::FrameAnimator;
use crate::error::{AnimError, Axis};

impl FrameAnimator {
    pub fn start(&mut self) {
        self.paused = false;
        self.started = true;
    }

    /// Rewinds to the start cell, marks the animation finished & pauses it
    pub fn stop(&mut self) {
        self.reset();
        self.finished = true;
        self.paused = true;
        self.started = false;
    }

    /// Pauses playback, or flips the paused state when `toggle` is set
    pub fn pause(&mut self, toggle: bool) {
        self.paused = if toggle { !self.paused } else { true };
        self.started = !self.paused;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
        self.started = true;
    }

    /// Plays forwards from here on
    pub fn forward(&mut self) {
        if self.config.reverse {
            self.config.reverse = false;
            self.mirror_time_remaining();
        }
    }

    /// Plays backwards, or flips the direction when `toggle` is set
    ///
    /// A direction change mirrors the remaining time across the sequence
    pub fn set_reverse(&mut self, toggle: bool) {
        let reverse = if toggle { !self.config.reverse } else { true };
        if reverse != self.config.reverse {
            self.config.reverse = reverse;
            self.mirror_time_remaining();
        }
        self.finished = false;
    }

    /// Rewinds to the start cell & plays
    pub fn restart(&mut self) {
        self.reset();
        self.finished = false;
        self.paused = false;
        self.started = true;
    }

    /// Per-frame update, driven by the host with the frame's `delta` seconds & current `fps`
    ///
    /// Every `fps / framerate` calls the cursor steps one cell in the playback direction
    pub fn advance(&mut self, delta: f32, fps: u32) {
        if self.paused {
            return;
        }

        self.playback_position += 1;
        self.consume_time(delta);

        let frames_per_tick = fps as f32 / self.config.framerate as f32;
        if self.playback_position as f32 >= frames_per_tick {
            self.playback_position = 0;
            if self.config.reverse {
                self.previous_frame();
            } else {
                self.next_frame();
            }
        }
    }

    /// Steps one cell forwards, crossing into the next row when continuous
    pub fn next_frame(&mut self) {
        let (row, column) = (self.current_row, self.current_column);
        if column < self.grid.last_column() {
            self.set_cell(row, column + 1);
        } else if self.config.continuous && row < self.grid.last_row() {
            self.set_cell(row + 1, 0);
        } else if self.config.looping {
            let row = if self.config.continuous { 0 } else { row };
            self.set_cell(row, 0);
            self.reset_time_remaining();
        } else {
            self.finished = true;
        }
        log::trace!("{}: frame {}", self.name, self.current_frame);
    }

    /// Steps one cell backwards, crossing into the previous row when continuous
    pub fn previous_frame(&mut self) {
        let (row, column) = (self.current_row, self.current_column);
        if column > 0 {
            self.set_cell(row, column - 1);
        } else if self.config.continuous && row > 0 {
            self.set_cell(row - 1, self.grid.last_column());
        } else if self.config.looping {
            let row = if self.config.continuous {
                self.grid.last_row()
            } else {
                row
            };
            self.set_cell(row, self.grid.last_column());
            self.reset_time_remaining();
        } else {
            self.finished = true;
        }
        log::trace!("{}: frame {}", self.name, self.current_frame);
    }

    /// Looping animations play until paused; others until they finish, paused or not
    pub fn is_playing(&self) -> bool {
        if self.config.looping {
            !self.paused
        } else {
            !self.finished
        }
    }

    /// At the first frame of the sequence (the sheet when continuous, else the row)
    pub fn is_at_first_frame(&self) -> bool {
        if self.config.continuous {
            self.current_frame == 0
        } else {
            self.current_column == 0
        }
    }

    /// At the last frame of the sequence (the sheet when continuous, else the row)
    pub fn is_at_last_frame(&self) -> bool {
        if self.config.continuous {
            self.current_frame == self.grid.len() - 1
        } else {
            self.current_column == self.grid.last_column()
        }
    }

    pub fn is_at_first_row(&self) -> bool {
        self.current_row == 0
    }

    pub fn is_at_last_row(&self) -> bool {
        self.current_row == self.grid.last_row()
    }

    pub fn is_at_first_column(&self) -> bool {
        self.current_column == 0
    }

    pub fn is_at_last_column(&self) -> bool {
        self.current_column == self.grid.last_column()
    }

    pub fn is_at_frame(&self, frame: usize) -> Result<bool, AnimError> {
        self.check_index(Axis::Frame, frame, self.grid.len())?;
        Ok(self.current_frame == frame)
    }

    pub fn is_at_row(&self, row: usize) -> Result<bool, AnimError> {
        self.check_index(Axis::Row, row, self.grid.rows())?;
        Ok(self.current_row == row)
    }

    pub fn is_at_column(&self, column: usize) -> Result<bool, AnimError> {
        self.check_index(Axis::Column, column, self.grid.columns())?;
        Ok(self.current_column == column)
    }
}
