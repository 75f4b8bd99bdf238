use super::FrameAnimator;
use crate::error::{AnimError, Axis};

impl FrameAnimator {
    /// Jumps to a flattened frame index. Out of range requests leave the cursor untouched
    pub fn go_to_frame(&mut self, frame: usize) -> Result<(), AnimError> {
        self.check_index(Axis::Frame, frame, self.grid.len())?;
        let (row, column) = self.grid.cell_of(frame);
        self.set_cell(row, column);
        self.reset_time_remaining();
        Ok(())
    }

    /// Jumps to `row`, keeping the column. Out of range requests clamp to the last row
    pub fn go_to_row(&mut self, row: usize) -> Result<(), AnimError> {
        let checked = self.check_index(Axis::Row, row, self.grid.rows());
        self.set_cell(row.min(self.grid.last_row()), self.current_column);
        self.reset_time_remaining();
        checked
    }

    /// Jumps to `column`, keeping the row. Out of range requests clamp to the last column
    pub fn go_to_column(&mut self, column: usize) -> Result<(), AnimError> {
        let checked = self.check_index(Axis::Column, column, self.grid.columns());
        self.set_cell(self.current_row, column.min(self.grid.last_column()));
        self.reset_time_remaining();
        checked
    }

    pub fn go_to_first_row(&mut self) {
        self.move_to(0, self.current_column);
    }

    pub fn go_to_last_row(&mut self) {
        self.move_to(self.grid.last_row(), self.current_column);
    }

    pub fn go_to_first_column(&mut self) {
        self.move_to(self.current_row, 0);
    }

    pub fn go_to_last_column(&mut self) {
        self.move_to(self.current_row, self.grid.last_column());
    }

    /// First frame of the current row
    pub fn go_to_first_frame(&mut self) {
        self.go_to_first_column();
    }

    /// Last frame of the current row
    pub fn go_to_last_frame(&mut self) {
        self.go_to_last_column();
    }

    pub fn go_to_first_frame_of_sheet(&mut self) {
        self.move_to(0, 0);
    }

    pub fn go_to_last_frame_of_sheet(&mut self) {
        self.move_to(self.grid.last_row(), self.grid.last_column());
    }

    /// Steps one row down, wrapping to the top when looping
    pub fn next_row(&mut self) {
        let row = if self.current_row < self.grid.last_row() {
            self.current_row + 1
        } else if self.config.looping {
            0
        } else {
            self.grid.last_row()
        };
        self.move_to(row, self.current_column);
    }

    /// Steps one row up, wrapping to the bottom when looping
    pub fn previous_row(&mut self) {
        let row = if self.current_row > 0 {
            self.current_row - 1
        } else if self.config.looping {
            self.grid.last_row()
        } else {
            0
        };
        self.move_to(row, self.current_column);
    }

    /// Steps one column right within the row, wrapping to its start when looping
    pub fn next_column(&mut self) {
        let column = if self.current_column < self.grid.last_column() {
            self.current_column + 1
        } else if self.config.looping {
            0
        } else {
            self.grid.last_column()
        };
        self.move_to(self.current_row, column);
    }

    /// Steps one column left within the row, wrapping to its end when looping
    pub fn previous_column(&mut self) {
        let column = if self.current_column > 0 {
            self.current_column - 1
        } else if self.config.looping {
            self.grid.last_column()
        } else {
            0
        };
        self.move_to(self.current_row, column);
    }

    fn move_to(&mut self, row: usize, column: usize) {
        self.set_cell(row, column);
        self.reset_time_remaining();
    }
}

#[cfg(test)]
mod tests {
    use crate::{AnimError, AnimatorConfig, Axis, FrameAnimator};

    fn sheet(columns: usize, rows: usize) -> FrameAnimator {
        FrameAnimator::new("nav", columns, rows, AnimatorConfig::new(4))
    }

    fn assert_invariants(anim: &FrameAnimator) {
        assert!(anim.current_row() < anim.rows());
        assert!(anim.current_column() < anim.columns());
        assert_eq!(
            anim.current_frame(),
            anim.current_row() * anim.columns() + anim.current_column()
        );
        assert!(anim.time_remaining_in_frames() >= 0.0);
    }

    #[test]
    fn go_to_frame_maps_every_valid_index() {
        let mut anim = sheet(5, 3);
        for n in 0..15 {
            anim.go_to_frame(n).unwrap();
            assert_eq!(anim.current_row(), n / 5);
            assert_eq!(anim.current_column(), n % 5);
            assert_eq!(anim.current_frame(), n);
            assert_eq!(anim.time_remaining_in_frames(), (15 - n) as f32);
            assert_invariants(&anim);
        }
    }

    #[test]
    fn go_to_frame_out_of_range_is_noop() {
        let mut anim = sheet(5, 3);
        anim.go_to_frame(7).unwrap();
        for n in [15, 16, 100] {
            let err = anim.go_to_frame(n).unwrap_err();
            assert_eq!(
                err,
                AnimError::OutOfRange {
                    animator: "nav".to_string(),
                    kind: Axis::Frame,
                    requested: n,
                    limit: 15,
                }
            );
            assert_eq!(anim.current_frame(), 7);
            assert_invariants(&anim);
        }
    }

    #[test]
    fn go_to_row_and_column_clamp_and_report() {
        let mut anim = sheet(4, 3);
        anim.go_to_column(2).unwrap();
        anim.go_to_row(1).unwrap();
        assert_eq!(anim.current_frame(), 6);

        let err = anim.go_to_row(9).unwrap_err();
        assert_eq!(err.valid_range(), 0..3);
        assert_eq!((anim.current_row(), anim.current_column()), (2, 2));

        let err = anim.go_to_column(4).unwrap_err();
        assert_eq!(err.valid_range(), 0..4);
        assert_eq!((anim.current_row(), anim.current_column()), (2, 3));
        assert_eq!(anim.current_frame(), 11);
        assert_invariants(&anim);
    }

    #[test]
    fn convenience_jumps() {
        let mut anim = sheet(4, 3);
        anim.go_to_frame(5).unwrap();

        anim.go_to_last_column();
        assert_eq!(anim.current_frame(), 7);
        anim.go_to_first_frame();
        assert_eq!(anim.current_frame(), 4);
        anim.go_to_last_frame();
        assert_eq!(anim.current_frame(), 7);
        anim.go_to_last_row();
        assert_eq!(anim.current_frame(), 11);
        anim.go_to_first_row();
        assert_eq!(anim.current_frame(), 3);
        anim.go_to_first_column();
        assert_eq!(anim.current_frame(), 0);

        anim.go_to_last_frame_of_sheet();
        assert_eq!(anim.current_frame(), 11);
        assert_eq!(anim.time_remaining_in_frames(), 1.0);
        anim.go_to_first_frame_of_sheet();
        assert_eq!(anim.current_frame(), 0);
        assert_eq!(anim.time_remaining_in_frames(), 12.0);
    }

    #[test]
    fn steps_wrap_when_looping() {
        let mut anim = sheet(3, 2);
        anim.previous_row();
        assert_eq!(anim.current_row(), 1);
        anim.next_row();
        assert_eq!(anim.current_row(), 0);

        anim.previous_column();
        assert_eq!(anim.current_column(), 2);
        anim.next_column();
        assert_eq!(anim.current_column(), 0);
        assert_invariants(&anim);
    }

    #[test]
    fn steps_clamp_and_reset_timer_without_looping() {
        let mut anim = FrameAnimator::new("nav", 3, 2, AnimatorConfig::new(4).looping(false));
        anim.go_to_last_frame_of_sheet();
        anim.consume_time(0.1);

        anim.next_row();
        anim.next_column();
        assert_eq!(anim.current_frame(), 5);
        assert_eq!(anim.time_remaining_in_frames(), 1.0);

        anim.go_to_first_frame_of_sheet();
        anim.previous_row();
        anim.previous_column();
        assert_eq!(anim.current_frame(), 0);
        assert_eq!(anim.time_remaining_in_frames(), 6.0);
        assert_invariants(&anim);
    }
}
