//! Sprite sheet playback
//!
//! A [`FrameAnimator`] walks the cells of a grid-shaped sheet, one cell per
//! animation tick, & reports which sub-rectangle of the sheet to sample.
//! The host renderer owns the texture & calls [`FrameAnimator::advance`] once per rendered frame

mod navigation;
mod playback;
mod timing;

use crate::{
    config::{AnimatorConfig, SheetChange},
    error::{AnimError, Axis},
    math::{Rect, Vec2, vec2},
    sheet::{Grid, SheetTexture},
};

/// Playback cursor over a sprite sheet
///
/// Animators start paused with no sheet bound. Bind one with [`bind_sheet`](Self::bind_sheet)
/// & call [`start`](Self::start) to begin playback
#[derive(Debug, Clone)]
pub struct FrameAnimator {
    name: String,
    grid: Grid,
    config: AnimatorConfig,
    sheet: Option<SheetTexture>,
    current_row: usize,
    current_column: usize,
    current_frame: usize,
    playback_position: u32,
    time_remaining: f32,
    paused: bool,
    finished: bool,
    started: bool,
    change_elapsed: f32,
}

impl FrameAnimator {
    /// Creates an animator for a `columns` x `rows` sheet
    ///
    /// Zero rows, columns or framerate are coerced to 1
    pub fn new(name: impl Into<String>, columns: usize, rows: usize, config: AnimatorConfig) -> Self {
        let mut animator = Self {
            name: name.into(),
            grid: Grid::new(columns, rows),
            config: config.normalized(),
            sheet: None,
            current_row: 0,
            current_column: 0,
            current_frame: 0,
            playback_position: 0,
            time_remaining: 0.0,
            paused: true,
            finished: false,
            started: false,
            change_elapsed: 0.0,
        };
        animator.reset();
        animator
    }

    /// Binds a sheet & resets the cursor, tick counter & timer
    pub fn bind_sheet(&mut self, sheet: SheetTexture) {
        log::debug!(
            "{}: bound sheet {} ({}x{} px, {}x{} cells)",
            self.name,
            sheet.id,
            sheet.width,
            sheet.height,
            self.grid.columns(),
            self.grid.rows()
        );
        self.sheet = Some(sheet);
        self.reset();
    }

    /// Switches to another sheet once `change.delay` seconds of `delta` time have accumulated
    ///
    /// Call once per frame until it returns `true`; every call before that only advances the
    /// wait. The current flip state carries over to the new sheet
    pub fn change_sheet(&mut self, change: &SheetChange, delta: f32) -> bool {
        self.change_elapsed += delta.max(0.0);
        if self.change_elapsed < change.delay {
            return false;
        }
        self.change_elapsed = 0.0;

        let (flip_h, flip_v) = (self.config.flip_h, self.config.flip_v);
        self.grid = change.grid;
        self.config = change.config.normalized().flip(flip_h, flip_v);
        self.finished = false;
        self.started = !self.paused;

        log::debug!("{}: applying sheet change after {}s", self.name, change.delay);
        self.bind_sheet(change.sheet);
        true
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sheet(&self) -> Option<&SheetTexture> {
        self.sheet.as_ref()
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn framerate(&self) -> u32 {
        self.config.framerate
    }

    /// Sets the cells advanced per second (0 becomes 1) & restarts the current tick
    pub fn set_framerate(&mut self, framerate: u32) {
        self.config.framerate = framerate.max(1);
        self.playback_position = 0;
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.config.looping = looping;
    }

    /// Changing continuity changes the sequence length, so the timer is recomputed
    pub fn set_continuous(&mut self, continuous: bool) {
        self.config.continuous = continuous;
        self.reset_time_remaining();
    }

    /// Sets the flip flags, which negate the matching size of [`frame_rect`](Self::frame_rect)
    ///
    /// Horizontal flipping only takes effect if the host draws negative-width source
    /// rectangles mirrored; [`uv_coords`](Self::uv_coords) swaps corners instead
    pub fn flip_sprite(&mut self, horizontal: bool, vertical: bool) {
        self.config.flip_h = horizontal;
        self.config.flip_v = vertical;
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn current_column(&self) -> usize {
        self.current_column
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Rendered frames counted since the last cell step
    pub fn playback_position(&self) -> u32 {
        self.playback_position
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_reversed(&self) -> bool {
        self.config.reverse
    }

    pub fn is_continuous(&self) -> bool {
        self.config.continuous
    }

    pub fn is_looping(&self) -> bool {
        self.config.looping
    }

    /// Pixel size of one cell, `None` until a sheet is bound
    pub fn cell_size(&self) -> Option<Vec2> {
        self.sheet.map(|sheet| self.grid.cell_size(&sheet))
    }

    /// Region of the sheet to sample for the current cell
    ///
    /// Width & height are negated when flipped. `None` until a sheet is bound
    pub fn frame_rect(&self) -> Option<Rect> {
        let cell = self.cell_size()?;
        let position = vec2(
            self.current_column as f32 * cell.x,
            self.current_row as f32 * cell.y,
        );
        let size = vec2(
            if self.config.flip_h { -cell.x } else { cell.x },
            if self.config.flip_v { -cell.y } else { cell.y },
        );
        Some(Rect::new(position, size))
    }

    /// Normalized texture coordinates of the current cell
    /// (top-left, top-right, bottom-right, bottom-left), with corners swapped for flips
    ///
    /// Suitable for egor's `RectangleBuilder::uv`. `None` until a non-empty sheet is bound
    pub fn uv_coords(&self) -> Option<[[f32; 2]; 4]> {
        let sheet = self.sheet?;
        if sheet.width == 0 || sheet.height == 0 {
            return None;
        }
        let cell = self.grid.cell_size(&sheet);
        let position = vec2(
            self.current_column as f32 * cell.x,
            self.current_row as f32 * cell.y,
        );
        let [mut tl, mut tr, mut br, mut bl] = Rect::new(position, cell)
            .corners()
            .map(|corner| corner / sheet.size());

        if self.config.flip_h {
            std::mem::swap(&mut tl, &mut tr);
            std::mem::swap(&mut bl, &mut br);
        }
        if self.config.flip_v {
            std::mem::swap(&mut tl, &mut bl);
            std::mem::swap(&mut tr, &mut br);
        }
        Some([tl.into(), tr.into(), br.into(), bl.into()])
    }

    /// Moves the cursor, keeping `current_frame` in sync
    fn set_cell(&mut self, row: usize, column: usize) {
        self.current_row = row;
        self.current_column = column;
        self.current_frame = self.grid.frame_of(row, column);
    }

    /// First cell of playback: the sheet origin, or its last cell when reversed
    fn start_cell(&self) -> (usize, usize) {
        if self.config.reverse {
            (self.grid.last_row(), self.grid.last_column())
        } else {
            (0, 0)
        }
    }

    /// Cursor back to the start cell, tick counter & timer cleared
    fn reset(&mut self) {
        let (row, column) = self.start_cell();
        self.set_cell(row, column);
        self.playback_position = 0;
        self.reset_time_remaining();
    }

    fn check_index(&self, kind: Axis, requested: usize, limit: usize) -> Result<(), AnimError> {
        if requested < limit {
            Ok(())
        } else {
            Err(AnimError::out_of_range(&self.name, kind, requested, limit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(columns: usize, rows: usize, config: AnimatorConfig) -> FrameAnimator {
        let mut anim = FrameAnimator::new("test", columns, rows, config);
        anim.bind_sheet(SheetTexture::new(0, 128, 64));
        anim
    }

    #[test]
    fn new_coerces_zero_geometry_and_framerate() {
        let anim = FrameAnimator::new("zero", 0, 0, AnimatorConfig::new(0));
        assert_eq!((anim.columns(), anim.rows()), (1, 1));
        assert_eq!(anim.framerate(), 1);
        assert!(anim.is_paused() && !anim.is_started());
        assert!(anim.frame_rect().is_none());
        assert!(anim.uv_coords().is_none());
    }

    #[test]
    fn reversed_animator_starts_at_sheet_end() {
        let anim = bound(4, 2, AnimatorConfig::new(4).reverse(true));
        assert_eq!((anim.current_row(), anim.current_column()), (1, 3));
        assert_eq!(anim.current_frame(), 7);
    }

    #[test]
    fn frame_rect_tracks_cursor_and_flip() {
        let mut anim = bound(4, 2, AnimatorConfig::new(4));
        anim.go_to_frame(6).unwrap();
        let rect = anim.frame_rect().unwrap();
        assert_eq!(rect.position, vec2(64.0, 32.0));
        assert_eq!(rect.size, vec2(32.0, 32.0));

        anim.flip_sprite(true, true);
        let rect = anim.frame_rect().unwrap();
        assert_eq!(rect.position, vec2(64.0, 32.0));
        assert_eq!(rect.size, vec2(-32.0, -32.0));
    }

    #[test]
    fn uv_coords_cover_current_cell() {
        let mut anim = bound(4, 2, AnimatorConfig::new(4));
        anim.go_to_frame(5).unwrap();
        assert_eq!(
            anim.uv_coords().unwrap(),
            [[0.25, 0.5], [0.5, 0.5], [0.5, 1.0], [0.25, 1.0]]
        );

        anim.flip_sprite(true, false);
        assert_eq!(
            anim.uv_coords().unwrap(),
            [[0.5, 0.5], [0.25, 0.5], [0.25, 1.0], [0.5, 1.0]]
        );
    }

    #[test]
    fn bind_sheet_resets_playback() {
        let mut anim = bound(4, 2, AnimatorConfig::new(4));
        anim.go_to_frame(5).unwrap();
        anim.bind_sheet(SheetTexture::new(1, 256, 128));
        assert_eq!(anim.current_frame(), 0);
        assert_eq!(anim.playback_position(), 0);
        assert_eq!(anim.time_remaining_in_frames(), anim.total_time_in_frames());
        assert_eq!(anim.sheet().map(|s| s.id), Some(1));
    }

    #[test]
    fn change_sheet_waits_for_delay() {
        let mut anim = bound(4, 2, AnimatorConfig::new(4));
        anim.start();
        anim.go_to_frame(3).unwrap();

        let change = SheetChange::new(SheetTexture::new(7, 96, 32), 3, 1, 6).delay(0.5);
        assert!(!anim.change_sheet(&change, 0.2));
        assert!(!anim.change_sheet(&change, 0.2));
        assert_eq!(anim.current_frame(), 3);
        assert_eq!(anim.sheet().map(|s| s.id), Some(0));

        assert!(anim.change_sheet(&change, 0.2));
        assert_eq!(anim.sheet().map(|s| s.id), Some(7));
        assert_eq!((anim.columns(), anim.rows()), (3, 1));
        assert_eq!(anim.framerate(), 6);
        assert!(!anim.is_continuous());
        assert_eq!(anim.current_frame(), 0);
        assert!(anim.is_started() && !anim.is_finished());
    }

    #[test]
    fn change_sheet_without_delay_applies_immediately_and_keeps_flip() {
        let mut anim = bound(4, 2, AnimatorConfig::new(4));
        anim.flip_sprite(true, false);
        anim.stop();

        let change = SheetChange::new(SheetTexture::new(2, 64, 64), 2, 2, 0);
        assert!(anim.change_sheet(&change, 0.0));
        assert_eq!(anim.framerate(), 1);
        assert!(anim.config().flip_h);
        // paused animators stay unstarted after the swap
        assert!(!anim.is_started() && !anim.is_finished());
    }
}
