//! Life screensaver
//!
//! Conway's Life (B3/S23) on the visible window. Columns wrap around the
//! window width and rows wrap around the row count, so the grid is a torus.
//! A pattern that stops changing for [`STABLE_LIMIT`] steps is replaced by
//! a fresh random one.

use crate::config::{Geometry, MAX_MATRIX_SIDE};

use super::scroll::ScrollEvent;

/// Unchanged generations before the window is reseeded
pub const STABLE_LIMIT: u8 = 12;

const FALLBACK_SEED: u32 = 0x2545_F491;

/// Life state carried between steps
#[derive(Debug, Clone)]
pub struct Life {
    stable_steps: u8,
    rng: u32,
}

impl Life {
    /// Create with a reseed generator seed (0 selects a fixed seed)
    pub fn new(seed: u32) -> Self {
        Self {
            stable_steps: 0,
            rng: if seed == 0 { FALLBACK_SEED } else { seed },
        }
    }

    /// Consecutive unchanged generations so far
    pub fn stable_steps(&self) -> u8 {
        self.stable_steps
    }

    /// Advance `window` by one generation on a `geometry` sized grid
    pub fn step(&mut self, window: &mut [u8], geometry: Geometry) -> ScrollEvent {
        let width = window
            .len()
            .min(usize::from(geometry.columns))
            .min(usize::from(MAX_MATRIX_SIDE));
        let rows = geometry.rows.clamp(1, MAX_MATRIX_SIDE);
        let mask = geometry.row_mask();
        if width == 0 {
            return ScrollEvent::Evolved;
        }
        let window = &mut window[..width];

        let mut next = [0u8; MAX_MATRIX_SIDE as usize];
        for (x, column) in next.iter_mut().enumerate().take(width) {
            for y in 0..rows {
                let alive = window[x] & (1 << y) != 0;
                match neighbours(window, x, y, rows) {
                    3 => *column |= 1 << y,
                    2 if alive => *column |= 1 << y,
                    _ => {}
                }
            }
        }

        let unchanged = window
            .iter()
            .zip(next.iter())
            .all(|(old, new)| old & mask == *new);
        window.copy_from_slice(&next[..width]);

        if !unchanged {
            self.stable_steps = 0;
            return ScrollEvent::Evolved;
        }

        self.stable_steps += 1;
        if self.stable_steps < STABLE_LIMIT {
            return ScrollEvent::Evolved;
        }

        self.stable_steps = 0;
        for column in window.iter_mut() {
            *column = self.next_random() as u8 & mask;
        }
        debug!("life: reseeded after {=u8} stable steps", STABLE_LIMIT);
        ScrollEvent::Reseeded
    }

    /// xorshift32
    fn next_random(&mut self) -> u32 {
        let mut x = self.rng;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng = x;
        x
    }
}

/// Live cells among the 8 toroidal neighbours of (x, y)
fn neighbours(window: &[u8], x: usize, y: u8, rows: u8) -> u8 {
    let width = window.len();
    let mut count = 0;
    for dx in [width - 1, 0, 1] {
        for dy in [rows - 1, 0, 1] {
            if dx == 0 && dy == 0 {
                continue;
            }
            let column = window[(x + dx) % width];
            let row = (y + dy) % rows;
            if column & (1 << row) != 0 {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: Geometry = Geometry { columns: 5, rows: 7 };

    #[test]
    fn test_blinker_oscillates() {
        // Vertical blinker in column 2, rows 2..=4
        let mut window = [0x00, 0x00, 0x1C, 0x00, 0x00];
        let mut life = Life::new(1);

        assert_eq!(life.step(&mut window, GRID), ScrollEvent::Evolved);
        assert_eq!(window, [0x00, 0x08, 0x08, 0x08, 0x00]);
        life.step(&mut window, GRID);
        assert_eq!(window, [0x00, 0x00, 0x1C, 0x00, 0x00]);
        assert_eq!(life.stable_steps(), 0);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let mut window = [0x04, 0x05, 0x06, 0x00, 0x00];
        let mut life = Life::new(1);

        life.step(&mut window, GRID);
        assert_eq!(window, [0x02, 0x0C, 0x06, 0x00, 0x00]);

        for _ in 0..3 {
            life.step(&mut window, GRID);
        }
        assert_eq!(window, [0x00, 0x08, 0x0A, 0x0C, 0x00]);
    }

    #[test]
    fn test_wraps_around_edges() {
        // Horizontal blinker across the left/right seam in row 0
        let mut window = [0x01, 0x01, 0x00, 0x00, 0x01];
        let mut life = Life::new(1);

        life.step(&mut window, GRID);
        // Becomes vertical in column 0 across the top/bottom seam
        assert_eq!(window, [0x43, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_stable_pattern_reseeds_once() {
        let mut window = [0x00, 0x06, 0x06, 0x00, 0x00];
        let mut life = Life::new(1);

        let mut reseeds = 0;
        for step in 1..=STABLE_LIMIT {
            let event = life.step(&mut window, GRID);
            if event == ScrollEvent::Reseeded {
                reseeds += 1;
                assert_eq!(step, STABLE_LIMIT);
            }
        }
        assert_eq!(reseeds, 1);
        assert_eq!(life.stable_steps(), 0);
        assert!(window.iter().all(|c| c & 0x80 == 0));
    }

    #[test]
    fn test_deterministic() {
        let start = [0x13, 0x2A, 0x05, 0x60, 0x11];
        let mut a = start;
        let mut b = start;
        let mut life_a = Life::new(7);
        let mut life_b = Life::new(7);

        for _ in 0..40 {
            assert_eq!(life_a.step(&mut a, GRID), life_b.step(&mut b, GRID));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_reseed_respects_row_count() {
        // A block is stable; after reseeding only the low four rows may be set
        let grid = Geometry { columns: 5, rows: 4 };
        let mut window = [0x00, 0x06, 0x06, 0x00, 0x00];
        let mut life = Life::new(3);

        for _ in 0..STABLE_LIMIT {
            life.step(&mut window, grid);
        }
        assert!(window.iter().all(|c| c & !grid.row_mask() == 0));
    }

    #[test]
    fn test_window_wider_than_geometry_is_clipped() {
        let mut window = [0x00, 0x00, 0x1C, 0x00, 0x00, 0x7F];
        let mut life = Life::new(1);

        life.step(&mut window, GRID);
        assert_eq!(window[..5], [0x00, 0x08, 0x08, 0x08, 0x00]);
        assert_eq!(window[5], 0x7F);
    }
}
