//! Row/column multiplexing
//!
//! One column is lit at a time. Row lines carry the column pattern (high =
//! LED on), the active column line is pulled low and every other column
//! line is held high. A common anode matrix needs every line inverted; an
//! upside-down mounting reverses both pin orders.

use glint_hal::OutputPin;

use crate::config::Wiring;
use crate::display::ColumnFrame;

/// Drives the matrix pins for one column at a time
pub struct MatrixDriver<P: OutputPin, const ROWS: usize, const COLS: usize> {
    rows: [P; ROWS],
    columns: [P; COLS],
    invert: bool,
    upside_down: bool,
}

impl<P: OutputPin, const ROWS: usize, const COLS: usize> MatrixDriver<P, ROWS, COLS> {
    /// Create a driver and switch every LED off
    ///
    /// `rows` and `columns` are in physical order: R1..R7 and C1..C5.
    pub fn new(rows: [P; ROWS], columns: [P; COLS], wiring: Wiring, upside_down: bool) -> Self {
        let mut driver = Self {
            rows,
            columns,
            invert: wiring == Wiring::CommonAnode,
            upside_down,
        };
        driver.blank();
        driver
    }

    /// Light one column
    pub fn show(&mut self, frame: ColumnFrame) {
        let invert = self.invert;

        // Deselect columns first so the old column never shows the new pattern
        for pin in self.columns.iter_mut() {
            pin.set_state(!invert);
        }

        for (i, pin) in self.rows.iter_mut().enumerate() {
            let bit = if self.upside_down { ROWS - 1 - i } else { i };
            let lit = bit < 8 && frame.pattern & (1 << bit) != 0;
            pin.set_state(lit != invert);
        }

        let column = usize::from(frame.column);
        if column < COLS {
            let pin = if self.upside_down { COLS - 1 - column } else { column };
            self.columns[pin].set_state(invert);
        }
    }

    /// Switch every LED off
    pub fn blank(&mut self) {
        let invert = self.invert;
        for pin in self.rows.iter_mut() {
            pin.set_state(invert);
        }
        for pin in self.columns.iter_mut() {
            pin.set_state(!invert);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(bool);

    impl OutputPin for Recorder {
        fn set_high(&mut self) {
            self.0 = true;
        }

        fn set_low(&mut self) {
            self.0 = false;
        }

        fn is_set_high(&self) -> bool {
            self.0
        }
    }

    fn levels<const R: usize, const C: usize>(
        driver: &MatrixDriver<Recorder, R, C>,
    ) -> ([bool; R], [bool; C]) {
        (
            core::array::from_fn(|i| driver.rows[i].is_set_high()),
            core::array::from_fn(|i| driver.columns[i].is_set_high()),
        )
    }

    fn driver(wiring: Wiring, upside_down: bool) -> MatrixDriver<Recorder, 7, 5> {
        MatrixDriver::new(Default::default(), Default::default(), wiring, upside_down)
    }

    #[test]
    fn test_common_cathode() {
        let mut m = driver(Wiring::CommonCathode, false);
        assert_eq!(levels(&m), ([false; 7], [true; 5]));

        m.show(ColumnFrame { column: 1, pattern: 0b000_0101 });
        assert_eq!(
            levels(&m),
            (
                [true, false, true, false, false, false, false],
                [true, false, true, true, true]
            )
        );
    }

    #[test]
    fn test_common_anode_inverts() {
        let mut m = driver(Wiring::CommonAnode, false);
        assert_eq!(levels(&m), ([true; 7], [false; 5]));

        m.show(ColumnFrame { column: 0, pattern: 0b000_0001 });
        assert_eq!(
            levels(&m),
            (
                [false, true, true, true, true, true, true],
                [true, false, false, false, false]
            )
        );
    }

    #[test]
    fn test_upside_down_reverses() {
        let mut m = driver(Wiring::CommonCathode, true);
        m.show(ColumnFrame { column: 0, pattern: 0b000_0011 });
        assert_eq!(
            levels(&m),
            (
                [false, false, false, false, false, true, true],
                [true, true, true, true, false]
            )
        );
    }

    #[test]
    fn test_blank() {
        let mut m = driver(Wiring::CommonCathode, false);
        m.show(ColumnFrame { column: 2, pattern: 0x7F });
        m.blank();
        assert_eq!(levels(&m), ([false; 7], [true; 5]));
    }
}
