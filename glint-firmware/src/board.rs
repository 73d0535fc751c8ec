//! Pin map for the STM32F042K6 pendant development board
//!
//! | function     | pins                                   |
//! |--------------|----------------------------------------|
//! | rows R1..R7  | PB0, PB1, PB3, PB4, PB5, PB6, PB7      |
//! | columns C1..C5 | PA4, PA5, PA6, PA7, PA8              |
//! | button       | PA0 (to ground, internal pull-up)      |
//! | serial in    | PA3 (USART2 RX)                        |
//!
//! The button must stay on port A: the STOP wake relies on the reset
//! EXTI routing.

use embassy_stm32::flash::{Blocking, Flash};
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::mode::Async;
use embassy_stm32::peripherals::USART2;
use embassy_stm32::usart::{self, Uart, UartRx};
use embassy_stm32::{bind_interrupts, Peripherals};
use glint_hal::gpio::ActiveLow;
use glint_hal::UartConfig;
use glint_hal_stm32f0::{usart_config, ButtonPin, LinePin};

bind_interrupts!(pub struct Irqs {
    USART2 => usart::InterruptHandler<USART2>;
});

/// Matrix rows
pub const ROWS: usize = 7;

/// Matrix columns
pub const COLUMNS: usize = 5;

/// EXTI line of the button pin
pub const BUTTON_LINE: usize = 0;

/// Board peripherals split by task
pub struct Board {
    pub rows: [LinePin<'static>; ROWS],
    pub columns: [LinePin<'static>; COLUMNS],
    pub button: ActiveLow<ButtonPin<'static>>,
    pub serial: UartRx<'static, Async>,
    pub flash: Flash<'static, Blocking>,
}

impl Board {
    /// Take the board's peripherals
    ///
    /// Panics if the serial configuration is rejected.
    pub fn new(p: Peripherals, uart: &UartConfig) -> Self {
        let rows = [
            LinePin(Output::new(p.PB0, Level::Low, Speed::Low)),
            LinePin(Output::new(p.PB1, Level::Low, Speed::Low)),
            LinePin(Output::new(p.PB3, Level::Low, Speed::Low)),
            LinePin(Output::new(p.PB4, Level::Low, Speed::Low)),
            LinePin(Output::new(p.PB5, Level::Low, Speed::Low)),
            LinePin(Output::new(p.PB6, Level::Low, Speed::Low)),
            LinePin(Output::new(p.PB7, Level::Low, Speed::Low)),
        ];
        let columns = [
            LinePin(Output::new(p.PA4, Level::Low, Speed::Low)),
            LinePin(Output::new(p.PA5, Level::Low, Speed::Low)),
            LinePin(Output::new(p.PA6, Level::Low, Speed::Low)),
            LinePin(Output::new(p.PA7, Level::Low, Speed::Low)),
            LinePin(Output::new(p.PA8, Level::Low, Speed::Low)),
        ];

        let button = ActiveLow(ButtonPin(Input::new(p.PA0, Pull::Up)));

        let uart = Uart::new(
            p.USART2,
            p.PA3, // RX
            p.PA2, // TX (unused)
            Irqs,
            p.DMA1_CH4,
            p.DMA1_CH5,
            usart_config(uart),
        )
        .unwrap();
        let (_tx, serial) = uart.split();

        Self {
            rows,
            columns,
            button,
            serial,
            flash: Flash::new_blocking(p.FLASH),
        }
    }
}
