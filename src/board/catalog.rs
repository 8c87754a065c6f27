//! The static board catalog.
//!
//! Ordered pin tables for the boards the product supports. Pin order
//! matters: it is the order pin grids display and the order resolution
//! error messages enumerate.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::types::{Board, BoardPin, PinCapability, Voltage};

use super::types::PinCapability::*;

fn pin(id: &str, display_name: &str, caps: &[PinCapability], bus: Option<&str>) -> BoardPin {
    BoardPin {
        id: id.to_string(),
        display_name: display_name.to_string(),
        caps: caps.to_vec(),
        bus: bus.map(str::to_string),
    }
}

/// Uno and Nano share the classic AVR header layout.
fn avr_header_pins() -> Vec<BoardPin> {
    vec![
        // Digital pins
        pin("D0", "D0", &[Digital, UartRx], Some("UART0")),
        pin("D1", "D1", &[Digital, UartTx], Some("UART0")),
        pin("D2", "D2", &[Digital], None),
        pin("D3", "D3", &[Digital, Pwm], None),
        pin("D4", "D4", &[Digital], None),
        pin("D5", "D5", &[Digital, Pwm], None),
        pin("D6", "D6", &[Digital, Pwm], None),
        pin("D7", "D7", &[Digital], None),
        pin("D8", "D8", &[Digital], None),
        pin("D9", "D9", &[Digital, Pwm], None),
        pin("D10", "D10", &[Digital, Pwm], None),
        pin("D11", "D11", &[Digital, Pwm, SpiMosi], Some("SPI0")),
        pin("D12", "D12", &[Digital, SpiMiso], Some("SPI0")),
        pin("D13", "D13", &[Digital, SpiSck], Some("SPI0")),
        // Analog pins
        pin("A0", "A0", &[Analog, Digital], None),
        pin("A1", "A1", &[Analog, Digital], None),
        pin("A2", "A2", &[Analog, Digital], None),
        pin("A3", "A3", &[Analog, Digital], None),
        pin("A4", "A4", &[Analog, Digital, I2cSda], Some("I2C0")),
        pin("A5", "A5", &[Analog, Digital, I2cScl], Some("I2C0")),
    ]
}

/// ESP32 DevKit v1 usable pins.
fn esp32_pins() -> Vec<BoardPin> {
    vec![
        pin("GPIO1", "TX", &[Digital, UartTx], Some("UART0")),
        pin("GPIO3", "RX", &[Digital, UartRx], Some("UART0")),
        pin("GPIO2", "D2", &[Digital, Pwm, Analog], None),
        pin("GPIO4", "D4", &[Digital, Pwm, Analog], None),
        pin("GPIO5", "D5", &[Digital, Pwm], None),
        pin("GPIO12", "D12", &[Digital, Pwm, Analog], None),
        pin("GPIO13", "D13", &[Digital, Pwm, Analog], None),
        pin("GPIO14", "D14", &[Digital, Pwm, Analog], None),
        pin("GPIO15", "D15", &[Digital, Pwm, Analog], None),
        pin("GPIO16", "D16", &[Digital, Pwm], None),
        pin("GPIO17", "D17", &[Digital, Pwm], None),
        pin("GPIO18", "D18", &[Digital, Pwm, SpiSck], Some("SPI0")),
        pin("GPIO19", "D19", &[Digital, Pwm, SpiMiso], Some("SPI0")),
        pin("GPIO21", "D21", &[Digital, Pwm, I2cSda], Some("I2C0")),
        pin("GPIO22", "D22", &[Digital, Pwm, I2cScl], Some("I2C0")),
        pin("GPIO23", "D23", &[Digital, Pwm, SpiMosi], Some("SPI0")),
        pin("GPIO25", "D25", &[Digital, Pwm, Analog], None),
        pin("GPIO26", "D26", &[Digital, Pwm, Analog], None),
        pin("GPIO27", "D27", &[Digital, Pwm, Analog], None),
        pin("GPIO32", "D32", &[Digital, Pwm, Analog], None),
        pin("GPIO33", "D33", &[Digital, Pwm, Analog], None),
    ]
}

static BOARD_PINS: Lazy<HashMap<&'static str, Vec<BoardPin>>> = Lazy::new(|| {
    let mut pins = HashMap::new();
    pins.insert("uno", avr_header_pins());
    pins.insert("nano", avr_header_pins());
    pins.insert("esp32", esp32_pins());
    pins
});

static BOARDS: Lazy<Vec<Board>> = Lazy::new(|| {
    vec![
        Board {
            id: "uno".to_string(),
            name: "Arduino Uno R3".to_string(),
            fqbn: "arduino:avr:uno".to_string(),
            voltage: Voltage::V5,
            digital_pins: 14,
            analog_pins: 6,
            tags: vec!["arduino".to_string(), "avr".to_string(), "uno".to_string()],
        },
        Board {
            id: "nano".to_string(),
            name: "Arduino Nano".to_string(),
            fqbn: "arduino:avr:nano".to_string(),
            voltage: Voltage::V5,
            digital_pins: 14,
            analog_pins: 8,
            tags: vec![
                "arduino".to_string(),
                "avr".to_string(),
                "nano".to_string(),
            ],
        },
        Board {
            id: "esp32".to_string(),
            name: "ESP32 DevKit v1".to_string(),
            fqbn: "esp32:esp32:esp32".to_string(),
            voltage: Voltage::V3_3,
            digital_pins: 34,
            analog_pins: 18,
            tags: vec!["esp32".to_string(), "wifi".to_string(), "ble".to_string()],
        },
    ]
});

/// All boards the catalog knows, in display order.
pub fn boards() -> &'static [Board] {
    &BOARDS
}

/// Look up a board definition by catalog id.
pub fn find_board(id: &str) -> Option<&'static Board> {
    BOARDS.iter().find(|b| b.id == id)
}

/// The ordered pin catalog for a board. Unknown ids yield an empty
/// list; whether that is an error is the caller's call.
pub fn board_pins(board_id: &str) -> &'static [BoardPin] {
    BOARD_PINS
        .get(board_id)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
