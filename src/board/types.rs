//! Core types for board definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Electrical function a pin supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PinCapability {
    /// Digital input/output
    Digital,
    /// Analog input
    Analog,
    /// Hardware PWM output
    Pwm,
    /// I2C data line
    I2cSda,
    /// I2C clock line
    I2cScl,
    /// SPI controller-in line
    SpiMiso,
    /// SPI controller-out line
    SpiMosi,
    /// SPI clock line
    SpiSck,
    /// UART transmit line
    UartTx,
    /// UART receive line
    UartRx,
}

impl PinCapability {
    /// Catalog spelling of the capability tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PinCapability::Digital => "DIGITAL",
            PinCapability::Analog => "ANALOG",
            PinCapability::Pwm => "PWM",
            PinCapability::I2cSda => "I2C_SDA",
            PinCapability::I2cScl => "I2C_SCL",
            PinCapability::SpiMiso => "SPI_MISO",
            PinCapability::SpiMosi => "SPI_MOSI",
            PinCapability::SpiSck => "SPI_SCK",
            PinCapability::UartTx => "UART_TX",
            PinCapability::UartRx => "UART_RX",
        }
    }
}

impl fmt::Display for PinCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One physical pin of a board.
///
/// Static catalog data; never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPin {
    /// Stable symbolic identifier, e.g. "D13" or "GPIO21"
    pub id: String,
    /// Human-facing name shown in pin grids
    pub display_name: String,
    /// Capability set of this pin
    pub caps: Vec<PinCapability>,
    /// Bus identifier shared by electrically linked pins (e.g. "I2C0")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus: Option<String>,
}

impl BoardPin {
    /// Whether the pin supports the given capability.
    pub fn supports(&self, cap: PinCapability) -> bool {
        self.caps.contains(&cap)
    }
}

/// Operating voltage of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voltage {
    /// 3.3V logic level
    #[serde(rename = "3.3V")]
    V3_3,
    /// 5V logic level
    #[serde(rename = "5V")]
    V5,
}

impl fmt::Display for Voltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Voltage::V3_3 => f.write_str("3.3V"),
            Voltage::V5 => f.write_str("5V"),
        }
    }
}

/// A compile target: board identity plus headline specs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Catalog identifier, e.g. "uno"
    pub id: String,
    /// Human-facing board name
    pub name: String,
    /// Fully qualified board name used by the toolchain, e.g. "arduino:avr:uno"
    pub fqbn: String,
    /// Logic level voltage
    pub voltage: Voltage,
    /// Number of digital pins
    pub digital_pins: u8,
    /// Number of analog pins
    pub analog_pins: u8,
    /// Search/filter tags
    pub tags: Vec<String>,
}
