//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter            | Implements   | Connects to               |
//! |--------------------|--------------|---------------------------|
//! | `hardware`         | InputPort    | ESP32 GPIO buttons        |
//! |                    | SensorPort   | ESP32 ADC (MAP sensor)    |
//! |                    | ActuatorPort | LEDC PWM (solenoid)       |
//! | `display`          | DisplayPort  | 16x2 status panel         |
//! | `log_sink`         | EventSink    | Serial log output         |
//! | `serial_telemetry` | EventSink    | Framed telemetry stream   |

pub mod display;
pub mod hardware;
pub mod log_sink;
pub mod serial_telemetry;
