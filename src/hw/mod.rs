pub mod pin;
pub mod spi;
#[cfg(feature = "stm32f7")]
pub mod usart;

pub use pin::{ControlLine, NoPin, State};
pub use spi::ChipSelect;
pub use spi::SpiBus;
#[cfg(feature = "stm32f7")]
pub use usart::Usart;
