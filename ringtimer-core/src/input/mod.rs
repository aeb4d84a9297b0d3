//! Input decoding
//!
//! Raw encoder and button line levels in, encoder steps and classified
//! button events out.

pub mod button;
pub mod counter;
pub mod encoder;
pub mod quadrature;

pub use button::{ButtonClassifier, ButtonEdge};
pub use counter::StepCounter;
pub use encoder::{ButtonInput, InputEvents, QuadratureInput};
pub use quadrature::{step_for_code, Direction, QuadratureDecoder, QuadratureSample};
