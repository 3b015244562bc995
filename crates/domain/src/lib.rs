#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod message;
mod package;
mod running;
mod swimming;
mod walking;
mod workout;

pub use error::*;
pub use message::*;
pub use package::*;
pub use running::*;
pub use swimming::*;
pub use walking::*;
pub use workout::*;
