pub mod authorization;
pub mod error;
pub mod request;

pub use authorization::*;
pub use error::*;
pub use request::*;
