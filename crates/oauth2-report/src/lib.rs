pub mod envelope;
pub mod reporter;

pub use envelope::*;
pub use reporter::*;
