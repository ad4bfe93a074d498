pub mod decode;
pub mod types;

pub use decode::*;
pub use types::*;
