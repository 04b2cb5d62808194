pub mod decode;
pub mod encode;

pub use decode::{decode, try_decode};
pub use encode::encode;
