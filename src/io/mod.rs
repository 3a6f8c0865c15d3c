pub mod reader;
pub mod writer;

pub use reader::{read_universe, ReadError};
pub use writer::{write_universe, sci};
