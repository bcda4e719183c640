pub mod catalog;
pub mod error;
pub mod fields;
pub mod navigation;
pub mod records;

pub use catalog::*;
pub use error::*;
pub use fields::*;
pub use navigation::*;
pub use records::*;
