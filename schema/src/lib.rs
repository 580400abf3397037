pub mod function;
pub mod metadata;
pub mod quantity;

pub use function::*;
pub use metadata::*;
pub use quantity::Quantity;
