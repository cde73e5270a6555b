pub mod money;
pub mod product;
pub mod cart;

pub use money::*;
pub use product::*;
pub use cart::*;
