pub mod edge;
pub mod node;
pub mod store;
pub mod validate;

pub use edge::*;
pub use node::*;
pub use store::*;
pub use validate::*;
