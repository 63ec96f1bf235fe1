pub mod branch;
pub mod eval;
pub mod field;
pub mod operator;
pub mod trace;
pub mod value;

pub use branch::*;
pub use eval::*;
pub use field::*;
pub use operator::*;
pub use trace::*;
pub use value::*;
