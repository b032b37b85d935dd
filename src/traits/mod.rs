pub mod clock;
pub mod diagnostics;
pub mod pointer;
pub mod ray_query;
pub mod target;

pub use clock::*;
pub use diagnostics::*;
pub use pointer::*;
pub use ray_query::*;
pub use target::*;
