pub mod solve;

pub use solve::{SolveError, SolveResult};
