pub mod check;
pub mod cli;
pub mod diagnostics;
pub mod types;
pub mod utils;
