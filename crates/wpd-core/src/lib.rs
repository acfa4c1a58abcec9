pub mod config;
pub mod logging;

pub mod assemble;
pub mod audit;
pub mod error;
pub mod fetch;
pub mod page;
pub mod save;
pub mod sequence;
