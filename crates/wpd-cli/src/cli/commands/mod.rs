mod assemble;
mod audit;
mod fetch;

pub use assemble::run_assemble;
pub use audit::run_audit;
pub use fetch::run_fetch;
