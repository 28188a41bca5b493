pub mod classifier;
pub mod goal;
pub mod logic;
pub mod payroll;
pub mod period;
pub mod reconstruct;
