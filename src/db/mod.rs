pub mod goals;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod punches;
pub mod rates;
pub mod stats;
