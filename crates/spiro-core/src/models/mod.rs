pub mod asthma;
pub mod copd;
pub mod report;
