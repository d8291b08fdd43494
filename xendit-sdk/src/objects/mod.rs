pub mod bank;
pub mod disbursement;
pub mod error;
