pub mod calculator;
pub mod emi;
pub mod format;
pub mod percentage;
