pub mod engine;
pub mod schedule;

pub use engine::{calculate_emi, compute_emi, interest_share, EmiInput, EmiMethod, EmiOutput};
pub use schedule::{yearly_summary, MonthRecord, YearSummary};
