//! Fixed-rate mortgage mathematics: the level monthly payment and the
//! month-by-month amortization schedule built on it.

pub mod amortization;
pub mod payment;

pub use amortization::{amortization_schedule, AmortizationRow, AmortizationSchedule};
pub use payment::monthly_payment;
