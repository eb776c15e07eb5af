pub mod gating;
pub mod hours;
pub mod period;
pub mod validation;
