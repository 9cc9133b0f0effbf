pub mod check;
pub mod smooth;
