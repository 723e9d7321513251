pub mod printout;
pub mod sweep;
