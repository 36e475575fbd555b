pub mod floor_div;
pub mod safe_math;
