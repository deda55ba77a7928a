pub mod check;
pub mod input;
pub mod sanitize;
