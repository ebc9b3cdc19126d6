// Numerical methods

pub mod milne;
pub mod resample;
pub mod settings;
