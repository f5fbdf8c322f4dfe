pub mod fields;
pub mod method;
pub mod ports;
pub mod validation;
