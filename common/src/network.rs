pub mod ports;
pub mod scan;
pub mod view;
