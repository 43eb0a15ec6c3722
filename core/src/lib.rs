pub mod interfaces;
pub mod scanner;
pub mod session;
