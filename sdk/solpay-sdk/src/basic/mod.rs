pub mod actions;
pub mod session;
pub mod shell;
