pub mod pay;

pub use pay::process_pay;
