pub mod logs;
pub mod similar;
pub mod status;
