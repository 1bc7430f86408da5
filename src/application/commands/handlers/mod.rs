//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod contract_handlers;

pub use contract_handlers::*;
