//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod asset_handlers;
mod contract_handlers;
mod enforcement_handlers;

pub use asset_handlers::*;
pub use contract_handlers::*;
pub use enforcement_handlers::*;
