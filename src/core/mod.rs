// src/core/mod.rs — Recipe model and the search session

pub mod session;
pub mod types;
