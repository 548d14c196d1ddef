// src/lib.rs — Library root for AIChef

pub mod cli;
pub mod core;
pub mod favorites;
pub mod infra;
pub mod search;
pub mod storage;
