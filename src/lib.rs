pub mod banner;
pub mod commands;
pub mod consts;
pub mod engine;
pub mod input;
pub mod logging;
pub mod session;
