//! Term library and the factory that turns library entries into visuals.
//!
//! Style defaults are a plain [`config::Defaults`] value. Build it once (or
//! load it from TOML) and hand it to the factory; nothing here reads global
//! state.

pub mod config;
pub mod factory;
pub mod loader;
pub mod terms;
