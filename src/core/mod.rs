// UserSleuth - core/mod.rs
//
// Core business logic layer: data model, store loading, filtering, display.
// The filter and presenter are pure; only the loader touches the filesystem.

pub mod filter;
pub mod loader;
pub mod model;
pub mod present;
