// UserSleuth - app/mod.rs
//
// Application layer: query orchestration and error boundary.
// Dependencies: core layer.

pub mod query;
