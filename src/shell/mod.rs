// Composition root for the todos service.
//
// Responsibilities:
// - Read config from environment.
// - Construct the in-memory store once at startup.
// - Wire the store handle into the HTTP router.

pub mod http;
pub mod state;
