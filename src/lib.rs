// Game records and the in-memory store
pub mod core;

// Configuration
pub mod config;

// Error taxonomy for the HTTP surface
pub mod error;

// Middleware
pub mod middleware;

// HTTP routes
pub mod routes;

// Router assembly
pub mod router;

// Application state
pub mod state;
