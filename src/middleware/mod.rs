/*
 * Responsibility
 * - Public surface of the middleware modules
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
pub mod trace_id;
