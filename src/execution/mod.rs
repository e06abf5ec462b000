//! Request execution: construction, dispatch and typed decoding.

pub mod http;
