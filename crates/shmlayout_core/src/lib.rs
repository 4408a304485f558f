//! Schema-driven packed struct layouts and shared-memory snapshot decoding.

/// Schema parsing, layout caching, and binary snapshot decoding.
pub mod layout;
