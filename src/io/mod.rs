//! Table I/O: CSV reading/writing with transparent gzip.

pub mod compression;
pub mod csv;
