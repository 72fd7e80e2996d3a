//! Rust code generation modules.

pub mod accessors;

pub use accessors::AccessorGenerator;
