//! Bridge between the Lua runtime and typed records.

pub mod access;
pub mod classify;
pub mod sandbox;
pub mod translate;

pub use access::FieldAccess;
pub use classify::classify;
pub use sandbox::{Root, Sandbox, SandboxOptions};
pub use translate::choose_translation;
