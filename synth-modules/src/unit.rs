//! # Unit
//!
//! Describes a module to whatever host registers it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    /// Name under which the module is registered.
    pub name: &'static str,
    /// Pure units are stateless functions of their inputs. Anything carrying state across blocks
    /// (phase, filter memory, ...) is not pure.
    pub pure: bool,
}
