use std::fmt::{self, Debug, Formatter};

/// Writes the contained string as its [`Debug`] output, with no quotes or escaping, so that a
/// pre-drawn picture (like a sideways tree) can sit inside a `debug_struct`.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
