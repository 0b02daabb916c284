//! Small, pure helpers shared by operator code.
//!
//! - [`network`]: validate `http`/`https` endpoint URIs and extract the scheme.
//! - [`hash`]: reproducible string hashing (FNV-1a, no random seed).
//! - [`slice`]: membership and removal helpers for string lists.
//!
//! Nothing in this crate performs IO, logs, or holds mutable state. Callers
//! decide how to react to errors.

pub mod hash;
pub mod network;
pub mod slice;

pub use hash::{hash, hash_hex};
pub use network::{endpoint, uri, Endpoint, Scheme, UriError};
pub use slice::{contains_string, remove_string};

/// Return a short about/version line for binaries to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{}", pkg, ver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reexports_are_usable() {
        assert_eq!(uri("http://redhat").ok(), Some(Scheme::Http));
        assert_eq!(hash("foo"), hash::hash("foo"));
        assert!(contains_string(&["a", "b"], "b"));
    }

    #[test]
    fn about_names_the_crate() {
        assert!(about().starts_with("util v"));
    }
}
