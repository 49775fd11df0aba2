//! Oriel - a small embeddable expression language
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use oriel_ast as ast;
pub use oriel_common as common;
pub use oriel_types as types;

#[cfg(test)]
mod tests {
    #[test]
    fn workspace_compiles() {
        // Ensure the workspace compiles
        assert!(true);
    }
}
