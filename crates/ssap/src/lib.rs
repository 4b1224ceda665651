//! Top-level facade crate for ssap.
//!
//! Re-exports the core translator/encoder and the remote dispatcher so users
//! can depend on a single crate.

pub mod core {
    pub use ssap_core::*;
}

pub mod remote {
    pub use ssap_remote::*;
}
