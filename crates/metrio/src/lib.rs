//! Top-level facade crate for metrio.
//!
//! Re-exports the core types, the server library, and the agent library so
//! users can depend on a single crate.

pub mod core {
    pub use metrio_core::*;
}

pub mod server {
    pub use metrio_server::*;
}

pub mod agent {
    pub use metrio_agent::*;
}
