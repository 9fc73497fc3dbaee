//! Auth-domain identifiers, key material, and the RS256 token builder.

pub mod claims;
pub mod id;
pub mod key;
pub mod signer;

pub use claims::*;
pub use id::*;
pub use key::*;
pub use signer::*;
