//! envkeys - Bootstrap secrets for a CMS deployment's environment file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Print a fresh secret set (default command)
//! │   ├── database      # Show a resolved database descriptor
//! │   └── output        # Styled stderr messages
//! └── core/             # Core library components
//!     ├── entropy       # Secure random sources
//!     ├── secret        # Single base64 secret
//!     ├── secret_set    # The fixed slot set and its env rendering
//!     ├── generator     # All-or-nothing output of a secret set
//!     ├── env           # Typed environment lookups
//!     └── database      # Staging/production connection descriptors
//! ```
//!
//! # Example
//!
//! ```
//! use envkeys::core::secret::generate_secret;
//!
//! let secret = generate_secret(16).unwrap();
//! assert_eq!(secret.len(), 24);
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::generator::{run, run_with};
pub use crate::core::secret::generate_secret;
