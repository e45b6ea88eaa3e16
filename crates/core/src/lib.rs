//! `identikit-core` — strongly-typed identifier value objects.
//!
//! This crate gives application code self-validating identifier types instead
//! of raw primitives: an integer-backed [`IntId`] and a UUIDv4-backed
//! [`UuidId`], each tagged with a zero-sized kind marker so unrelated ID
//! kinds cannot be mixed up, plus the [`Identifier`] capability for rendering
//! and strict/loose comparison across kinds at runtime.
//!
//! Mint kinds with the [`int_id!`] and [`uuid_id!`] macros:
//!
//! ```
//! use identikit_core::{Comparison, Identifier};
//!
//! identikit_core::int_id! {
//!     /// Identifies a customer.
//!     pub CustomerId => CustomerIdKind
//! }
//!
//! identikit_core::int_id! {
//!     /// Identifies a supplier.
//!     pub SupplierId => SupplierIdKind
//! }
//!
//! let customer = CustomerId::from_string("175")?;
//! let supplier = SupplierId::convert_from(customer);
//!
//! // Distinct kinds never compare equal strictly, even with equal values.
//! assert!(!customer.is_equal_to(&supplier, Comparison::Strict));
//! assert!(customer.is_equal_to(&supplier, Comparison::Loose));
//! # Ok::<(), identikit_core::IdError>(())
//! ```

pub mod error;
pub mod identifier;
pub mod int_id;
pub mod uuid_id;

pub use error::{IdError, IdResult};
pub use identifier::{Comparison, IdKind, Identifier};
pub use int_id::IntId;
pub use uuid_id::UuidId;
