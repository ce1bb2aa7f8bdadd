//! mastering-order - validation and export pipeline for BoD mastering orders
//!
//! This library turns the flat records captured by a data-entry front end
//! into a submission-ready mastering order: it validates the records under
//! one of three operating modes, serializes the validated order into the
//! fixed `<BoD>` XML document, and packages the XML together with the
//! manuscript/cover/e-book assets into a ZIP archive under the production
//! pipeline's naming convention.
//!
//! # Features
//!
//! - **Three operating modes**: full upload, adding international
//!   distribution to an existing title, adding an e-book variant
//! - **Mode-aware validation**: mandatory-field, format and cross-field
//!   checks with user-facing messages, short-circuiting at the first
//!   failure
//! - **Deterministic XML**: fixed element order, empty optionals omitted,
//!   pretty-printed UTF-8 with declaration
//! - **Archive packaging**: fixed entry names, asset checks, transactional
//!   ZIP construction
//!
//! The library carries no UI dependency: the front end's only jobs are to
//! fill an [`OrderForm`] and to display returned error messages.
//!
//! # Example - exporting an upload order
//!
//! ```no_run
//! use mastering_order::codes::CodeTables;
//! use mastering_order::order::{OrderForm, OrderMode};
//! use mastering_order::{archive, validate, xml};
//!
//! # fn main() -> mastering_order::Result<()> {
//! let form = OrderForm::default(); // filled by the form layer
//! let doc = validate::validate(OrderMode::Upload, &form, CodeTables::builtin())?;
//!
//! let xml_name = xml::default_filename(&doc);
//! xml::write_to_file(&doc, &xml_name)?;
//!
//! let assets = archive::AssetSet {
//!     manuscript: Some("manuscript.pdf".into()),
//!     cover: Some("cover.pdf".into()),
//!     ..Default::default()
//! };
//! let zip_name = archive::default_filename(&doc);
//! archive::build(&doc, xml_name.as_ref(), &assets, zip_name.as_ref())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - international price suggestions
//!
//! ```
//! use mastering_order::pricing;
//!
//! let s = pricing::suggest(9.99);
//! assert_eq!(pricing::format_price(s.usd), "14.99");
//! ```

/// ZIP packaging of completed orders under the fixed entry-naming scheme.
pub mod archive;

/// Classification code tables (WGS, BISAC) and fixed publishing
/// enumerations.
pub mod codes;

mod error;

/// The order data model: form records, modes, and the validated document.
pub mod order;

/// International price suggestions derived from the EUR price.
pub mod pricing;

/// Mode-aware order validation.
pub mod validate;

/// XML serialization of validated orders.
pub mod xml;

// Re-export commonly used types for convenience
pub use error::{ArchiveError, Error, Result, ValidationError};
pub use order::{OrderDocument, OrderForm, OrderMode};
pub use validate::{is_valid_ean, validate as validate_order};
