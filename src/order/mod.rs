//! Data model of a mastering order.
//!
//! The form layer fills an [`OrderForm`] with the plain records of its five
//! sections and hands it to [`validate`](crate::validate::validate) together
//! with the selected [`OrderMode`]. Validation produces the normalized
//! [`OrderDocument`], the sole input to XML serialization and archive
//! construction. The document is built fresh per export and never persisted.

mod contributor;
mod ebook;
mod mode;
mod records;

pub use contributor::{ContributorRecord, ContributorRole};
pub use ebook::{EBookFormat, EBookRecord};
pub use mode::OrderMode;
pub use records::{ClassificationSelection, HeaderRecord, PricingRecord, ProductRecord};

use crate::codes::CodeScheme;

/// Snapshot of all form sections at the moment export is invoked.
///
/// Sections that do not apply to the selected mode may be left `None` /
/// empty; the validator only consults what the mode requires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub header: HeaderRecord,
    pub product: Option<ProductRecord>,
    pub contributors: Vec<ContributorRecord>,
    pub classification: Option<ClassificationSelection>,
    pub pricing: PricingRecord,
    pub ebook: Option<EBookRecord>,
}

/// One resolved `Subject` element: scheme, code, and the age-range
/// attribute when the code marks a children's/young-adult audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub scheme: CodeScheme,
    pub code: String,
    /// `AudienceRangeFrom` attribute value, present only when the scheme's
    /// children's predicate fired for this code and an age code was chosen.
    pub audience_range_from: Option<String>,
}

/// A validated, normalized order: the aggregate the serializer and the
/// archive builder consume.
///
/// Instances are only produced by [`validate`](crate::validate::validate);
/// every field has passed the mode's mandatory-field, format and
/// cross-field checks, all strings are trimmed, and the classification
/// selection has been resolved against the code tables into [`Subject`]
/// entries.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDocument {
    pub(crate) mode: OrderMode,
    pub(crate) header: HeaderRecord,
    pub(crate) product: Option<ProductRecord>,
    pub(crate) contributors: Vec<ContributorRecord>,
    pub(crate) subjects: Vec<Subject>,
    /// Language element text (Upload mode).
    pub(crate) language: String,
    pub(crate) pricing: PricingRecord,
    pub(crate) ebook: Option<EBookRecord>,
}

impl OrderDocument {
    /// The operating mode the document was validated under.
    pub fn mode(&self) -> OrderMode {
        self.mode
    }

    /// The EAN written as the `<EAN>` child of `<Product>`: the product EAN
    /// in `Upload`, the existing title's EAN in `AddIntlDistribution`, and
    /// the printed book's EAN in `AddEBook`.
    pub fn primary_ean(&self) -> &str {
        match self.mode {
            OrderMode::Upload => self.product.as_ref().map(|p| p.ean.as_str()).unwrap_or(""),
            OrderMode::AddIntlDistribution => &self.pricing.international_ean,
            OrderMode::AddEBook => self
                .ebook
                .as_ref()
                .map(|e| e.printed_ean.as_str())
                .unwrap_or(""),
        }
    }

    /// The header the order is sent under.
    pub fn header(&self) -> &HeaderRecord {
        &self.header
    }

    /// The e-book block, when the order carries one.
    pub fn ebook(&self) -> Option<&EBookRecord> {
        self.ebook.as_ref().filter(|e| e.enabled)
    }

    /// Resolved `Subject` entries in serialization order (WGS before BISAC).
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }
}
