//! Plain data records captured by the order form sections.
//!
//! Each record mirrors one form section and carries its values as entered,
//! untrimmed and unvalidated. The validator normalizes them into an
//! [`OrderDocument`](super::OrderDocument); the form layer never applies
//! business rules itself.

/// Sender and transmission metadata, required in every mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRecord {
    pub from_company: String,
    pub from_company_number: String,
    /// Contact person, optional.
    pub from_person: String,
    pub from_email: String,
    /// Send date, `YYYYMMDD`.
    pub sent_date: String,
    /// Send time, `HH:MM`.
    pub sent_time: String,
    /// Imprint the title appears under; serialized only in `Upload` mode.
    pub imprint: String,
}

/// Printed-title metadata, captured only in `Upload` mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRecord {
    /// 13-digit EAN identifying the printed title.
    pub ean: String,
    pub title: String,
    pub sub_title: String,
    pub series: String,
    pub part_number: String,
    pub edition_number: String,
    /// Publication date, `YYYYMMDD`.
    pub publication_date: String,
    /// Back-cover marketing text, at most 4000 characters.
    pub blurb: String,
    /// Block height in millimetres.
    pub height: String,
    /// Block width in millimetres.
    pub width: String,
    pub pages: String,
    /// Number of interior pages printed in colour.
    pub coloured_pages: String,
    /// Comma-separated page numbers of the coloured pages, no spaces,
    /// strictly ascending.
    pub coloured_pages_position: String,
    pub quality: String,
    pub paper: String,
    pub binding: String,
    pub cover_duplex: String,
    pub finish: String,
}

/// Subject classification selection, captured only in `Upload` mode.
///
/// `wgs` and `bisac` hold the selected codes of the two taxonomies in
/// selection order. The age codes are required whenever a selected code
/// marks a children's/young-adult audience for its scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationSelection {
    pub wgs: Vec<String>,
    pub bisac: Vec<String>,
    /// Age-range code (`AudienceRangeFrom`) for the WGS scheme.
    pub age_wgs: String,
    /// Age-range code (`AudienceRangeFrom`) for the BISAC scheme.
    pub age_bisac: String,
    /// ISO language code of the title text.
    pub language: String,
}

/// Retail pricing: the domestic EUR price plus the international price set.
///
/// `international` mirrors the "Internationaler Vertrieb" checkbox (on by
/// default); when set, all three foreign currencies are
/// mandatory. In `AddIntlDistribution` mode `international_ean` identifies
/// the existing title the prices attach to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRecord {
    pub eur: String,
    pub international: bool,
    pub usd: String,
    pub gbp: String,
    pub aud: String,
    /// 13-digit EAN of the existing title (AddIntlDistribution mode only).
    pub international_ean: String,
}

impl Default for PricingRecord {
    fn default() -> Self {
        Self {
            eur: String::new(),
            international: true,
            usd: String::new(),
            gbp: String::new(),
            aud: String::new(),
            international_ean: String::new(),
        }
    }
}
