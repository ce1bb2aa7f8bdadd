//! Order validation.
//!
//! [`validate`] takes the form snapshot and the selected mode, runs the
//! mode's mandatory-field, format and cross-field checks, and produces the
//! normalized [`OrderDocument`] the serializer consumes. Validation
//! short-circuits: the first failing check aborts the export and is
//! reported as a single user-facing message (checks that scan a fixed
//! field list name all missing fields of that list at once).
//!
//! Header checks run first in every mode, then the mode-specific checks in
//! document order.

mod error;

pub use error::{ValidationError, ValidationKind};

use chrono::{NaiveDate, NaiveTime};

use crate::codes::{CodeScheme, CodeTables};
use crate::order::{
    ClassificationSelection, ContributorRecord, EBookRecord, HeaderRecord, OrderDocument,
    OrderForm, OrderMode, PricingRecord, ProductRecord, Subject,
};

/// Maximum blurb length in characters.
pub const BLURB_MAX_CHARS: usize = 4000;

/// Required header fields, by XML element name.
const REQUIRED_HEADER: [&str; 5] = [
    "FromCompany",
    "FromCompanyNumber",
    "SentDate",
    "SentTime",
    "FromEmail",
];

/// The three currencies of the international price set.
const INTL_CURRENCIES: [&str; 3] = ["USD", "GBP", "AUD"];

/// Whether a string is a well-formed EAN: exactly 13 ASCII digits.
pub fn is_valid_ean(s: &str) -> bool {
    s.len() == 13 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a form snapshot under the given mode.
///
/// On success the returned [`OrderDocument`] is normalized: strings are
/// trimmed, decimal commas in prices are folded to dots, and the
/// classification selection is resolved against `tables` into `Subject`
/// entries carrying their age-range attribute where required.
///
/// On failure the first failing check is returned; nothing is produced.
pub fn validate(
    mode: OrderMode,
    form: &OrderForm,
    tables: &CodeTables,
) -> Result<OrderDocument, ValidationError> {
    check_header(&form.header)?;
    match mode {
        OrderMode::Upload => validate_upload(form, tables),
        OrderMode::AddIntlDistribution => validate_add_intl(form),
        OrderMode::AddEBook => validate_add_ebook(form),
    }
}

fn check_header(header: &HeaderRecord) -> Result<(), ValidationError> {
    let values = [
        header.from_company.as_str(),
        header.from_company_number.as_str(),
        header.sent_date.as_str(),
        header.sent_time.as_str(),
        header.from_email.as_str(),
    ];
    let fields: Vec<String> = REQUIRED_HEADER
        .iter()
        .zip(values)
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect();
    if !fields.is_empty() {
        return Err(ValidationError::MissingHeaderFields { fields });
    }
    if NaiveDate::parse_from_str(header.sent_date.trim(), "%Y%m%d").is_err() {
        return Err(ValidationError::InvalidSentDate);
    }
    if NaiveTime::parse_from_str(header.sent_time.trim(), "%H:%M").is_err() {
        return Err(ValidationError::InvalidSentTime);
    }
    Ok(())
}

fn validate_upload(
    form: &OrderForm,
    tables: &CodeTables,
) -> Result<OrderDocument, ValidationError> {
    let product = form
        .product
        .as_ref()
        .ok_or(ValidationError::InvalidProductEan)?;
    let prod_ean = product.ean.trim();
    if !is_valid_ean(prod_ean) {
        return Err(ValidationError::InvalidProductEan);
    }

    if form.contributors.is_empty() {
        return Err(ValidationError::NoContributors);
    }

    let class = form
        .classification
        .as_ref()
        .ok_or(ValidationError::NoClassification)?;
    if class.wgs.is_empty() && class.bisac.is_empty() {
        return Err(ValidationError::NoClassification);
    }
    let need_age_wgs = class
        .wgs
        .iter()
        .any(|code| tables.wgs().marks_childrens_audience(code.trim()));
    let need_age_bisac = class
        .bisac
        .iter()
        .any(|code| tables.bisac().marks_childrens_audience(code.trim()));
    if (need_age_wgs && class.age_wgs.trim().is_empty())
        || (need_age_bisac && class.age_bisac.trim().is_empty())
    {
        return Err(ValidationError::MissingAgeCode);
    }

    check_required_product_fields(product)?;
    if NaiveDate::parse_from_str(product.publication_date.trim(), "%Y%m%d").is_err() {
        return Err(ValidationError::InvalidPublicationDate);
    }
    if product.blurb.trim().chars().count() > BLURB_MAX_CHARS {
        return Err(ValidationError::BlurbTooLong {
            max: BLURB_MAX_CHARS,
        });
    }
    check_coloured_positions(product)?;

    if form.pricing.eur.trim().is_empty() {
        return Err(ValidationError::MissingEurPrice);
    }
    if form.pricing.international {
        check_international_prices(&form.pricing)?;
    }

    let ebook = form.ebook.as_ref().filter(|e| e.enabled);
    if let Some(eb) = ebook {
        let eb_ean = eb.ean.trim();
        if !is_valid_ean(eb_ean) {
            return Err(ValidationError::InvalidEBookEan);
        }
        if eb_ean == prod_ean {
            return Err(ValidationError::EBookEanEqualsPrintedEan);
        }
        if eb.price.trim().is_empty() {
            return Err(ValidationError::MissingEBookPrice);
        }
    }

    Ok(OrderDocument {
        mode: OrderMode::Upload,
        header: normalize_header(&form.header),
        product: Some(normalize_product(product)),
        contributors: form.contributors.iter().map(normalize_contributor).collect(),
        subjects: resolve_subjects(class, tables),
        language: class.language.trim().to_string(),
        pricing: PricingRecord {
            eur: normalize_price(&form.pricing.eur),
            international: form.pricing.international,
            usd: normalize_price(&form.pricing.usd),
            gbp: normalize_price(&form.pricing.gbp),
            aud: normalize_price(&form.pricing.aud),
            international_ean: String::new(),
        },
        ebook: ebook.map(normalize_ebook),
    })
}

fn validate_add_intl(form: &OrderForm) -> Result<OrderDocument, ValidationError> {
    let intl_ean = form.pricing.international_ean.trim();
    if !is_valid_ean(intl_ean) {
        return Err(ValidationError::InvalidInternationalEan);
    }
    check_international_prices(&form.pricing)?;

    Ok(OrderDocument {
        mode: OrderMode::AddIntlDistribution,
        header: normalize_header(&form.header),
        product: None,
        contributors: Vec::new(),
        subjects: Vec::new(),
        language: String::new(),
        pricing: PricingRecord {
            eur: normalize_price(&form.pricing.eur),
            international: true,
            usd: normalize_price(&form.pricing.usd),
            gbp: normalize_price(&form.pricing.gbp),
            aud: normalize_price(&form.pricing.aud),
            international_ean: intl_ean.to_string(),
        },
        ebook: None,
    })
}

fn validate_add_ebook(form: &OrderForm) -> Result<OrderDocument, ValidationError> {
    let eb = form
        .ebook
        .as_ref()
        .ok_or(ValidationError::InvalidPrintedEan)?;
    let printed_ean = eb.printed_ean.trim();
    if !is_valid_ean(printed_ean) {
        return Err(ValidationError::InvalidPrintedEan);
    }
    let eb_ean = eb.ean.trim();
    if !is_valid_ean(eb_ean) {
        return Err(ValidationError::InvalidEBookEan);
    }
    if eb_ean == printed_ean {
        return Err(ValidationError::EBookEanEqualsPrintedEan);
    }
    if eb.price.trim().is_empty() {
        return Err(ValidationError::MissingEBookPrice);
    }

    let mut ebook = normalize_ebook(eb);
    // The mode itself is the e-book feature; the form checkbox is locked on.
    ebook.enabled = true;

    Ok(OrderDocument {
        mode: OrderMode::AddEBook,
        header: normalize_header(&form.header),
        product: None,
        contributors: Vec::new(),
        subjects: Vec::new(),
        language: String::new(),
        pricing: PricingRecord {
            eur: normalize_price(&form.pricing.eur),
            international: false,
            usd: String::new(),
            gbp: String::new(),
            aud: String::new(),
            international_ean: String::new(),
        },
        ebook: Some(ebook),
    })
}

fn check_required_product_fields(product: &ProductRecord) -> Result<(), ValidationError> {
    // Field order and display names follow the form; the blurb is labelled
    // "Beschreibung" there.
    let required = [
        ("Title", product.title.as_str()),
        ("Beschreibung", product.blurb.as_str()),
        ("Height", product.height.as_str()),
        ("Width", product.width.as_str()),
        ("Pages", product.pages.as_str()),
        ("PublicationDate", product.publication_date.as_str()),
        ("ColouredPages", product.coloured_pages.as_str()),
        ("Quality", product.quality.as_str()),
        ("Paper", product.paper.as_str()),
        ("Binding", product.binding.as_str()),
        ("CoverDuplex", product.cover_duplex.as_str()),
        ("Finish", product.finish.as_str()),
    ];
    let fields: Vec<String> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect();
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingProductFields { fields })
    }
}

/// Coloured-page position list invariant. A count that does not parse as a
/// positive number counts as zero, which disables the checks (the form
/// defaults the field to "0").
fn check_coloured_positions(product: &ProductRecord) -> Result<(), ValidationError> {
    let count: u32 = product.coloured_pages.trim().parse().unwrap_or(0);
    if count == 0 {
        return Ok(());
    }
    let positions = product.coloured_pages_position.trim();
    if positions.is_empty() {
        return Err(ValidationError::MissingColouredPositions);
    }
    if positions.contains(' ') {
        return Err(ValidationError::ColouredPositionsWhitespace);
    }
    let parts: Vec<&str> = positions.split(',').collect();
    if parts.len() != count as usize {
        return Err(ValidationError::ColouredPositionsCountMismatch { expected: count });
    }
    let mut numbers = Vec::with_capacity(parts.len());
    for part in parts {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::ColouredPositionsNotNumeric);
        }
        if part == "0" {
            return Err(ValidationError::ColouredPositionsZero);
        }
        let value: u64 = part
            .parse()
            .map_err(|_| ValidationError::ColouredPositionsNotNumeric)?;
        numbers.push(value);
    }
    if numbers.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(ValidationError::ColouredPositionsNotAscending);
    }
    let total: u64 = product.pages.trim().parse().unwrap_or(0);
    if numbers.last().copied().unwrap_or(0) > total {
        return Err(ValidationError::ColouredPositionsExceedPages);
    }
    Ok(())
}

fn check_international_prices(pricing: &PricingRecord) -> Result<(), ValidationError> {
    let values = [
        pricing.usd.as_str(),
        pricing.gbp.as_str(),
        pricing.aud.as_str(),
    ];
    let currencies: Vec<String> = INTL_CURRENCIES
        .iter()
        .zip(values)
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect();
    if currencies.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingInternationalPrices { currencies })
    }
}

fn resolve_subjects(class: &ClassificationSelection, tables: &CodeTables) -> Vec<Subject> {
    let mut subjects = Vec::with_capacity(class.wgs.len() + class.bisac.len());
    for (scheme, codes, age) in [
        (CodeScheme::Wgs, &class.wgs, class.age_wgs.trim()),
        (CodeScheme::Bisac, &class.bisac, class.age_bisac.trim()),
    ] {
        for code in codes {
            let code = code.trim();
            if code.is_empty() {
                continue;
            }
            let audience_range_from = (tables.table(scheme).marks_childrens_audience(code)
                && !age.is_empty())
            .then(|| age.to_string());
            subjects.push(Subject {
                scheme,
                code: code.to_string(),
                audience_range_from,
            });
        }
    }
    subjects
}

fn normalize_header(header: &HeaderRecord) -> HeaderRecord {
    HeaderRecord {
        from_company: header.from_company.trim().to_string(),
        from_company_number: header.from_company_number.trim().to_string(),
        from_person: header.from_person.trim().to_string(),
        from_email: header.from_email.trim().to_string(),
        sent_date: header.sent_date.trim().to_string(),
        sent_time: header.sent_time.trim().to_string(),
        imprint: header.imprint.trim().to_string(),
    }
}

fn normalize_product(product: &ProductRecord) -> ProductRecord {
    ProductRecord {
        ean: product.ean.trim().to_string(),
        title: product.title.trim().to_string(),
        sub_title: product.sub_title.trim().to_string(),
        series: product.series.trim().to_string(),
        part_number: product.part_number.trim().to_string(),
        edition_number: product.edition_number.trim().to_string(),
        publication_date: product.publication_date.trim().to_string(),
        blurb: product.blurb.trim().to_string(),
        height: product.height.trim().to_string(),
        width: product.width.trim().to_string(),
        pages: product.pages.trim().to_string(),
        coloured_pages: product.coloured_pages.trim().to_string(),
        coloured_pages_position: product.coloured_pages_position.trim().to_string(),
        quality: product.quality.trim().to_string(),
        paper: product.paper.trim().to_string(),
        binding: product.binding.trim().to_string(),
        cover_duplex: product.cover_duplex.trim().to_string(),
        finish: product.finish.trim().to_string(),
    }
}

fn normalize_contributor(contributor: &ContributorRecord) -> ContributorRecord {
    ContributorRecord {
        role: contributor.role,
        last_name: contributor.last_name.trim().to_string(),
        first_name: contributor.first_name.trim().to_string(),
        isni: contributor.isni.trim().to_string(),
        orcid: contributor.orcid.trim().to_string(),
        short_bio: contributor.short_bio.trim().to_string(),
    }
}

fn normalize_ebook(ebook: &EBookRecord) -> EBookRecord {
    EBookRecord {
        enabled: ebook.enabled,
        printed_ean: ebook.printed_ean.trim().to_string(),
        ean: ebook.ean.trim().to_string(),
        format: ebook.format,
        conversion: ebook.conversion.trim().to_string(),
        price: normalize_price(&ebook.price),
    }
}

/// Trim and fold a decimal comma to a dot, the way the price entries
/// normalize their input.
fn normalize_price(price: &str) -> String {
    price.trim().replace(',', ".")
}
