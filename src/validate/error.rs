//! Validation failures surfaced to the user.
//!
//! Each variant is one distinct failure the validator can report. The
//! `Display` text is the user-facing message shown verbatim by the form
//! layer (German, like the rest of the user-facing surface); [`title`]
//! supplies the matching dialog title and [`kind`] the failure category.
//!
//! [`title`]: ValidationError::title
//! [`kind`]: ValidationError::kind
use thiserror::Error;

/// Failure categories of the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// A mandatory record or field is empty.
    MissingField,
    /// A value is present but fails its pattern/format check.
    FormatViolation,
    /// Values are individually valid but mutually inconsistent.
    CrossField,
}

/// A single validation failure. Validation short-circuits, so one export
/// attempt reports at most one of these; checks that scan a fixed field
/// list name every missing field of that list in the one message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Bitte im Header-Tab ausfüllen: {}", fields.join(", "))]
    MissingHeaderFields { fields: Vec<String> },

    #[error("SentDate muss im Format YYYYMMDD vorliegen.")]
    InvalidSentDate,

    #[error("SentTime muss im Format HH:MM vorliegen.")]
    InvalidSentTime,

    #[error("Bitte geben Sie eine gültige 13-stellige Produkt-EAN im Product-Tab ein.")]
    InvalidProductEan,

    #[error("Bitte mindestens einen Contributor im Contributor-Tab hinzufügen.")]
    NoContributors,

    #[error("Bitte mindestens eine Kategorie im Classification-Tab auswählen.")]
    NoClassification,

    #[error("Bitte eine Altersgruppe im Classification-Tab wählen.")]
    MissingAgeCode,

    #[error("Bitte füllen Sie alle Pflichtfelder im Product-Tab: {}", fields.join(", "))]
    MissingProductFields { fields: Vec<String> },

    #[error("PublicationDate muss im Format YYYYMMDD vorliegen.")]
    InvalidPublicationDate,

    #[error("Die Beschreibung darf höchstens {max} Zeichen lang sein.")]
    BlurbTooLong { max: usize },

    #[error("Bitte ColouredPagesPosition angeben (kommagetrennt, ohne Leerzeichen).")]
    MissingColouredPositions,

    #[error("ColouredPagesPosition darf keine Leerzeichen enthalten.")]
    ColouredPositionsWhitespace,

    #[error("Bitte {expected} Seitenzahlen angeben, kommagetrennt ohne Leerzeichen.")]
    ColouredPositionsCountMismatch { expected: u32 },

    #[error("ColouredPagesPosition darf nur Ziffern enthalten (keine +, -, Buchstaben, Sonderzeichen).")]
    ColouredPositionsNotNumeric,

    #[error("ColouredPagesPosition darf keine 0 enthalten.")]
    ColouredPositionsZero,

    #[error("ColouredPagesPosition muss in aufsteigender Reihenfolge sein.")]
    ColouredPositionsNotAscending,

    #[error("ColouredPagesPosition darf nicht größer als Anzahl Pages sein.")]
    ColouredPositionsExceedPages,

    #[error("Bitte geben Sie einen Preis in EUR im Pricing-Tab ein.")]
    MissingEurPrice,

    #[error("Bitte internationale Preise eingeben: {}", currencies.join(", "))]
    MissingInternationalPrices { currencies: Vec<String> },

    #[error("Bitte eine gültige 13-stellige EAN im International-Tab eingeben.")]
    InvalidInternationalEan,

    #[error("Bitte eine gültige 13-stellige EAN des gedruckten Buchs eingeben.")]
    InvalidPrintedEan,

    #[error("Bitte eine gültige 13-stellige EAN für das E-Book eingeben.")]
    InvalidEBookEan,

    #[error("EBook-EAN darf nicht mit der Produkt-EAN übereinstimmen.")]
    EBookEanEqualsPrintedEan,

    #[error("Bitte einen Preis im E-Book-Tab auswählen.")]
    MissingEBookPrice,
}

impl ValidationError {
    /// The failure category of this error.
    pub fn kind(&self) -> ValidationKind {
        use ValidationError::*;
        match self {
            MissingHeaderFields { .. }
            | NoContributors
            | NoClassification
            | MissingAgeCode
            | MissingProductFields { .. }
            | MissingColouredPositions
            | MissingEurPrice
            | MissingInternationalPrices { .. }
            | MissingEBookPrice => ValidationKind::MissingField,
            InvalidSentDate
            | InvalidSentTime
            | InvalidProductEan
            | InvalidPublicationDate
            | BlurbTooLong { .. }
            | ColouredPositionsWhitespace
            | ColouredPositionsNotNumeric
            | ColouredPositionsZero
            | InvalidInternationalEan
            | InvalidPrintedEan
            | InvalidEBookEan => ValidationKind::FormatViolation,
            ColouredPositionsCountMismatch { .. }
            | ColouredPositionsNotAscending
            | ColouredPositionsExceedPages
            | EBookEanEqualsPrintedEan => ValidationKind::CrossField,
        }
    }

    /// The dialog title the form layer shows with the message.
    pub fn title(&self) -> &'static str {
        use ValidationError::*;
        match self {
            MissingHeaderFields { .. }
            | NoContributors
            | NoClassification
            | MissingAgeCode
            | MissingProductFields { .. }
            | MissingColouredPositions
            | ColouredPositionsCountMismatch { .. }
            | MissingEurPrice
            | MissingInternationalPrices { .. }
            | MissingEBookPrice => "Pflichtfeld fehlt",
            InvalidSentDate | InvalidSentTime => "Ungültiges Format",
            InvalidProductEan
            | InvalidInternationalEan
            | InvalidPrintedEan
            | InvalidEBookEan
            | EBookEanEqualsPrintedEan => "Ungültige EAN",
            InvalidPublicationDate
            | BlurbTooLong { .. }
            | ColouredPositionsWhitespace
            | ColouredPositionsNotNumeric
            | ColouredPositionsZero
            | ColouredPositionsNotAscending
            | ColouredPositionsExceedPages => "Formatfehler",
        }
    }
}
