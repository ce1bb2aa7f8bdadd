//! Classification code tables and the fixed publishing enumerations.
//!
//! Two independent subject taxonomies classify a title: the German book
//! trade's Warengruppen-Systematik (WGS) and the BISAC subject headings.
//! Both ship as JSON files mapping code to description
//! (`warengruppe_codes.json` / `bisac_codes.json`); they are loaded once at
//! startup and never mutated afterwards. A code from either scheme can mark
//! a title as addressing a children's/young-adult audience, which makes an
//! age-range code mandatory; WGS signals this through its description,
//! BISAC through the code prefix.
//!
//! The module also carries the fixed choice lists the order form offers
//! (age ranges, languages, page format presets, e-book price points,
//! sender defaults) so form layers and tests share one source of truth.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use phf::phf_map;

use crate::error::{Error, Result};

/// The two subject classification schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeScheme {
    /// Warengruppen-Systematik of the German book trade.
    Wgs,
    /// BISAC subject headings.
    Bisac,
}

impl CodeScheme {
    /// The `Scheme` attribute text on a `Subject` element.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeScheme::Wgs => "WGS",
            CodeScheme::Bisac => "BISAC",
        }
    }
}

impl std::fmt::Display for CodeScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One code of a classification scheme with its human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CodeEntry {
    pub code: String,
    pub description: String,
}

/// Read-only code table of one scheme, in file order.
#[derive(Debug, Clone)]
pub struct CodeTable {
    scheme: CodeScheme,
    entries: Vec<CodeEntry>,
    index: HashMap<String, usize>,
}

impl CodeTable {
    /// Parse a table from the JSON shape the code files use:
    /// a single object mapping code to description.
    pub fn from_json(scheme: CodeScheme, json: &str) -> Result<CodeTable> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(map.len());
        let mut index = HashMap::with_capacity(map.len());
        for (code, value) in map {
            let description = value
                .as_str()
                .ok_or_else(|| {
                    Error::CodeTable(format!("{scheme} code {code}: description is not a string"))
                })?
                .to_string();
            index.insert(code.clone(), entries.len());
            entries.push(CodeEntry { code, description });
        }
        Ok(CodeTable {
            scheme,
            entries,
            index,
        })
    }

    /// Load a table from a JSON file on disk.
    pub fn from_path<P: AsRef<Path>>(scheme: CodeScheme, path: P) -> Result<CodeTable> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(scheme, &json)
    }

    /// The scheme this table belongs to.
    pub fn scheme(&self) -> CodeScheme {
        self.scheme
    }

    /// Description for a code, if the code is listed.
    pub fn description(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&i| self.entries[i].description.as_str())
    }

    /// Whether the code marks a children's/young-adult audience, making an
    /// age-range code mandatory. WGS: the listed description contains
    /// "Kinder". BISAC: the code starts with "JUV" or "YAF".
    pub fn marks_childrens_audience(&self, code: &str) -> bool {
        match self.scheme {
            CodeScheme::Wgs => self
                .description(code)
                .is_some_and(|desc| desc.contains("Kinder")),
            CodeScheme::Bisac => code.starts_with("JUV") || code.starts_with("YAF"),
        }
    }

    /// Iterate the entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeEntry> {
        self.entries.iter()
    }

    /// Number of codes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both classification tables, bundled for the validator.
#[derive(Debug, Clone)]
pub struct CodeTables {
    wgs: CodeTable,
    bisac: CodeTable,
}

static BUILTIN: Lazy<CodeTables> = Lazy::new(|| {
    CodeTables::from_json(
        include_str!("data/warengruppe_codes.json"),
        include_str!("data/bisac_codes.json"),
    )
    .expect("bundled code tables are valid JSON")
});

impl CodeTables {
    /// The tables bundled with the crate, parsed once per process.
    pub fn builtin() -> &'static CodeTables {
        &BUILTIN
    }

    /// Build tables from two JSON strings (WGS, BISAC).
    pub fn from_json(wgs_json: &str, bisac_json: &str) -> Result<CodeTables> {
        Ok(CodeTables {
            wgs: CodeTable::from_json(CodeScheme::Wgs, wgs_json)?,
            bisac: CodeTable::from_json(CodeScheme::Bisac, bisac_json)?,
        })
    }

    /// Load tables from two JSON files (WGS, BISAC).
    pub fn from_paths<P: AsRef<Path>>(wgs_path: P, bisac_path: P) -> Result<CodeTables> {
        Ok(CodeTables {
            wgs: CodeTable::from_path(CodeScheme::Wgs, wgs_path)?,
            bisac: CodeTable::from_path(CodeScheme::Bisac, bisac_path)?,
        })
    }

    pub fn wgs(&self) -> &CodeTable {
        &self.wgs
    }

    pub fn bisac(&self) -> &CodeTable {
        &self.bisac
    }

    /// The table for a scheme.
    pub fn table(&self, scheme: CodeScheme) -> &CodeTable {
        match scheme {
            CodeScheme::Wgs => &self.wgs,
            CodeScheme::Bisac => &self.bisac,
        }
    }
}

/// Age-range choices offered for children's/young-adult titles, mapping the
/// form label to the `AudienceRangeFrom` code.
pub static AGE_RANGES: phf::Map<&'static str, &'static str> = phf_map! {
    "0-3 Jahre" => "0",
    "3-5 Jahre" => "3",
    "5-8 Jahre" => "5",
    "8-12 Jahre" => "8",
    "ab 12 Jahre" => "12",
};

/// Title languages offered by the form, mapping the label to the ISO code
/// written into the `Language` element.
pub static LANGUAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "Deutsch" => "de",
    "Englisch" => "en",
    "Französisch" => "fr",
    "Spanisch" => "es",
};

/// Page format presets, mapping the format label to (height, width) in
/// millimetres.
pub static PAGE_FORMATS: phf::Map<&'static str, (u16, u16)> = phf_map! {
    "A5" => (210u16, 148u16),
    "A4" => (297u16, 210u16),
    "17x17" => (170u16, 170u16),
    "17x22" => (220u16, 170u16),
    "21x15" => (150u16, 210u16),
    "19x27" => (270u16, 190u16),
    "21x21" => (210u16, 210u16),
};

/// The fixed ladder of permitted e-book retail prices (EUR).
pub const EBOOK_PRICE_POINTS: &[&str] = &[
    "0.99", "1.49", "1.99", "2.49", "2.99", "3.49", "3.99", "4.49", "4.99", "5.49", "5.99", "6.49",
    "6.99", "7.49", "7.99", "8.49", "8.99", "9.49", "9.99", "10.99", "11.99", "12.99", "13.99",
    "14.99", "15.99", "16.99", "17.99", "18.99", "19.99", "20.99", "21.99", "22.99", "23.99",
    "24.99", "25.99", "26.99", "27.99", "28.99", "29.99", "30.99", "31.99", "32.99", "33.99",
    "34.99", "35.99", "36.99", "37.99", "38.99", "39.99", "40.99", "41.99", "42.99", "43.99",
    "44.99", "45.99", "46.99", "47.99", "48.99", "49.99", "52.99", "54.99", "57.99", "59.99",
    "62.99", "64.99", "67.99", "69.99", "72.99", "74.99", "77.99", "79.99", "82.99", "84.99",
    "87.99", "89.99", "92.99", "94.99", "97.99", "99.99", "104.99", "109.99", "114.99", "119.99",
    "124.99", "129.99", "134.99", "139.99", "144.99", "149.99", "154.99", "159.99", "164.99",
    "169.99", "174.99", "179.99", "184.99", "189.99", "194.99", "199.99", "204.99", "209.99",
    "214.99", "219.99", "229.99", "239.99", "249.99", "259.99", "269.99", "279.99", "289.99",
    "299.99", "349.99", "399.99", "449.99", "499.99", "549.99", "599.99", "649.99", "699.99",
];

/// Imprints the sender may publish under.
pub const IMPRINTS: &[&str] = &["Lucid Page Media", "Orbita Media GmbH"];

/// Known customer numbers of the sender, with the market they serve.
pub const COMPANY_NUMBERS: &[(&str, &str)] = &[
    ("40501700", "Spanien"),
    ("11026617", "Frankreich"),
    ("11022642", "Deutschland"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_load() {
        let tables = CodeTables::builtin();
        assert!(!tables.wgs().is_empty());
        assert!(!tables.bisac().is_empty());
        assert_eq!(
            tables.wgs().description("113"),
            Some("Belletristik/Krimis, Thriller, Spionage")
        );
        assert_eq!(
            tables.bisac().description("FIC000000"),
            Some("FICTION / General")
        );
        assert_eq!(tables.wgs().description("999"), None);
    }

    #[test]
    fn test_wgs_childrens_predicate_uses_description() {
        let tables = CodeTables::builtin();
        assert!(tables.wgs().marks_childrens_audience("210"));
        assert!(tables.wgs().marks_childrens_audience("214"));
        assert!(!tables.wgs().marks_childrens_audience("113"));
        // Unknown codes have no description and cannot fire the predicate.
        assert!(!tables.wgs().marks_childrens_audience("999"));
    }

    #[test]
    fn test_bisac_childrens_predicate_uses_code_prefix() {
        let tables = CodeTables::builtin();
        assert!(tables.bisac().marks_childrens_audience("JUV001000"));
        assert!(tables.bisac().marks_childrens_audience("YAF019000"));
        // The prefix decides even for codes missing from the table.
        assert!(tables.bisac().marks_childrens_audience("JUV999999"));
        assert!(!tables.bisac().marks_childrens_audience("JNF000000"));
        assert!(!tables.bisac().marks_childrens_audience("FIC000000"));
    }

    #[test]
    fn test_from_json_keeps_file_order() {
        let table = CodeTable::from_json(
            CodeScheme::Wgs,
            r#"{"930": "Sachbuch", "110": "Belletristik"}"#,
        )
        .unwrap();
        let codes: Vec<_> = table.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["930", "110"]);
    }

    #[test]
    fn test_from_json_rejects_non_string_descriptions() {
        assert!(CodeTable::from_json(CodeScheme::Bisac, r#"{"FIC000000": 1}"#).is_err());
    }

    #[test]
    fn test_fixed_enumerations() {
        assert_eq!(AGE_RANGES.get("8-12 Jahre"), Some(&"8"));
        assert_eq!(AGE_RANGES.len(), 5);
        assert_eq!(LANGUAGES.get("Deutsch"), Some(&"de"));
        assert_eq!(PAGE_FORMATS.get("A5"), Some(&(210, 148)));
        assert!(EBOOK_PRICE_POINTS.contains(&"9.99"));
        assert_eq!(EBOOK_PRICE_POINTS.len(), 119);
    }
}
