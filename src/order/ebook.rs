//! E-book variant record and file formats.

/// Supported e-book file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EBookFormat {
    #[default]
    EPub,
    EPdf,
}

impl EBookFormat {
    /// All formats, in the order the format selector offers them.
    pub const ALL: [EBookFormat; 2] = [EBookFormat::EPub, EBookFormat::EPdf];

    /// The format name as written into `EBookFileType` (element and attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            EBookFormat::EPub => "ePub",
            EBookFormat::EPdf => "ePDF",
        }
    }

    /// The file extension expected on a supplied e-book asset and used for
    /// the archive entry name. An ePDF is a plain PDF file on disk.
    pub fn file_extension(&self) -> &'static str {
        match self {
            EBookFormat::EPub => "epub",
            EBookFormat::EPdf => "pdf",
        }
    }

    /// Upper-cased name used when telling the user which file type to supply.
    pub fn display_name(&self) -> &'static str {
        match self {
            EBookFormat::EPub => "EPUB",
            EBookFormat::EPdf => "PDF",
        }
    }

    /// Parse a format from its selector name.
    pub fn parse(s: &str) -> Option<EBookFormat> {
        EBookFormat::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

impl std::fmt::Display for EBookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The e-book variant of a title.
///
/// In `Upload` mode the record is only consulted when `enabled` is set (the
/// optional e-book feature); in `AddEBook` mode it is the heart of the order
/// and `printed_ean` identifies the existing printed title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EBookRecord {
    /// Whether the e-book feature is active for this order.
    pub enabled: bool,
    /// EAN of the printed title the e-book belongs to (AddEBook mode).
    pub printed_ean: String,
    /// EAN of the e-book edition. Must differ from the printed/product EAN.
    pub ean: String,
    pub format: EBookFormat,
    /// Conversion flag carried verbatim into the XML. The order form offers
    /// only "No".
    pub conversion: String,
    /// Retail price in EUR.
    pub price: String,
}

impl Default for EBookRecord {
    fn default() -> Self {
        Self {
            enabled: false,
            printed_ean: String::new(),
            ean: String::new(),
            format: EBookFormat::default(),
            conversion: "No".to_string(),
            price: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(EBookFormat::EPub.as_str(), "ePub");
        assert_eq!(EBookFormat::EPdf.as_str(), "ePDF");
        assert_eq!(EBookFormat::parse("ePDF"), Some(EBookFormat::EPdf));
        assert_eq!(EBookFormat::parse("epdf"), None);
    }

    #[test]
    fn test_epdf_maps_to_pdf_extension() {
        assert_eq!(EBookFormat::EPdf.file_extension(), "pdf");
        assert_eq!(EBookFormat::EPub.file_extension(), "epub");
    }

    #[test]
    fn test_default_conversion_is_no() {
        assert_eq!(EBookRecord::default().conversion, "No");
    }
}
