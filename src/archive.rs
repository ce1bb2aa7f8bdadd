//! ZIP packaging of completed mastering orders.
//!
//! Bundles the produced XML document with the user-selected asset files
//! (manuscript PDF, cover PDF, e-book file, e-book cover JPEG; the subset
//! depends on the mode) into a ZIP archive whose entries follow the fixed
//! naming convention of the production pipeline. Assets are validated
//! before the first byte is written, and the archive is built in a
//! temporary file that is renamed into place only on success, so a failed
//! build never leaves a partial archive behind.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::order::{EBookRecord, OrderDocument, OrderMode};

/// Archive construction failures.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Manuscript or cover PDF not supplied for an upload.
    #[error("Bitte Manuskript und Cover hochladen.")]
    MissingPrintAssets,

    /// E-book file or e-book cover not supplied while the e-book feature
    /// is active.
    #[error("Bitte E-Book Datei und Cover hochladen.")]
    MissingEBookAssets,

    /// The supplied e-book file's extension disagrees with the declared
    /// format.
    #[error("Bitte eine {expected}-Datei als E-Book hochladen.")]
    EBookFormatMismatch { expected: &'static str },

    /// The mode produces no archive (AddIntlDistribution is XML-only).
    #[error("Für diesen MasteringType wird kein Archiv erstellt.")]
    UnsupportedMode,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(String),
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(err: zip::result::ZipError) -> Self {
        ArchiveError::Zip(err.to_string())
    }
}

/// The asset files the user selected for packaging. Which of them are
/// required depends on the mode and on whether the e-book feature is
/// active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetSet {
    /// Manuscript (book block) PDF.
    pub manuscript: Option<PathBuf>,
    /// Cover PDF.
    pub cover: Option<PathBuf>,
    /// E-book file (ePub or PDF, per the declared format).
    pub ebook_file: Option<PathBuf>,
    /// E-book cover JPEG.
    pub ebook_cover: Option<PathBuf>,
}

/// One planned archive entry: name in the archive, source on disk.
struct Entry {
    name: String,
    source: PathBuf,
}

/// Build the order's ZIP archive at `zip_path`.
///
/// `xml_path` is the already-written XML document; it is copied into the
/// archive under its conventional entry name. The operation rejects before
/// writing anything when a required asset is missing or the e-book file's
/// extension disagrees with the declared format.
pub fn build(
    doc: &OrderDocument,
    xml_path: &Path,
    assets: &AssetSet,
    zip_path: &Path,
) -> Result<(), ArchiveError> {
    let entries = plan_entries(doc, xml_path, assets)?;
    log::debug!(
        "building {} archive at {} ({} entries)",
        doc.mode(),
        zip_path.display(),
        entries.len()
    );

    let dir = zip_path.parent().filter(|p| !p.as_os_str().is_empty());
    let tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;
    {
        let mut zip = ZipWriter::new(tmp.as_file());
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        for entry in &entries {
            zip.start_file(entry.name.as_str(), options)?;
            let mut source = File::open(&entry.source)?;
            io::copy(&mut source, &mut zip)?;
        }
        zip.finish()?;
    }
    tmp.persist(zip_path).map_err(|e| ArchiveError::Io(e.error))?;
    Ok(())
}

/// The file name offered for the archive:
/// `{primaryEAN}_MasteringOrder.zip`.
pub fn default_filename(doc: &OrderDocument) -> String {
    format!("{}_MasteringOrder.zip", doc.primary_ean())
}

fn plan_entries(
    doc: &OrderDocument,
    xml_path: &Path,
    assets: &AssetSet,
) -> Result<Vec<Entry>, ArchiveError> {
    match doc.mode() {
        OrderMode::Upload => {
            let (Some(manuscript), Some(cover)) = (&assets.manuscript, &assets.cover) else {
                return Err(ArchiveError::MissingPrintAssets);
            };
            let ean = doc.primary_ean();
            let part = doc
                .product
                .as_ref()
                .map(|p| p.part_number.as_str())
                .unwrap_or("");
            let suffix = if part.is_empty() {
                String::new()
            } else {
                format!("_{part}")
            };

            let mut entries = vec![
                Entry {
                    name: format!("{ean}{suffix}_Bookblock.pdf"),
                    source: manuscript.clone(),
                },
                Entry {
                    name: format!("{ean}_Cover.pdf"),
                    source: cover.clone(),
                },
                Entry {
                    name: format!("{ean}_MasteringOrder.xml"),
                    source: xml_path.to_path_buf(),
                },
            ];
            if let Some(ebook) = doc.ebook() {
                entries.extend(plan_ebook_entries(ebook, assets)?);
            }
            Ok(entries)
        }
        OrderMode::AddEBook => {
            let ebook = doc.ebook().ok_or(ArchiveError::MissingEBookAssets)?;
            let mut entries = vec![Entry {
                name: format!("{}_MasteringOrder.xml", doc.primary_ean()),
                source: xml_path.to_path_buf(),
            }];
            entries.extend(plan_ebook_entries(ebook, assets)?);
            Ok(entries)
        }
        OrderMode::AddIntlDistribution => Err(ArchiveError::UnsupportedMode),
    }
}

fn plan_ebook_entries(ebook: &EBookRecord, assets: &AssetSet) -> Result<Vec<Entry>, ArchiveError> {
    let (Some(file), Some(cover)) = (&assets.ebook_file, &assets.ebook_cover) else {
        return Err(ArchiveError::MissingEBookAssets);
    };
    check_ebook_extension(ebook, file)?;
    let ext = ebook.format.file_extension();
    Ok(vec![
        Entry {
            name: format!("E-Book-{}.{ext}", ebook.ean),
            source: file.clone(),
        },
        Entry {
            name: format!("E-Book-{}.jpg", ebook.ean),
            source: cover.clone(),
        },
    ])
}

fn check_ebook_extension(ebook: &EBookRecord, path: &Path) -> Result<(), ArchiveError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != ebook.format.file_extension() {
        return Err(ArchiveError::EBookFormatMismatch {
            expected: ebook.format.display_name(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CodeTables;
    use crate::order::{
        ClassificationSelection, ContributorRecord, ContributorRole, EBookFormat, HeaderRecord,
        OrderForm, PricingRecord, ProductRecord,
    };
    use crate::validate::validate;
    use std::fs;

    fn upload_form() -> OrderForm {
        OrderForm {
            header: HeaderRecord {
                from_company: "Orbita Media GmbH".into(),
                from_company_number: "40501700".into(),
                from_email: "kontakt@orbita-media.de".into(),
                sent_date: "20250812".into(),
                sent_time: "14:30".into(),
                imprint: "Lucid Page Media".into(),
                ..Default::default()
            },
            product: Some(ProductRecord {
                ean: "9783000000001".into(),
                title: "Der lange Weg".into(),
                publication_date: "20250901".into(),
                blurb: "Ein Roman.".into(),
                height: "210".into(),
                width: "148".into(),
                pages: "120".into(),
                coloured_pages: "0".into(),
                quality: "Standard".into(),
                paper: "white".into(),
                binding: "PB".into(),
                cover_duplex: "No".into(),
                finish: "matt".into(),
                ..Default::default()
            }),
            contributors: vec![ContributorRecord {
                role: ContributorRole::Author,
                last_name: "Lindgren".into(),
                first_name: "Astrid".into(),
                ..Default::default()
            }],
            classification: Some(ClassificationSelection {
                wgs: vec!["110".into()],
                language: "de".into(),
                ..Default::default()
            }),
            pricing: PricingRecord {
                eur: "14.99".into(),
                international: false,
                ..Default::default()
            },
            ebook: None,
        }
    }

    fn upload_doc(form: &OrderForm) -> OrderDocument {
        validate(OrderMode::Upload, form, CodeTables::builtin()).unwrap()
    }

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"content").unwrap();
        path
    }

    fn entry_names(zip_path: &Path) -> Vec<String> {
        let archive = zip::ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
        archive.file_names().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_upload_archive_entries() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetSet {
            manuscript: Some(touch(dir.path(), "manuscript.pdf")),
            cover: Some(touch(dir.path(), "cover.pdf")),
            ..Default::default()
        };
        let xml_path = touch(dir.path(), "order.xml");
        let zip_path = dir.path().join("out.zip");

        build(&upload_doc(&upload_form()), &xml_path, &assets, &zip_path).unwrap();
        assert_eq!(
            entry_names(&zip_path),
            [
                "9783000000001_Bookblock.pdf",
                "9783000000001_Cover.pdf",
                "9783000000001_MasteringOrder.xml",
            ]
        );
    }

    #[test]
    fn test_part_number_lands_in_bookblock_name_only() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetSet {
            manuscript: Some(touch(dir.path(), "manuscript.pdf")),
            cover: Some(touch(dir.path(), "cover.pdf")),
            ..Default::default()
        };
        let xml_path = touch(dir.path(), "order.xml");
        let zip_path = dir.path().join("out.zip");

        let mut form = upload_form();
        form.product.as_mut().unwrap().part_number = "2".into();
        build(&upload_doc(&form), &xml_path, &assets, &zip_path).unwrap();
        assert_eq!(
            entry_names(&zip_path),
            [
                "9783000000001_2_Bookblock.pdf",
                "9783000000001_Cover.pdf",
                "9783000000001_MasteringOrder.xml",
            ]
        );
    }

    #[test]
    fn test_upload_with_ebook_appends_ebook_entries() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetSet {
            manuscript: Some(touch(dir.path(), "manuscript.pdf")),
            cover: Some(touch(dir.path(), "cover.pdf")),
            ebook_file: Some(touch(dir.path(), "book.epub")),
            ebook_cover: Some(touch(dir.path(), "ebook-cover.jpg")),
        };
        let xml_path = touch(dir.path(), "order.xml");
        let zip_path = dir.path().join("out.zip");

        let mut form = upload_form();
        form.ebook = Some(crate::order::EBookRecord {
            enabled: true,
            ean: "9783000000002".into(),
            format: EBookFormat::EPub,
            price: "9.99".into(),
            ..Default::default()
        });
        build(&upload_doc(&form), &xml_path, &assets, &zip_path).unwrap();
        assert_eq!(
            entry_names(&zip_path),
            [
                "9783000000001_Bookblock.pdf",
                "9783000000001_Cover.pdf",
                "9783000000001_MasteringOrder.xml",
                "E-Book-9783000000002.epub",
                "E-Book-9783000000002.jpg",
            ]
        );
    }

    #[test]
    fn test_add_ebook_archive_entries() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetSet {
            ebook_file: Some(touch(dir.path(), "book.pdf")),
            ebook_cover: Some(touch(dir.path(), "ebook-cover.jpg")),
            ..Default::default()
        };
        let xml_path = touch(dir.path(), "order.xml");
        let zip_path = dir.path().join("out.zip");

        let form = OrderForm {
            header: upload_form().header,
            ebook: Some(crate::order::EBookRecord {
                enabled: true,
                printed_ean: "9783000000001".into(),
                ean: "9783000000002".into(),
                format: EBookFormat::EPdf,
                price: "9.99".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let doc = validate(OrderMode::AddEBook, &form, CodeTables::builtin()).unwrap();
        build(&doc, &xml_path, &assets, &zip_path).unwrap();
        assert_eq!(
            entry_names(&zip_path),
            [
                "9783000000001_MasteringOrder.xml",
                "E-Book-9783000000002.pdf",
                "E-Book-9783000000002.jpg",
            ]
        );
        assert_eq!(default_filename(&doc), "9783000000001_MasteringOrder.zip");
    }

    #[test]
    fn test_missing_assets_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let xml_path = touch(dir.path(), "order.xml");
        let zip_path = dir.path().join("out.zip");

        let err = build(
            &upload_doc(&upload_form()),
            &xml_path,
            &AssetSet::default(),
            &zip_path,
        )
        .unwrap_err();
        assert!(matches!(err, ArchiveError::MissingPrintAssets));
        assert!(!zip_path.exists());

        let mut form = upload_form();
        form.ebook = Some(crate::order::EBookRecord {
            enabled: true,
            ean: "9783000000002".into(),
            price: "9.99".into(),
            ..Default::default()
        });
        let assets = AssetSet {
            manuscript: Some(touch(dir.path(), "manuscript.pdf")),
            cover: Some(touch(dir.path(), "cover.pdf")),
            ..Default::default()
        };
        let err = build(&upload_doc(&form), &xml_path, &assets, &zip_path).unwrap_err();
        assert!(matches!(err, ArchiveError::MissingEBookAssets));
        assert!(!zip_path.exists());
    }

    #[test]
    fn test_ebook_extension_must_match_declared_format() {
        let dir = tempfile::tempdir().unwrap();
        let xml_path = touch(dir.path(), "order.xml");
        let zip_path = dir.path().join("out.zip");
        let assets = AssetSet {
            manuscript: Some(touch(dir.path(), "manuscript.pdf")),
            cover: Some(touch(dir.path(), "cover.pdf")),
            // Declared ePub, supplied PDF.
            ebook_file: Some(touch(dir.path(), "book.pdf")),
            ebook_cover: Some(touch(dir.path(), "ebook-cover.jpg")),
        };

        let mut form = upload_form();
        form.ebook = Some(crate::order::EBookRecord {
            enabled: true,
            ean: "9783000000002".into(),
            format: EBookFormat::EPub,
            price: "9.99".into(),
            ..Default::default()
        });
        let err = build(&upload_doc(&form), &xml_path, &assets, &zip_path).unwrap_err();
        assert!(matches!(
            err,
            ArchiveError::EBookFormatMismatch { expected: "EPUB" }
        ));
        assert!(!zip_path.exists());
    }

    #[test]
    fn test_intl_distribution_has_no_archive() {
        let dir = tempfile::tempdir().unwrap();
        let xml_path = touch(dir.path(), "order.xml");
        let form = OrderForm {
            header: upload_form().header,
            pricing: PricingRecord {
                international_ean: "9783000000001".into(),
                usd: "19.99".into(),
                gbp: "15.99".into(),
                aud: "33.00".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let doc = validate(OrderMode::AddIntlDistribution, &form, CodeTables::builtin()).unwrap();
        let err = build(
            &doc,
            &xml_path,
            &AssetSet::default(),
            &dir.path().join("out.zip"),
        )
        .unwrap_err();
        assert!(matches!(err, ArchiveError::UnsupportedMode));
    }

    #[test]
    fn test_failed_copy_leaves_no_archive_behind() {
        let dir = tempfile::tempdir().unwrap();
        let xml_path = touch(dir.path(), "order.xml");
        let zip_path = dir.path().join("out.zip");
        let assets = AssetSet {
            manuscript: Some(touch(dir.path(), "manuscript.pdf")),
            // Supplied but never created on disk.
            cover: Some(dir.path().join("missing-cover.pdf")),
            ..Default::default()
        };

        let err = build(&upload_doc(&upload_form()), &xml_path, &assets, &zip_path).unwrap_err();
        assert!(matches!(err, ArchiveError::Io(_)));
        assert!(!zip_path.exists());
    }

    #[test]
    fn test_archive_round_trips_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let manuscript = dir.path().join("manuscript.pdf");
        fs::write(&manuscript, b"%PDF-1.7 book block").unwrap();
        let assets = AssetSet {
            manuscript: Some(manuscript),
            cover: Some(touch(dir.path(), "cover.pdf")),
            ..Default::default()
        };
        let xml_path = touch(dir.path(), "order.xml");
        let zip_path = dir.path().join("out.zip");
        build(&upload_doc(&upload_form()), &xml_path, &assets, &zip_path).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let mut entry = archive.by_name("9783000000001_Bookblock.pdf").unwrap();
        let mut content = Vec::new();
        io::Read::read_to_end(&mut entry, &mut content).unwrap();
        assert_eq!(content, b"%PDF-1.7 book block");
    }
}
