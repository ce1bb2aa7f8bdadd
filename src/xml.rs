//! XML serialization of validated mastering orders.
//!
//! Builds the `<BoD>` document for a validated [`OrderDocument`]:
//! a fixed element order per mode, optional elements omitted when their
//! value is empty, and attributes only on `Subject` and the e-book `EAN`.
//! Serialization is purely a function of the document: two serializations
//! of the same document are byte-identical. Output is pretty-printed UTF-8
//! with an XML declaration.

use std::io::Cursor;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Error, Result};
use crate::order::{EBookRecord, HeaderRecord, OrderDocument, OrderMode};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn xml_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Xml(err.to_string())
}

/// Serialize a validated order to the `<BoD>` document text.
pub fn serialize(doc: &OrderDocument) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;

    start(&mut writer, "BoD")?;
    write_header(&mut writer, doc.header())?;

    start(&mut writer, "MasteringOrder")?;
    start(&mut writer, "Product")?;
    text_element(&mut writer, "MasteringType", doc.mode().as_str())?;
    text_element(&mut writer, "EAN", doc.primary_ean())?;

    match doc.mode() {
        OrderMode::Upload => write_upload_product(&mut writer, doc)?,
        OrderMode::AddIntlDistribution => {
            for (currency, value) in international_prices(doc) {
                write_price(&mut writer, value, currency)?;
            }
        }
        OrderMode::AddEBook => {
            if let Some(ebook) = doc.ebook() {
                write_ebook_block(&mut writer, ebook)?;
            }
        }
    }

    end(&mut writer, "Product")?;
    end(&mut writer, "MasteringOrder")?;
    end(&mut writer, "BoD")?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| Error::Xml(format!("generated XML is not UTF-8: {e}")))
}

/// Serialize an order and write it to `path`.
pub fn write_to_file<P: AsRef<Path>>(doc: &OrderDocument, path: P) -> Result<()> {
    let xml = serialize(doc)?;
    log::debug!(
        "writing {} mastering order to {}",
        doc.mode(),
        path.as_ref().display()
    );
    std::fs::write(path, xml)?;
    Ok(())
}

/// The file name offered for the XML document:
/// `{primaryEAN}_MasteringOrder.xml`.
pub fn default_filename(doc: &OrderDocument) -> String {
    format!("{}_MasteringOrder.xml", doc.primary_ean())
}

fn write_header(writer: &mut XmlWriter, header: &HeaderRecord) -> Result<()> {
    start(writer, "Header")?;
    // FromPerson is the only one of these that can still be empty after
    // validation; empty values are omitted across the board.
    let fields = [
        ("FromCompany", header.from_company.as_str()),
        ("FromCompanyNumber", header.from_company_number.as_str()),
        ("SentDate", header.sent_date.as_str()),
        ("SentTime", header.sent_time.as_str()),
        ("FromPerson", header.from_person.as_str()),
        ("FromEmail", header.from_email.as_str()),
    ];
    for (name, value) in fields {
        opt_element(writer, name, value)?;
    }
    end(writer, "Header")
}

fn write_upload_product(writer: &mut XmlWriter, doc: &OrderDocument) -> Result<()> {
    let product = doc
        .product
        .as_ref()
        .ok_or_else(|| Error::Xml("upload order carries no product record".to_string()))?;

    for contributor in &doc.contributors {
        start(writer, "Contributor")?;
        text_element(writer, "ContributorRole", &contributor.role.xml_name())?;
        text_element(writer, "ContributorName", &contributor.display_name())?;
        opt_element(writer, "ContributorShortBio", &contributor.short_bio)?;
        end(writer, "Contributor")?;
    }

    opt_element(writer, "Title", &product.title)?;
    opt_element(writer, "SubTitle", &product.sub_title)?;
    opt_element(writer, "Series", &product.series)?;
    opt_element(writer, "PartNumber", &product.part_number)?;
    // Imprint comes from the header section and is always emitted.
    element_allow_empty(writer, "Imprint", &doc.header.imprint)?;
    opt_element(writer, "EditionNumber", &product.edition_number)?;
    opt_element(writer, "PublicationDate", &product.publication_date)?;
    opt_element(writer, "Blurb", &product.blurb)?;
    opt_element(writer, "Height", &product.height)?;
    opt_element(writer, "Width", &product.width)?;
    opt_element(writer, "Pages", &product.pages)?;
    opt_element(writer, "ColouredPages", &product.coloured_pages)?;
    opt_element(writer, "ColouredPagesPosition", &product.coloured_pages_position)?;
    opt_element(writer, "Quality", &product.quality)?;
    opt_element(writer, "Paper", &product.paper)?;
    opt_element(writer, "Binding", &product.binding)?;
    opt_element(writer, "CoverDuplex", &product.cover_duplex)?;
    opt_element(writer, "Finish", &product.finish)?;
    element_allow_empty(writer, "Language", &doc.language)?;

    for subject in doc.subjects() {
        let mut element = BytesStart::new("Subject");
        element.push_attribute(("Scheme", subject.scheme.as_str()));
        if let Some(age) = &subject.audience_range_from {
            element.push_attribute(("AudienceRangeFrom", age.as_str()));
        }
        writer.write_event(Event::Start(element)).map_err(xml_err)?;
        writer
            .write_event(Event::Text(BytesText::new(&subject.code)))
            .map_err(xml_err)?;
        writer
            .write_event(Event::End(BytesEnd::new("Subject")))
            .map_err(xml_err)?;
    }

    write_price(writer, &doc.pricing.eur, "EUR")?;
    if doc.pricing.international {
        text_element(writer, "InternationalDistribution", "Yes")?;
        for (currency, value) in international_prices(doc) {
            if !value.is_empty() {
                write_price(writer, value, currency)?;
            }
        }
    }

    if let Some(ebook) = doc.ebook() {
        write_ebook_block(writer, ebook)?;
    }
    Ok(())
}

fn international_prices(doc: &OrderDocument) -> [(&'static str, &str); 3] {
    [
        ("USD", doc.pricing.usd.as_str()),
        ("GBP", doc.pricing.gbp.as_str()),
        ("AUD", doc.pricing.aud.as_str()),
    ]
}

fn write_ebook_block(writer: &mut XmlWriter, ebook: &EBookRecord) -> Result<()> {
    start(writer, "EBook")?;
    let mut ean_element = BytesStart::new("EAN");
    ean_element.push_attribute(("EBookFileType", ebook.format.as_str()));
    writer
        .write_event(Event::Start(ean_element))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Text(BytesText::new(&ebook.ean)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("EAN")))
        .map_err(xml_err)?;
    element_allow_empty(writer, "Conversion", &ebook.conversion)?;
    text_element(writer, "EBookFileType", ebook.format.as_str())?;
    write_price(writer, &ebook.price, "EUR")?;
    end(writer, "EBook")
}

fn write_price(writer: &mut XmlWriter, value: &str, currency: &str) -> Result<()> {
    start(writer, "Price")?;
    text_element(writer, "PriceValue", value)?;
    text_element(writer, "PriceCurrency", currency)?;
    end(writer, "Price")
}

fn start(writer: &mut XmlWriter, name: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)
}

fn end(writer: &mut XmlWriter, name: &str) -> Result<()> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_err)
}

fn text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    start(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    end(writer, name)
}

/// Element emitted only when its value is non-empty.
fn opt_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    text_element(writer, name, text)
}

/// Element emitted unconditionally, self-closing when the value is empty.
fn element_allow_empty(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(xml_err)
    } else {
        text_element(writer, name, text)
    }
}
