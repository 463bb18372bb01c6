// Shared PDF fixtures for the integration and CLI tests.
//
// PDFs are generated on the fly with lopdf so the tests need no fixtures on
// disk. Each generated page draws one text object per line, which lopdf's
// text extraction turns back into `\n`-separated lines.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{
    dictionary, Document, EncryptionState, EncryptionVersion, Object, ObjectId, Permissions,
    StringFormat, Stream,
};
use std::fs;
use std::path::Path;

/// Build a document with one page per entry of `pages`; each page shows its lines.
pub fn build_document(pages: &[&[&str]]) -> Document {
    let mut doc = Document::with_version("1.5");
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(b"frtsummary-id-01".to_vec(), StringFormat::Literal),
            Object::String(b"frtsummary-id-02".to_vec(), StringFormat::Literal),
        ]),
    );
    let pages_id: ObjectId = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 750 - 20 * i as i64;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![72.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            lopdf::Dictionary::new(),
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids.clone(),
            "Count" => kids.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

pub fn save(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

pub fn make_pdf(pages: &[&[&str]]) -> Vec<u8> {
    save(build_document(pages))
}

/// Same as [`make_pdf`] but RC4-encrypted with the given user password.
pub fn make_encrypted_pdf(pages: &[&[&str]], user_password: &str) -> Vec<u8> {
    let mut doc = build_document(pages);
    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "frt-owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).expect("build encryption state");
    doc.encrypt(&state).expect("encrypt test PDF");
    save(doc)
}

pub fn write_pdf(path: &Path, pages: &[&[&str]]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, make_pdf(pages)).unwrap();
}

pub const COLT: &[&str] = &[
    "Firearm Reference No.: 12345",
    "Make: Colt",
    "Model: 1911",
    "Manufacturer: Colt Manufacturing",
    "Type: Pistol",
    "Action: Semi-Automatic",
    "Country of Manufacturer: United States",
    "Legal Classification: Restricted",
];

pub const RUGER: &[&str] = &[
    "Firearm Reference No.: 67890",
    "Make: Ruger",
    "Model: 10/22",
    "Type: Rifle",
    "Legal Classification: Non-Restricted",
];
