//! Multi-page PDF extraction from disk.
#![cfg(feature = "pdf")]

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use resume_extractors::{extract_file, extract_text, DocumentFormat};
use tempfile::TempDir;

/// A PDF with one line of Courier text per page.
fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let kids: Vec<Object> = pages
        .iter()
        .map(|text| {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            Object::Reference(doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            }))
        })
        .collect();

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn write_pdf(dir: &Path, pages: &[&str]) -> (PathBuf, Vec<u8>) {
    let bytes = build_pdf(pages);
    let path = dir.join("resume.pdf");
    std::fs::write(&path, &bytes).unwrap();
    (path, bytes)
}

#[tokio::test]
async fn test_pages_concatenate_in_order_without_separator() {
    let dir = TempDir::new().unwrap();
    let (path, bytes) = write_pdf(dir.path(), &["PageOne", "PageTwo"]);

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).unwrap();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("PageOne"));
    assert!(pages[1].contains("PageTwo"));

    let text = extract_text(&path).await.unwrap();
    assert_eq!(text, pages.concat());
    assert!(text.find("PageOne").unwrap() < text.find("PageTwo").unwrap());
}

#[tokio::test]
async fn test_pdf_extraction_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let (path, _) = write_pdf(dir.path(), &["Jane Doe", "Acme Corp"]);

    let first = extract_text(&path).await.unwrap();
    let second = extract_text(&path).await.unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[tokio::test]
async fn test_pdf_page_count_is_recorded() {
    let dir = TempDir::new().unwrap();
    let (path, _) = write_pdf(dir.path(), &["one", "two", "three"]);

    let content = extract_file(&path).await.unwrap();
    assert_eq!(content.format, DocumentFormat::Pdf);
    assert_eq!(content.structure.as_ref().unwrap().page_count, Some(3));
    assert!(!content.is_empty());
}
