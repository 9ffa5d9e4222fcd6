use scriba::application::ports::{FileLoader, FileLoaderError};
use scriba::domain::{ContentType, Document};
use scriba::infrastructure::text_processing::DocxAdapter;

use crate::helpers::{docx_paragraph, docx_with_body, zip_entries};

fn docx_document() -> Document {
    Document::new("essay.docx".to_string(), ContentType::Docx, 0)
}

async fn extract(body_xml: &str) -> String {
    let docx = docx_with_body(body_xml);
    DocxAdapter
        .extract_text(&docx, &docx_document())
        .await
        .unwrap()
}

#[tokio::test]
async fn given_paragraphs_when_extracting_then_joins_them_in_order() {
    let body = format!(
        "{}{}{}",
        docx_paragraph("First"),
        docx_paragraph("Second"),
        docx_paragraph("Third")
    );

    assert_eq!(extract(&body).await, "First\nSecond\nThird\n");
}

#[tokio::test]
async fn given_paragraph_split_into_runs_when_extracting_then_concatenates_runs() {
    let body = "<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Bold</w:t></w:r>\
<w:r><w:t xml:space=\"preserve\"> and plain</w:t></w:r></w:p>";

    assert_eq!(extract(body).await, "Bold and plain\n");
}

#[tokio::test]
async fn given_tab_and_break_when_extracting_then_maps_to_whitespace() {
    let body = "<w:p><w:r><w:t>Term</w:t><w:tab/><w:t>Definition</w:t><w:br/><w:t>More</w:t></w:r></w:p>";

    assert_eq!(extract(body).await, "Term\tDefinition\nMore\n");
}

#[tokio::test]
async fn given_table_when_extracting_then_skips_cell_paragraphs() {
    let body = format!(
        "{}<w:tbl><w:tr><w:tc>{}</w:tc></w:tr></w:tbl>{}",
        docx_paragraph("Before"),
        docx_paragraph("Cell text"),
        docx_paragraph("After")
    );

    assert_eq!(extract(&body).await, "Before\nAfter\n");
}

#[tokio::test]
async fn given_empty_paragraph_when_extracting_then_keeps_blank_line() {
    let body = format!("{}<w:p/>{}", docx_paragraph("One"), docx_paragraph("Two"));

    assert_eq!(extract(&body).await, "One\n\nTwo\n");
}

#[tokio::test]
async fn given_escaped_entities_when_extracting_then_unescapes_them() {
    assert_eq!(
        extract(&docx_paragraph("R&amp;D &lt;2024&gt;")).await,
        "R&D <2024>\n"
    );
}

#[tokio::test]
async fn given_non_zip_bytes_when_extracting_then_returns_extraction_failed() {
    let result = DocxAdapter
        .extract_text(b"plain bytes", &docx_document())
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_zip_without_document_part_when_extracting_then_returns_extraction_failed() {
    let archive = zip_entries(&[("word/styles.xml", "<w:styles/>")]);

    let result = DocxAdapter.extract_text(&archive, &docx_document()).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_pdf_document_when_extracting_then_returns_unsupported() {
    let doc = Document::new("a.pdf".to_string(), ContentType::Pdf, 0);

    let result = DocxAdapter.extract_text(b"", &doc).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
