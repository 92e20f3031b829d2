//! Integration tests for the parse/render boundary and the file entry points.

use std::io::Write;

use tempfile::NamedTempFile;

use rtfhtml::{
    convert_file, ConvertOptions, Converter, Document, DocumentParser, Error, OutputFormat,
    ParseOptions, RenderOptions, RtfHtml,
};

const SAMPLE: &str = r#"{
    "marginLeft": 1440,
    "style": {"font": {"name": "Arial", "family": "swiss"}, "fontSize": 22},
    "content": [
        {"ignorable": true, "content": [
            {"type": "stylesheet", "ignorable": true, "value": "Normal;"}
        ]},
        {"content": [
            {"value": "Hello "},
            {"value": "world", "style": {"bold": true}}
        ]},
        {"style": {"align": "right"}, "content": [{"value": "Signed"}]}
    ]
}"#;

fn write_sample(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write sample");
    file
}

/// Stands in for a tokenizer that rejects its input.
struct RejectingParser;

impl DocumentParser for RejectingParser {
    fn name(&self) -> &str {
        "rejecting"
    }

    fn parse_str(&self, _input: &str, _options: &ParseOptions) -> rtfhtml::Result<Document> {
        Err(Error::Parse("expected '{\\rtf'".into()))
    }
}

#[test]
fn test_convert_file_fragment() {
    let file = write_sample(SAMPLE);
    let html = convert_file(file.path(), &RenderOptions::new().without_template()).unwrap();

    assert_eq!(
        html,
        "<p>Hello <strong>world</strong></p>\n<p style=\"text-align: right;\">Signed</p>"
    );
}

#[test]
fn test_convert_file_uses_document_defaults_in_template() {
    let file = write_sample(SAMPLE);
    let html = convert_file(file.path(), &RenderOptions::default()).unwrap();

    assert!(html.contains("margin-left: 72pt;"));
    assert!(html.contains("margin-right: 90pt;"));
    assert!(html.contains("font-size: 11pt;"));
    assert!(html.contains("<body>\n    <p>Hello"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_file(dir.path().join("absent.json"), &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_parse_error_is_not_wrapped() {
    let converter = Converter::new(RejectingParser);
    let err = converter
        .convert_bytes(b"plain text", &ConvertOptions::default())
        .unwrap_err();

    assert!(err.is_parse_error());
    assert_eq!(err.to_string(), "RTF parsing error: expected '{\\rtf'");
}

#[test]
fn test_invalid_utf8_bytes_is_parse_error() {
    let err = Converter::json()
        .convert_bytes(&[0xff, 0xfe, 0x00], &ConvertOptions::default())
        .unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn test_render_failure_is_render_error() {
    let options = ConvertOptions::new()
        .with_render_options(RenderOptions::new().with_para_tag("p style"));
    let err = Converter::json().convert_str(SAMPLE, &options).unwrap_err();
    assert!(matches!(err, Error::Render(_)));
}

#[test]
fn test_convert_reader_with_stats() {
    let mut reader = SAMPLE.as_bytes();
    let options = ConvertOptions::new()
        .with_stats(true)
        .with_render_options(RenderOptions::new().without_template());

    let result = Converter::json().convert_reader(&mut reader, &options).unwrap();
    let stats = result.stats.expect("stats requested");

    assert_eq!(stats.paragraph_count, 2);
    assert_eq!(stats.span_count, 3);
    assert_eq!(stats.styled_span_count, 1);
    assert_eq!(stats.skipped_count, 1);
    assert!(!stats.templated);
}

#[test]
fn test_raw_mode_surfaces_stylesheet_only_when_not_ignored() {
    let options = ConvertOptions::new().with_render_options(
        RenderOptions::new()
            .without_template()
            .with_raw_html(true)
            .with_ignore_nodes(Vec::<String>::new()),
    );
    let html = Converter::json().convert_str(SAMPLE, &options).unwrap();
    assert!(html.content.starts_with("Normal;\n<p>"));

    let options = ConvertOptions::new().with_render_options(
        RenderOptions::new().without_template().with_raw_html(true),
    );
    let html = Converter::json().convert_str(SAMPLE, &options).unwrap();
    assert!(html.content.starts_with("<p>Hello"));
}

#[test]
fn test_text_output() {
    let file = write_sample(SAMPLE);
    let result = Converter::json()
        .convert_file(
            file.path(),
            &ConvertOptions::new().with_format(OutputFormat::Text),
        )
        .unwrap();
    assert_eq!(result.content, "Hello world\nSigned");
    assert_eq!(result.mime_type, "text/plain");
}

#[test]
fn test_lenient_builder_skips_bad_blocks() {
    let input = r#"{"content":[{"content":42},{"content":[{"value":"kept"}]}]}"#;

    assert!(RtfHtml::new().parse_str(input).is_err());

    let html = RtfHtml::new()
        .lenient()
        .without_template()
        .parse_str(input)
        .unwrap()
        .to_html()
        .unwrap();
    assert_eq!(html, "<p>kept</p>");
}
