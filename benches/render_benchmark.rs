//! Benchmarks for rtfhtml rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic document trees of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rtfhtml::model::{Alignment, Color, Document, Font, FontFamily, Paragraph, Span, Style};
use rtfhtml::RenderOptions;

/// Creates a document with `paragraph_count` paragraphs of mixed styling.
fn create_test_document(paragraph_count: usize) -> Document {
    let mut doc = Document::new();
    doc.style = Style::new()
        .with_font(Font::new("Times New Roman", FontFamily::Roman))
        .with_font_size(24);

    for i in 0..paragraph_count {
        let mut style = Style::new();
        if i % 5 == 0 {
            style = style.with_align(Alignment::Center).with_indent(720);
        }
        let mut para = Paragraph::new().styled(style);

        para.add_span(Span::new(format!("Paragraph {} opens with plain text, ", i)));
        para.add_span(
            Span::new("then turns bold")
                .styled(Style::new().with_bold(true).with_italic(i % 2 == 0)),
        );
        para.add_span(Span::new(", switches color").styled(
            Style::new().with_foreground(Color::rgb((i % 256) as u8, 64, 128)),
        ));
        para.add_span(Span::new(" and font.").styled(
            Style::new().with_font(Font::new("Arial-Bold", FontFamily::Swiss)),
        ));
        if i % 7 == 0 {
            para.add_metadata("fldinst", "HYPERLINK \"http://example.com\"");
        }

        doc.add_paragraph(para);
    }

    doc
}

/// Benchmark fragment rendering at several document sizes.
fn bench_render_fragment(c: &mut Criterion) {
    let options = RenderOptions::new().without_template();
    let mut group = c.benchmark_group("render_fragment");

    for size in [10, 100, 1000] {
        let doc = create_test_document(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| rtfhtml::to_html(black_box(doc), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark full-document rendering with the default template.
fn bench_render_document(c: &mut Criterion) {
    let doc = create_test_document(100);
    let options = RenderOptions::default();

    c.bench_function("render_document_100", |b| {
        b.iter(|| rtfhtml::to_html(black_box(&doc), &options).unwrap());
    });
}

/// Benchmark raw-markup mode, which adds regex post-processing.
fn bench_render_raw(c: &mut Criterion) {
    let doc = create_test_document(100);
    let options = RenderOptions::new()
        .without_template()
        .with_raw_html(true)
        .with_ignore_nodes(Vec::<String>::new());

    c.bench_function("render_raw_100", |b| {
        b.iter(|| rtfhtml::to_html(black_box(&doc), &options).unwrap());
    });
}

/// Benchmark parsing a JSON document tree.
fn bench_parse_json(c: &mut Criterion) {
    let doc = create_test_document(100);
    let json = rtfhtml::to_json(&doc, rtfhtml::JsonFormat::Compact).unwrap();

    c.bench_function("parse_json_100", |b| {
        b.iter(|| rtfhtml::parse_str(black_box(&json)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_render_fragment,
    bench_render_document,
    bench_render_raw,
    bench_parse_json
);
criterion_main!(benches);
