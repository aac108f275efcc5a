use criterion::{Criterion, black_box, criterion_group, criterion_main};

use noun_scrape::{core::Document, scrape};

fn synthetic_page(rows: usize) -> String {
    let mut html = String::from("<!DOCTYPE html><html><body><table>");
    html.push_str("<tr><td><b>Noun</b></td><td><b>Example</b></td></tr>");
    for i in 0..rows {
        // every tenth word repeats, like the real list's inflected duplicates
        let word = if i % 10 == 0 { 0 } else { i };
        html.push_str(&format!(
            r#"<tr><td>{i}</td><td><a href="/how-to-use/w{word}.aspx">w{word}</a></td><td>Example sentence {i}.</td></tr>"#
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(1500);

    c.bench_function("parse_document", |b| {
        b.iter(|| black_box(Document::parse(black_box(&page))))
    });

    let doc = Document::parse(&page);
    c.bench_function("extract_nouns", |b| {
        b.iter(|| {
            let nouns = scrape::extract_nouns(black_box(&doc));
            black_box(nouns.len())
        })
    });

    c.bench_function("nouns_from_html", |b| {
        b.iter(|| black_box(scrape::nouns_from_html(black_box(&page)).len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
