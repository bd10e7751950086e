use criterion::{criterion_group, criterion_main, Criterion};
use webscour_core::tokenizer::{page_terms, tokenize};

fn sample_page() -> String {
    let mut html = String::from("<html><head><title>Bench</title></head><body>");
    for i in 0..500 {
        html.push_str(&format!("<p>Paragraph {i} about crawling <a href=\"/p/{i}\">link {i}</a> and indexing.</p>"));
    }
    html.push_str("</body></html>");
    html
}

fn bench_tokenize(c: &mut Criterion) {
    let html = sample_page();
    let text = webscour_core::html::extract_text(&html);
    c.bench_function("tokenize_text", |b| b.iter(|| tokenize(&text)));
    c.bench_function("page_terms_html", |b| b.iter(|| page_terms(&html)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
