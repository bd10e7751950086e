use webscour_core::tokenizer::{page_terms, tokenize};

#[test]
fn it_lowercases_and_dedups() {
    let toks = tokenize("Running RUNNING running Runners");
    assert_eq!(toks.len(), 2);
    assert!(toks.contains("running"));
    assert!(toks.contains("runners"));
}

#[test]
fn it_reads_text_out_of_html() {
    let html = r#"<html><head><title>Cat Facts </title></head>
        <body><p>The <b>cat</b> sat.</p>
        <a href="/dog">Dog page</a></body></html>"#;
    let terms = page_terms(html);
    for t in ["cat", "facts", "the", "sat.", "dog", "page"] {
        assert!(terms.contains(t), "missing {t}");
    }
    assert!(!terms.iter().any(|t| t.contains('<')));
}
