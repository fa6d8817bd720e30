use std::fs;
use thenlint::analyzers::analyze_file;
use thenlint::config::ThenlintConfig;
use thenlint::core::RuleKind;
use thenlint::io::walker::FileWalker;

#[test]
fn analyze_file_picks_parser_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let js = dir.path().join("app.js");
    let ts = dir.path().join("app.ts");
    fs::write(&js, "promise.then(callback);").unwrap();
    fs::write(&ts, "function f(): void { p.then((x: number) => x); }").unwrap();

    let config = ThenlintConfig::default();
    let js_diags = analyze_file(&js, &config).unwrap();
    let ts_diags = analyze_file(&ts, &config).unwrap();

    assert_eq!(js_diags.len(), 1);
    assert_eq!(js_diags[0].rule, RuleKind::NoCallbackInPromise);
    assert_eq!(ts_diags.len(), 1);
    assert_eq!(ts_diags[0].rule, RuleKind::PreferAwaitToThen);
}

#[test]
fn analyze_file_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("styles.css");
    fs::write(&file, "body {}").unwrap();
    assert!(analyze_file(&file, &ThenlintConfig::default()).is_err());
}

#[test]
fn walk_and_analyze_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.js"),
        "function f() { p.then(x => x); }",
    )
    .unwrap();
    fs::write(dir.path().join("b.js"), "const ok = 1;").unwrap();
    fs::write(dir.path().join("README.md"), "# no js here").unwrap();

    let config = ThenlintConfig::default();
    let mut diagnostics = Vec::new();
    for file in FileWalker::new(dir.path().to_path_buf()).walk().unwrap() {
        diagnostics.extend(analyze_file(&file, &config).unwrap());
    }

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].file.ends_with("a.js"));
}

#[test]
fn config_file_exceptions_flow_through_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("handlers.js");
    fs::write(&source, "p.then(() => { next(); done(); });").unwrap();

    let config_path = dir.path().join("thenlint.toml");
    fs::write(
        &config_path,
        r#"
        [rules.no-callback-in-promise]
        exceptions = ["next"]
        "#,
    )
    .unwrap();

    let config = ThenlintConfig::from_file(&config_path).unwrap();
    let diags = analyze_file(&source, &config).unwrap();

    // only done() remains reportable
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].rule, RuleKind::NoCallbackInPromise);
}
