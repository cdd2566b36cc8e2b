use super::*;
use htmlembed_core::{EmitConfig, Error};
use pretty_assertions::assert_eq;
use std::fs;

// ========== Escaper ==========

#[test]
fn test_literal_plain() {
    assert_eq!(to_literal("<p>hi</p>"), "\"<p>hi</p>\\0\"");
    assert_eq!(to_literal(""), "\"\\0\"");
}

#[test]
fn test_literal_quotes_and_tab() {
    // The tab is a real tab and stays one
    assert_eq!(
        to_literal("He said \"hi\"\there"),
        "\"He said \\\"hi\\\"\there\\0\""
    );
}

#[test]
fn test_literal_backslash_before_quote() {
    // Backslashes are doubled before quotes get escaped
    assert_eq!(to_literal(r#"a\"b"#), r#""a\\\"b\0""#);
    assert_eq!(to_literal(r"C:\dir\"), r#""C:\\dir\\\0""#);
}

#[test]
fn test_literal_newline_untouched() {
    assert_eq!(to_literal("a\nb"), "\"a\nb\\0\"");
}

#[test]
fn test_literal_round_trip() {
    let samples = [
        "",
        "plain text",
        "\"",
        "\\",
        "\\\"",
        "\"\\",
        "ends with backslash \\",
        "\\0 already there",
        "<a href=\"x\">\\n</a>",
        "mixed \"q\" \\\\ \t tab ünïcode",
    ];
    for sample in samples {
        assert_eq!(
            from_literal(&to_literal(sample)).as_deref(),
            Some(sample),
            "input: {:?}",
            sample
        );
    }
}

#[test]
fn test_from_literal_rejects_malformed() {
    assert_eq!(from_literal("no quotes"), None);
    assert_eq!(from_literal("\"missing terminator\""), None);
    assert_eq!(from_literal("\"bare \" quote\\0\""), None);
    assert_eq!(from_literal("\"bad \\n escape\\0\""), None);
    assert_eq!(from_literal("\"\\0"), None);
}

// ========== Emitter ==========

#[test]
fn test_declare() {
    let decl = declare("String", "page", "<p>hi</p>").unwrap();
    assert_eq!(decl.to_string(), "extern String page = \"<p>hi</p>\\0\";");
}

#[test]
fn test_declare_rejects_bad_name() {
    match declare("String", "my page", "<p>hi</p>") {
        Err(Error::InvalidIdentifier(name)) => assert_eq!(name, "my page"),
        other => panic!("expected InvalidIdentifier, got {:?}", other),
    }
}

#[test]
fn test_emit() {
    let dir = tempfile::tempdir().unwrap();
    let html = dir.path().join("index.html");
    fs::write(&html, "<!-- title -->\n<p class=\"big\">\n\thi\n</p>\n").unwrap();

    let decl = emit(&html, "page").unwrap();
    assert_eq!(decl, "extern String page = \"<p class=\\\"big\\\">hi</p>\\0\";");
}

#[test]
fn test_emit_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = emit(&dir.path().join("missing.html"), "page").unwrap_err();
    assert!(matches!(err, Error::FileAccess { .. }));
}

#[test]
fn test_render_source() {
    let config = EmitConfig::default();
    let decl = declare("String", "page", "<p>hi</p>").unwrap();
    assert_eq!(
        render_source(&config, &decl),
        "/* This file was automatically generated by htmlembed */\n\
         #include <Arduino.h>\n\
         \n\
         extern String page = \"<p>hi</p>\\0\";"
    );
}

#[test]
fn test_write_source_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("joysticks.html");
    let output = dir.path().join("html_string.cpp");
    fs::write(&input, "<html>\n  <body>Joy</body>\n</html>\n").unwrap();
    fs::write(&output, "stale content that is much longer than the new file ".repeat(20)).unwrap();

    let config = EmitConfig::default()
        .with_input(&input)
        .with_output(&output)
        .with_variable_name("joy_page");
    let decl = write_source(&config).unwrap();
    assert_eq!(decl.name, "joy_page");

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "/* This file was automatically generated by htmlembed */\n\
         #include <Arduino.h>\n\
         \n\
         extern String joy_page = \"<html> <body>Joy</body></html>\\0\";"
    );
}

#[test]
fn test_write_source_missing_input_leaves_output_alone() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("html_string.cpp");

    let config = EmitConfig::default()
        .with_input(dir.path().join("missing.html"))
        .with_output(&output);
    let err = write_source(&config).unwrap_err();

    assert!(matches!(err, Error::FileAccess { .. }));
    assert!(!output.exists());
}

#[test]
fn test_write_source_bad_name_leaves_output_alone() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("index.html");
    let output = dir.path().join("html_string.cpp");
    fs::write(&input, "<p>x</p>").unwrap();
    fs::write(&output, "keep me").unwrap();

    let config = EmitConfig::default()
        .with_input(&input)
        .with_output(&output)
        .with_variable_name("1page");
    assert!(matches!(
        write_source(&config),
        Err(Error::InvalidIdentifier(_))
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
}

#[test]
fn test_write_source_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("index.html");
    fs::write(&input, "<p>x</p>").unwrap();

    let output = dir.path().join("no_such_dir").join("out.cpp");
    let config = EmitConfig::default().with_input(&input).with_output(&output);

    match write_source(&config) {
        Err(Error::FileAccess { path, .. }) => assert_eq!(path, output),
        other => panic!("expected FileAccess error, got {:?}", other),
    }
}
