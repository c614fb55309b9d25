use super::*;

fn temp_root(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "doxygraph-loader-{tag}-{}",
        std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).expect("clock drift").as_nanos()
    ))
}

#[test]
fn loads_relative_to_export_root() {
    let root = temp_root("relative");
    std::fs::create_dir_all(&root).expect("create temp root");
    std::fs::write(root.join("ns.xml"), r#"<doxygen version="1.9.8"><compounddef id="ns"/></doxygen>"#)
        .expect("write document");

    let loader = DocumentLoader::new(&root);
    let document = loader.load(Path::new("ns.xml")).expect("document loads");
    assert_eq!(document.path, root.join("ns.xml"));
    assert_eq!(document.root.name(), "doxygen");
    assert_eq!(document.root.attr("version"), Some("1.9.8"));

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn every_load_rereads_the_file() {
    let root = temp_root("no-cache");
    std::fs::create_dir_all(&root).expect("create temp root");
    let file = root.join("doc.xml");
    std::fs::write(&file, "<first/>").expect("write document");

    let loader = DocumentLoader::new(&root);
    assert_eq!(loader.load(Path::new("doc.xml")).expect("first load").root.name(), "first");
    std::fs::write(&file, "<second/>").expect("rewrite document");
    assert_eq!(loader.load(Path::new("doc.xml")).expect("second load").root.name(), "second");

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn missing_file_is_io_error() {
    let loader = DocumentLoader::new(temp_root("missing"));
    let err = loader.load(Path::new("index.xml")).expect_err("file does not exist");
    assert!(matches!(err, Error::Io { .. }), "unexpected error: {err}");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn broken_xml_is_parse_error() {
    let err = XmlDocument::parse("broken.xml", "<doxygen><compounddef></doxygen>").expect_err("mismatched tags");
    match err {
        Error::Parse {
            path, ..
        } => assert_eq!(path, PathBuf::from("broken.xml")),
        other => panic!("unexpected error: {other}"),
    }
}
