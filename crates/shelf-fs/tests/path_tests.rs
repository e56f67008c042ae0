use rstest::rstest;
use shelf_fs::NormalizedPath;

#[rstest]
#[case("/tmp/a.txt", "/tmp/a.txt")]
#[case("/tmp//a.txt", "/tmp/a.txt")]
#[case("C:\\Users\\me\\a.txt", "C:/Users/me/a.txt")]
#[case("./notes/", "notes")]
#[case("/", "/")]
fn test_normalization(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[rstest]
#[case("/a/b.txt", Some("b.txt"))]
#[case("/a/b/", Some("b"))]
#[case("/", None)]
fn test_file_name(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).file_name(), expected);
}

#[rstest]
#[case("settings.toml", Some("toml"))]
#[case("archive.tar.gz", Some("gz"))]
#[case(".hidden", None)]
#[case("README", None)]
fn test_extension(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).extension(), expected);
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("/shelf/HeldFiles/a.txt");
    assert_eq!(path.parent().unwrap().as_str(), "/shelf/HeldFiles");
    assert_eq!(NormalizedPath::new("/a").parent().unwrap().as_str(), "/");
    assert!(NormalizedPath::new("/").parent().is_none());
    assert!(NormalizedPath::new("a").parent().is_none());
}

#[test]
fn test_join() {
    let base = NormalizedPath::new("/shelf");
    assert_eq!(base.join("HeldFiles").as_str(), "/shelf/HeldFiles");
    assert_eq!(base.join("").as_str(), "/shelf");
    assert_eq!(NormalizedPath::new("").join("x").as_str(), "x");
}
