//! Unit tests for the key file document.
//! All in-memory, no filesystem access.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use crate::keyfile::{KeyFile, KeyFileError};

const SAMPLE: &str = "\
# written by hand
[window]
x=10
width = 1200
maximized=true

[preferences]
gps_hostname=\\sgps.local
blacklist=00:11:22:33:44:55;66:77:88:99:AA:BB;
";

#[test]
fn parses_groups_and_values() {
    let document = KeyFile::parse(SAMPLE).unwrap();

    assert_eq!(document.groups().collect::<Vec<_>>(), ["window", "preferences"]);
    assert_eq!(document.get_integer("window", "x").unwrap(), 10);
    assert_eq!(document.get_integer("window", "width").unwrap(), 1200);
    assert!(document.get_boolean("window", "maximized").unwrap());
    assert_eq!(
        document.get_string("preferences", "gps_hostname").unwrap(),
        " gps.local"
    );
    assert_eq!(
        document.get_string_list("preferences", "blacklist").unwrap(),
        ["00:11:22:33:44:55", "66:77:88:99:AA:BB"]
    );
}

#[test]
fn missing_values_report_where_they_are_missing() {
    let document = KeyFile::parse(SAMPLE).unwrap();

    assert!(matches!(
        document.get_integer("interface", "sound"),
        Err(KeyFileError::GroupNotFound { .. })
    ));
    assert!(matches!(
        document.get_integer("window", "height"),
        Err(KeyFileError::KeyNotFound { .. })
    ));
}

#[test]
fn type_mismatches_are_errors() {
    let document = KeyFile::parse(
        "[t]\nnumber=12abc\nflag=yes\nbig=99999999999\nescape=bad\\q\n",
    )
    .unwrap();

    assert!(matches!(
        document.get_integer("t", "number"),
        Err(KeyFileError::InvalidValue { expected: "integer", .. })
    ));
    assert!(matches!(
        document.get_boolean("t", "flag"),
        Err(KeyFileError::InvalidValue { expected: "boolean", .. })
    ));
    assert!(document.get_integer("t", "big").is_err());
    assert!(document.get_string("t", "escape").is_err());
}

#[test]
fn numeric_booleans_are_accepted() {
    let document = KeyFile::parse("[t]\non=1\noff=0\n").unwrap();

    assert!(document.get_boolean("t", "on").unwrap());
    assert!(!document.get_boolean("t", "off").unwrap());
}

#[test]
fn rejects_malformed_documents() {
    for text in [
        "key=value\n",
        "[group\nkey=value\n",
        "[group]\njust some words\n",
        "[]\n",
        "[  ]\n",
        "[group]\n=value\n",
    ] {
        assert!(
            matches!(KeyFile::parse(text), Err(KeyFileError::Parse { .. })),
            "accepted {text:?}"
        );
    }
}

#[test]
fn parse_error_reports_line_number() {
    let error = KeyFile::parse("[a]\nx=1\n\noops\n").unwrap_err();

    assert_eq!(
        error,
        KeyFileError::Parse {
            line: 4,
            reason: "expected a group header, a comment, or key=value".to_string(),
        }
    );
}

#[test]
fn padded_group_headers_are_trimmed() {
    let document = KeyFile::parse("[ plugins ]\nenabled=yes\n[\twindow]\nx=1\n").unwrap();

    assert_eq!(document.groups().collect::<Vec<_>>(), ["plugins", "window"]);
    assert_eq!(document.get_string("plugins", "enabled").unwrap(), "yes");
    assert_eq!(
        document.to_data().unwrap(),
        "[plugins]\nenabled=yes\n\n[window]\nx=1\n"
    );
}

#[test]
fn repeated_groups_and_keys_merge() {
    let document = KeyFile::parse("[a]\nx=1\n[b]\ny=2\n[a]\nx=3\nz=4\n").unwrap();

    assert_eq!(document.groups().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(document.get_integer("a", "x").unwrap(), 3);
    assert_eq!(document.keys("a").collect::<Vec<_>>(), ["x", "z"]);
}

#[test]
fn setters_create_groups_and_replace_in_place() {
    let mut document = KeyFile::parse(SAMPLE).unwrap();

    document.set_integer("window", "x", -1);
    document.set_boolean("interface", "sound", true);

    assert_eq!(document.keys("window").next(), Some("x"));
    assert_eq!(document.get_integer("window", "x").unwrap(), -1);
    assert_eq!(
        document.groups().collect::<Vec<_>>(),
        ["window", "preferences", "interface"]
    );
}

#[test]
fn strings_and_lists_round_trip_through_text() {
    let mut document = KeyFile::new();
    document.set_string("s", "plain", "a=b ; c");
    document.set_string("s", "padded", "  two spaces  ");
    document.set_string("s", "multiline", "one\ntwo\\three");
    document.set_string_list("s", "list", ["x;y", " lead", ""]);
    document.set_string_list("s", "empty", Vec::<String>::new());

    let reparsed = KeyFile::parse(&document.to_data().unwrap()).unwrap();

    assert_eq!(reparsed.get_string("s", "plain").unwrap(), "a=b ; c");
    assert_eq!(reparsed.get_string("s", "padded").unwrap(), "  two spaces  ");
    assert_eq!(reparsed.get_string("s", "multiline").unwrap(), "one\ntwo\\three");
    assert_eq!(reparsed.get_string_list("s", "list").unwrap(), ["x;y", " lead", ""]);
    assert!(reparsed.get_string_list("s", "empty").unwrap().is_empty());
}

#[test]
fn comments_survive_rendering() {
    let text = "# top\n[a]\n# about x\nx=1\n\n[b]\ny=2\n# tail\n";
    let document = KeyFile::parse(text).unwrap();

    let rendered = document.to_data().unwrap();

    assert_eq!(rendered, "# top\n[a]\n# about x\nx=1\n\n[b]\ny=2\n\n# tail\n");
    assert_eq!(KeyFile::parse(&rendered).unwrap(), document);
}

#[test]
fn group_removal() {
    let mut document = KeyFile::parse("[profile_0]\na=1\n[window]\nx=1\n[profile_7]\nb=2\n").unwrap();

    assert!(document.remove_group("profile_0"));
    assert!(!document.remove_group("profile_0"));

    document.retain_groups(|name| !name.starts_with("profile_"));
    assert_eq!(document.groups().collect::<Vec<_>>(), ["window"]);

    assert!(document.remove_key("window", "x"));
    assert!(!document.has_key("window", "x"));
    assert!(document.has_group("window"));
}

#[test]
fn unrepresentable_names_fail_to_render() {
    let mut document = KeyFile::new();
    document.set_integer("bad]group", "x", 1);
    assert!(matches!(
        document.to_data(),
        Err(KeyFileError::InvalidName { .. })
    ));

    let mut document = KeyFile::new();
    document.set_integer("group", "a=b", 1);
    assert!(matches!(
        document.to_data(),
        Err(KeyFileError::InvalidName { .. })
    ));
}

#[test]
fn empty_document_renders_empty() {
    assert_eq!(KeyFile::new().to_data().unwrap(), "");
    assert_eq!(KeyFile::parse("").unwrap(), KeyFile::new());
}
