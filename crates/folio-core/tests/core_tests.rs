use std::fs;
use tempfile::TempDir;

use folio_core::config::{resolve_with_base, Config};
use folio_core::content::ContentSource;

const INLINE: &str = r#"
[content]
name = "Mira"
roles = ["Illustrator", "Printmaker"]
email = "mira@example.com"
whatsapp = "4400000000"
resumeURL = "https://mira.example/cv.pdf"

[content.about]
text = "Drawing things by hand."

[[content.graphics]]
id = "g7"
title = "Ink Studies"
description = "Loose ink drawings."
tags = ["ink", "paper"]
"#;

#[test]
fn inline_content_is_read_from_config_toml() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), INLINE).unwrap();

    let config = Config::load_in(tmp.path()).expect("load");
    let content = config.content().expect("content");

    assert_eq!(content.name, "Mira");
    assert_eq!(content.resume_link(), Some("https://mira.example/cv.pdf"));
    assert_eq!(content.graphics.len(), 1);
    assert!(content.video.is_empty(), "absent sections stay empty");
    let ids: Vec<String> = content.documents().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, ["about", "g7"]);
}

#[test]
fn content_file_wins_over_inline_content() {
    let tmp = TempDir::new().unwrap();
    let json = r##"{
        "name": "Jun",
        "roles": ["Editor"],
        "about": { "text": "Cutting film." },
        "graphics": [],
        "video": [{ "id": "v9", "title": "Reel", "description": "Edit reel.", "tags": ["edit"], "url": "https://example.com/reel" }],
        "email": "jun@example.com",
        "resumeURL": "#"
    }"##;
    fs::write(tmp.path().join("profile.json"), json).unwrap();
    fs::write(tmp.path().join("config.toml"), format!("content_file = \"profile.json\"\n{INLINE}")).unwrap();

    let content = Config::load_in(tmp.path()).unwrap().content().expect("content");
    assert_eq!(content.name, "Jun");
    assert_eq!(content.resume_link(), None);
    assert_eq!(content.label_for("v9"), "Reel (video)");
}

#[test]
fn missing_content_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "content_file = \"nope.json\"\n").unwrap();

    let err = Config::load_in(tmp.path()).unwrap().content().unwrap_err();
    assert!(err.to_string().contains("nope.json"), "error names the file: {err}");
}

#[test]
fn non_string_content_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), format!("content_file = 2024\n{INLINE}")).unwrap();

    let err = Config::load_in(tmp.path()).unwrap().content().unwrap_err();
    assert!(err.to_string().contains("content_file"), "error names the key: {err}");
}

#[test]
fn duplicate_ids_fail_at_load() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[content]
name = "Dup"
[[content.graphics]]
id = "x"
title = "One"
[[content.video]]
id = "x"
title = "Two"
"#;
    fs::write(tmp.path().join("config.toml"), toml).unwrap();

    assert!(Config::load_in(tmp.path()).unwrap().content().is_err());
}

#[test]
fn sample_profile_without_any_config() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_in(tmp.path()).unwrap();
    assert_eq!(config.content().unwrap(), ContentSource::sample());
}

#[test]
fn get_or_default_only_defaults_absent_keys() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[limits]\nmax = \"many\"\n").unwrap();
    let config = Config::load_in(tmp.path()).unwrap();

    let absent: Vec<String> = config.get_or_default("nothing.here").unwrap();
    assert!(absent.is_empty());
    assert!(config.get_or_default::<u32>("limits.max").is_err());
}

#[test]
fn relative_paths_resolve_against_base() {
    let base = std::path::Path::new("/srv/folio");
    assert_eq!(resolve_with_base(base, "profile.json"), base.join("profile.json"));
    assert_eq!(resolve_with_base(base, "/etc/profile.json"), std::path::PathBuf::from("/etc/profile.json"));
}
