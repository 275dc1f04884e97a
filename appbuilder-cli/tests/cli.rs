use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn appbuilder(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_appbuilder"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

const CONTACT_SCRIPT: &str = r#"[
    {"action":"add","type":"h1"},
    {"action":"update","id":"$last","props":{"children":"Get in touch"}},
    {"action":"add","type":"button"},
    {"action":"rename","name":"Contact Page"}
]"#;

#[test]
fn replay_writes_export_named_after_app() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(dir.path(), "script.json", CONTACT_SCRIPT);
    let out_dir = dir.path().join("out");

    let output = appbuilder(&["replay", &script, "--out-dir", out_dir.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let path = out_dir.join("contact-page.json");
    let printed = String::from_utf8(output.stdout).unwrap();
    assert_eq!(printed.trim(), path.display().to_string());

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"type\": \"h1\""));
    assert!(text.contains("\"children\": \"Get in touch\""));
    assert!(text.contains("\"type\": \"button\""));
}

#[test]
fn replay_blank_title_writes_dash_file() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(dir.path(), "script.json", r#"[{"action":"add","type":"p"}]"#);
    let out_dir = dir.path().to_str().unwrap();

    let output = appbuilder(&["replay", &script, "--title", "   ", "--out-dir", out_dir]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("-.json").exists());
}

#[test]
fn replay_stops_on_unknown_type() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(dir.path(), "script.json", r#"[{"action":"add","type":"blink"}]"#);

    let output = appbuilder(&["replay", &script, "--out-dir", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown element type: blink"));
}

#[test]
fn render_preview_disables_controls() {
    let dir = tempfile::tempdir().unwrap();
    let script = write(dir.path(), "script.json", CONTACT_SCRIPT);
    let replay = appbuilder(&["replay", &script, "--out-dir", dir.path().to_str().unwrap()]);
    assert!(replay.status.success());
    let document = dir.path().join("contact-page.json");

    let output = appbuilder(&["render", document.to_str().unwrap(), "--preview"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let markup = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = markup.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "<h1 class=\"text-3xl font-bold mb-4\">Get in touch</h1>");
    assert!(lines[1].starts_with("<button "));
    assert!(lines[1].contains(" disabled>"));
}

#[test]
fn render_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();
    let script = write(dir.path(), "script.json", r#"[{"action":"add","type":"p"}]"#);
    let replay = appbuilder(&["replay", &script, "--title", "Doc", "--out-dir", out_dir]);
    assert!(replay.status.success());
    let document = dir.path().join("doc.json");
    let document = document.to_str().unwrap();
    let config = write(dir.path(), "config.json", r#"{"app_name":"Configured Name"}"#);

    let output = appbuilder(&["render", document, "--config", &config]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configured Name"));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("<p class=\"text-base mb-2\">"));

    let missing = dir.path().join("missing.json");
    let output = appbuilder(&["render", document, "--config", missing.to_str().unwrap()]);
    assert!(!output.status.success());
}
