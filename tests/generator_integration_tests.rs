use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use stencil::error::Error;
use stencil::generator::{ProjectGenerator, ProjectRequest};
use tempfile::TempDir;

fn substitutions(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn generate(
    template_dir: &Path,
    output_dir: &Path,
    pairs: &[(&str, &str)],
) -> Result<(), Error> {
    let request = ProjectRequest {
        template_dir: template_dir.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        substitutions: substitutions(pairs),
    };
    ProjectGenerator::new(&request).generate()
}

#[test]
fn substitutes_placeholders_in_file_contents() {
    let template_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let output_root = output_dir.path().join("project");
    fs::write(
        template_dir.path().join("go.mod"),
        "Module: {{ModuleName}}\nName: {{ProjectName}}",
    )
    .unwrap();

    generate(
        template_dir.path(),
        &output_root,
        &[("ProjectName", "foo"), ("ModuleName", "example.com/foo")],
    )
    .unwrap();

    let content = fs::read_to_string(output_root.join("go.mod")).unwrap();
    assert_eq!(content, "Module: example.com/foo\nName: foo");
}

#[test]
fn substitution_is_idempotent() {
    let template_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let first = output_dir.path().join("first");
    let second = output_dir.path().join("second");
    fs::write(
        template_dir.path().join("go.mod"),
        "Module: {{ModuleName}}\nName: {{ProjectName}}",
    )
    .unwrap();
    let pairs = [("ProjectName", "foo"), ("ModuleName", "example.com/foo")];

    // Generating from the already-substituted output must change nothing.
    generate(template_dir.path(), &first, &pairs).unwrap();
    generate(&first, &second, &pairs).unwrap();

    assert_eq!(
        fs::read(first.join("go.mod")).unwrap(),
        fs::read(second.join("go.mod")).unwrap()
    );
}

#[test]
fn reproduces_the_source_tree_exactly() {
    let template_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let output_root = output_dir.path().join("project");
    fs::create_dir_all(template_dir.path().join("a/b")).unwrap();
    fs::write(template_dir.path().join("a/x.txt"), "x").unwrap();
    fs::write(template_dir.path().join("a/b/y.txt"), "y").unwrap();

    generate(
        template_dir.path(),
        &output_root,
        &[("ProjectName", "foo"), ("ModuleName", "bar")],
    )
    .unwrap();

    let mut entries: Vec<PathBuf> = walkdir::WalkDir::new(&output_root)
        .into_iter()
        .map(|e| e.unwrap().path().strip_prefix(&output_root).unwrap().to_path_buf())
        .collect();
    entries.sort();
    let expected: Vec<PathBuf> =
        ["", "a", "a/b", "a/b/y.txt", "a/x.txt"].into_iter().map(PathBuf::from).collect();
    assert_eq!(entries, expected);

    // No placeholder occurs in the fixture, so the trees must match in
    // content as well as structure.
    assert!(!dir_diff::is_different(template_dir.path(), &output_root).unwrap());
}

#[cfg(unix)]
#[test]
fn preserves_file_permission_bits() {
    use std::os::unix::fs::PermissionsExt;

    let template_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let output_root = output_dir.path().join("project");
    let script = template_dir.path().join("setup.sh");
    fs::write(&script, "#!/bin/sh\necho {{ProjectName}}\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    generate(template_dir.path(), &output_root, &[("ProjectName", "foo")]).unwrap();

    let mode = fs::metadata(output_root.join("setup.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o7777, 0o755);
}

#[cfg(unix)]
#[test]
fn aborts_on_unreadable_file_with_its_path() {
    let template_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let output_root = output_dir.path().join("project");
    fs::write(template_dir.path().join("ok.txt"), "fine").unwrap();
    // A dangling symlink is unreadable for any caller, root included.
    let broken = template_dir.path().join("zz-broken.txt");
    std::os::unix::fs::symlink("/path/that/does/not/exist", &broken).unwrap();

    let err = generate(template_dir.path(), &output_root, &[]).unwrap_err();
    match err {
        Error::MaterializeError { path, .. } => assert_eq!(path, broken),
        other => panic!("expected MaterializeError, got {other:?}"),
    }
}

#[test]
fn copies_non_utf8_files_byte_for_byte() {
    let template_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let output_root = output_dir.path().join("project");
    let raw = [0x00u8, 0xff, 0xfe, 0x89, b'P', b'N', b'G'];
    fs::write(template_dir.path().join("logo.png"), raw).unwrap();

    generate(template_dir.path(), &output_root, &[("ProjectName", "foo")]).unwrap();

    assert_eq!(fs::read(output_root.join("logo.png")).unwrap(), raw);
}

#[test]
fn copies_the_manifest_like_any_other_file() {
    let template_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let output_root = output_dir.path().join("project");
    fs::write(template_dir.path().join("template.yaml"), "name: Fixture").unwrap();

    generate(template_dir.path(), &output_root, &[]).unwrap();

    assert!(output_root.join("template.yaml").is_file());
}

#[test]
fn merges_into_an_existing_output_directory() {
    // The generator itself performs no collision checks; refusing an existing
    // non-empty target is the caller's job.
    let template_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let output_root = output_dir.path().join("project");
    fs::create_dir_all(&output_root).unwrap();
    fs::write(output_root.join("existing.txt"), "kept").unwrap();
    fs::write(template_dir.path().join("new.txt"), "added").unwrap();

    generate(template_dir.path(), &output_root, &[]).unwrap();

    assert_eq!(fs::read_to_string(output_root.join("existing.txt")).unwrap(), "kept");
    assert_eq!(fs::read_to_string(output_root.join("new.txt")).unwrap(), "added");
}
