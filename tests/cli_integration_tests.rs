// Integration tests for the dexgram command line
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const JAVA_FASTA: &str = "\
.class public Lcom/benchmarks/java/Fasta;
.super Ljava/lang/Object;

.method public static makeRandom(I)V
    .registers 6
    const/4 v0, 0x0
    :goto_0
    if-ge v0, p0, :cond_0
    invoke-static {}, Lcom/benchmarks/java/Fasta;->random()D
    move-result-wide v2
    add-int/lit8 v0, v0, 0x1
    goto :goto_0
    :cond_0
    return-void
.end method
";

const KOTLIN_FASTA: &str = "\
.method public final makeRandom(I)V
    .registers 6
    const/4 v0, 0x0
    :goto_0
    if-ge v0, p1, :cond_0
    invoke-virtual {p0}, Lcom/benchmarks/kotlin/Fasta;->random()D
    move-result-wide v2
    add-int/lit8 v0, v0, 0x1
    goto :goto_0
    :cond_0
    return-void
.end method
";

fn write_listing(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn labelled(label: &str, path: &Path) -> [String; 2] {
    ["--label".to_string(), format!("{}={}", label, path.display())]
}

#[test]
fn test_writes_both_reports() {
    let tmp_dir = TempDir::new().unwrap();
    let java = write_listing(tmp_dir.path(), "JavaFasta.smali", JAVA_FASTA);
    let kotlin = write_listing(tmp_dir.path(), "KotlinFasta.smali", KOTLIN_FASTA);
    let out = tmp_dir.path().join("out");

    let mut cmd = Command::cargo_bin("dexgram").unwrap();
    cmd.arg("2")
        .args(labelled("fasta/java", &java))
        .args(labelled("fasta/kotlin-idiomatic", &kotlin))
        .arg("-o")
        .arg(&out);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2-gram analysis: 2 files"));

    let csv = fs::read_to_string(out.join("ngram-frequency-results.csv")).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("\"ngram\","));
    assert_eq!(
        lines.next().unwrap(),
        "\"benchmark\",\"fasta\",\"fasta\""
    );
    assert_eq!(
        lines.next().unwrap(),
        "\"implementation\",\"java\",\"kotlin-idiomatic\""
    );
    assert!(csv.contains("\"invoke-static move-result-wide\",\"0.16666666666666666\",\"0\""));
    assert!(csv.contains("\"invoke-virtual move-result-wide\",\"0\",\"0.16666666666666666\""));
    assert!(!csv.contains("return-void const/4"));

    let counts = fs::read_to_string(out.join("ngram-count-results.txt")).unwrap();
    assert!(counts.starts_with("Benchmark, Unique 2-gram"));
    // 6 windows each; 4 shared, 2 per-variant
    assert!(counts.contains("fasta (all), 8/100.00/100.00, 12"));
    assert!(counts.contains(", 6/75.00/75.00, 6"));
    assert!(counts.ends_with("all, 8/100.00/100.00, 12\n"));
}

#[test]
fn test_json_summary() {
    let tmp_dir = TempDir::new().unwrap();
    let java = write_listing(tmp_dir.path(), "Fasta.smali", JAVA_FASTA);

    let mut cmd = Command::cargo_bin("dexgram").unwrap();
    cmd.arg("--format")
        .arg("json")
        .arg("--top")
        .arg("1")
        .arg("-o")
        .arg(tmp_dir.path())
        .arg("3")
        .arg(&java);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["ngram_size"], 3);
    assert_eq!(summary["files"][0]["benchmark"], "ungrouped");
    assert_eq!(summary["files"][0]["total"], 5);
    assert_eq!(summary["files"][0]["top"].as_array().unwrap().len(), 1);
}

#[test]
fn test_manifest_input() {
    let tmp_dir = TempDir::new().unwrap();
    write_listing(tmp_dir.path(), "JavaFasta.smali", JAVA_FASTA);
    write_listing(tmp_dir.path(), "KotlinFasta.smali", KOTLIN_FASTA);
    let manifest = write_listing(
        tmp_dir.path(),
        "dexgram.toml",
        r#"
[[file]]
path = "JavaFasta.smali"
benchmark = "fasta"
implementation = "java"
name = "java-fasta"

[[file]]
path = "KotlinFasta.smali"
benchmark = "fasta"
implementation = "kotlin-idiomatic"
name = "kotlin-fasta"
"#,
    );

    let mut cmd = Command::cargo_bin("dexgram").unwrap();
    cmd.arg("1")
        .arg("--manifest")
        .arg(&manifest)
        .arg("-o")
        .arg(tmp_dir.path());

    cmd.assert().success();

    let csv = fs::read_to_string(tmp_dir.path().join("ngram-frequency-results.csv")).unwrap();
    assert!(csv.starts_with("\"ngram\",\"java-fasta\",\"kotlin-fasta\"\n"));
}

#[test]
fn test_invalid_ngram_size() {
    let tmp_dir = TempDir::new().unwrap();
    let java = write_listing(tmp_dir.path(), "Fasta.smali", JAVA_FASTA);

    for size in ["0", "5"] {
        let mut cmd = Command::cargo_bin("dexgram").unwrap();
        cmd.arg("-o").arg(tmp_dir.path()).arg(size).arg(&java);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("n-gram size"));
    }

    // Rejected before any report is written
    assert!(!tmp_dir.path().join("ngram-count-results.txt").exists());
}

#[test]
fn test_non_numeric_ngram_size() {
    let mut cmd = Command::cargo_bin("dexgram").unwrap();
    cmd.arg("two").arg("Fasta.smali");

    cmd.assert().failure().stderr(predicate::str::contains("NGRAM_SIZE"));
}

#[test]
fn test_missing_file_aborts() {
    let tmp_dir = TempDir::new().unwrap();
    let java = write_listing(tmp_dir.path(), "Fasta.smali", JAVA_FASTA);

    let mut cmd = Command::cargo_bin("dexgram").unwrap();
    cmd.arg("-o")
        .arg(tmp_dir.path())
        .arg("2")
        .arg(&java)
        .arg(tmp_dir.path().join("Missing.smali"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing.smali"));

    assert!(!tmp_dir.path().join("ngram-frequency-results.csv").exists());
}

#[test]
fn test_no_input_files() {
    let mut cmd = Command::cargo_bin("dexgram").unwrap();
    cmd.arg("2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no input files"));
}

#[test]
fn test_positional_path_with_equals_is_plain() {
    let tmp_dir = TempDir::new().unwrap();
    let nested = tmp_dir.path().join("x=1");
    fs::create_dir_all(&nested).unwrap();
    let java = write_listing(&nested, "Fasta.smali", JAVA_FASTA);

    let mut cmd = Command::cargo_bin("dexgram").unwrap();
    cmd.arg("-o").arg(tmp_dir.path()).arg("2").arg(&java);

    cmd.assert().success();

    let counts = fs::read_to_string(tmp_dir.path().join("ngram-count-results.txt")).unwrap();
    assert!(counts.contains("ungrouped (all)"));
    assert!(counts.contains("x=1"));
}

#[test]
fn test_reserved_display_name_rejected() {
    let tmp_dir = TempDir::new().unwrap();
    let manifest = write_listing(
        tmp_dir.path(),
        "dexgram.toml",
        "[[file]]\npath = \"Fasta.smali\"\nname = \"all\"\n",
    );

    let mut cmd = Command::cargo_bin("dexgram").unwrap();
    cmd.arg("2").arg("-m").arg(&manifest);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}
