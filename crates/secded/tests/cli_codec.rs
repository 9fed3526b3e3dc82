use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/secded-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn secded() -> Command {
    Command::new(env!("CARGO_BIN_EXE_secded"))
}

#[test]
fn encode_decode_file_roundtrip() {
    let dir = unique_temp_dir("roundtrip");
    let input = dir.join("input.bin");
    let wire = dir.join("wire.sec");
    let output = dir.join("output.bin");

    let original: Vec<u8> = (0..=255u8).collect();
    std::fs::write(&input, &original).expect("input should be writable");

    let status = secded()
        .args(["encode"])
        .arg(&input)
        .arg("-o")
        .arg(&wire)
        .arg("--format")
        .arg("json")
        .status()
        .expect("encode should run");
    assert!(status.success());

    let encoded = std::fs::read(&wire).expect("wire file should exist");
    assert_eq!(encoded.len(), original.len() * 2);

    let status = secded()
        .args(["decode"])
        .arg(&wire)
        .arg("-o")
        .arg(&output)
        .arg("--format")
        .arg("json")
        .status()
        .expect("decode should run");
    assert!(status.success());

    assert_eq!(
        std::fs::read(&output).expect("output file should exist"),
        original
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn decode_corrects_single_bit_error_and_reports_it() {
    let dir = unique_temp_dir("correct");
    let input = dir.join("input.bin");
    let wire = dir.join("wire.sec");
    let output = dir.join("output.bin");

    std::fs::write(&input, b"single bit flips are survivable").unwrap();

    let status = secded()
        .arg("encode")
        .arg(&input)
        .arg("-o")
        .arg(&wire)
        .status()
        .expect("encode should run");
    assert!(status.success());

    let mut encoded = std::fs::read(&wire).unwrap();
    encoded[10] ^= 0x20; // flip d1 of one codeword
    std::fs::write(&wire, &encoded).unwrap();

    let out = secded()
        .arg("decode")
        .arg(&wire)
        .arg("-o")
        .arg(&output)
        .arg("--format")
        .arg("json")
        .output()
        .expect("decode should run");
    assert!(out.status.success());

    assert_eq!(
        std::fs::read(&output).unwrap(),
        b"single bit flips are survivable"
    );

    let report: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("report should be JSON");
    assert_eq!(report["corrected"], 1);
    assert_eq!(report["uncorrectable"], 0);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn strict_decode_fails_on_double_bit_error() {
    let dir = unique_temp_dir("strict");
    let input = dir.join("input.bin");
    let wire = dir.join("wire.sec");
    let output = dir.join("output.bin");

    std::fs::write(&input, b"fragile").unwrap();

    assert!(secded()
        .arg("encode")
        .arg(&input)
        .arg("-o")
        .arg(&wire)
        .status()
        .unwrap()
        .success());

    let mut encoded = std::fs::read(&wire).unwrap();
    encoded[0] ^= 0x28; // flip d1 and d2 of the first codeword
    std::fs::write(&wire, &encoded).unwrap();

    let status = secded()
        .arg("decode")
        .arg(&wire)
        .arg("-o")
        .arg(&output)
        .arg("--strict")
        .status()
        .expect("decode should run");
    assert_eq!(status.code(), Some(60));

    // Output is still written in full, corruption and all.
    assert_eq!(std::fs::read(&output).unwrap().len(), 7);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn stdin_stdout_pipeline_roundtrips() {
    let mut encoder = secded()
        .arg("--log-level")
        .arg("error")
        .arg("encode")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("encode should start");
    encoder
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"piped payload")
        .expect("stdin should accept data");
    let encoded = encoder.wait_with_output().expect("encode should finish");
    assert!(encoded.status.success());
    assert_eq!(encoded.stdout.len(), 26);

    let mut decoder = secded()
        .arg("--log-level")
        .arg("error")
        .arg("decode")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("decode should start");
    decoder
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(&encoded.stdout)
        .expect("stdin should accept data");
    let decoded = decoder.wait_with_output().expect("decode should finish");
    assert!(decoded.status.success());
    assert_eq!(decoded.stdout, b"piped payload");
}

#[test]
fn inspect_emits_one_json_row_per_codeword() {
    let dir = unique_temp_dir("inspect");
    let input = dir.join("input.bin");
    let wire = dir.join("wire.sec");

    std::fs::write(&input, &[0xA5]).unwrap();
    assert!(secded()
        .arg("encode")
        .arg(&input)
        .arg("-o")
        .arg(&wire)
        .status()
        .unwrap()
        .success());

    let out = secded()
        .arg("inspect")
        .arg(&wire)
        .arg("--format")
        .arg("json")
        .output()
        .expect("inspect should run");
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).expect("inspect output should be UTF-8");
    let rows: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("row should be JSON"))
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["codeword"], "0x35");
    assert_eq!(rows[1]["codeword"], "0xca");
    assert_eq!(rows[0]["outcome"], "clean");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_prints_package_version() {
    let out = secded().arg("version").output().expect("version should run");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("secded "));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
