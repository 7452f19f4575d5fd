use std::io::Write;
use std::process::{Command, Output, Stdio};

fn msort(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_msort"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut input = child.stdin.take().unwrap();
        let _ = input.write_all(stdin);
    }
    child.wait_with_output().unwrap()
}

const VCARDS: &str = "BEGIN:VCARD\r\nN:Smith;John\r\nEND:VCARD\r\n\r\n\
BEGIN:VCARD\r\nN:Adams;Ann\r\nEND:VCARD\r\n\r\n\
BEGIN:VCARD\r\nFN:Nobody\r\nEND:VCARD\r\n\r\n";

const VCARD_BLOCK: &str = "BEGIN:VCARD.*?END:VCARD\\r\\n\\r\\n";
const VCARD_KEY: &str = "^N:(.*?)\\r?$";

#[test]
fn sorts_vcards() {
    let out = msort(&["-b", VCARD_BLOCK, "-s", VCARD_KEY], VCARDS.as_bytes());
    assert_eq!(out.status.code(), Some(0));
    let expected = "BEGIN:VCARD\r\nFN:Nobody\r\nEND:VCARD\r\n\r\n\
BEGIN:VCARD\r\nN:Adams;Ann\r\nEND:VCARD\r\n\r\n\
BEGIN:VCARD\r\nN:Smith;John\r\nEND:VCARD\r\n\r\n\n";
    assert_eq!(String::from_utf8(out.stdout).unwrap(), expected);
    assert!(out.stderr.is_empty());
}

#[test]
fn long_flags_and_trailing_newline() {
    let out = msort(
        &["--bp", "BEGIN . END\n", "--sp", "BEGIN (.)"],
        b"junk\nBEGIN A END\nBEGIN C END\nBEGIN B END\nmore junk",
    );
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"BEGIN A END\nBEGIN B END\nBEGIN C END\n\n");
}

#[test]
fn empty_input() {
    let out = msort(&["-b", "x", "-s", "(x)"], b"");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"\n");
}

#[test]
fn last_flag_wins() {
    let out = msort(&["-b", "nothing", "-s", "(.)", "-b", "\\w\n"], b"b\na\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"a\nb\n\n");
}

#[test]
fn help() {
    let out = msort(&["--help"], b"BEGIN A END\n");
    assert_eq!(out.status.code(), Some(0));
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("--bp"));
    assert!(text.contains("vCards"));
    let out = msort(&["-h"], b"");
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn version() {
    let out = msort(&["--version"], b"");
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8(out.stdout).unwrap().starts_with("msort "));
}

#[test]
fn usage_errors() {
    for args in [
        vec!["-b", "x"],
        vec!["-s", "(x)"],
        vec![],
        vec!["-b", "x", "-s", "(x)", "file.vcf"],
        vec!["-b", "x", "-s", "(x)", "--bogus"],
        vec!["-b", "", "-s", "(x)"],
    ] {
        let out = msort(&args, b"x\n");
        assert_eq!(out.status.code(), Some(2), "{:?}", args);
        assert!(out.stdout.is_empty());
        assert!(!out.stderr.is_empty());
    }
}

#[test]
fn pattern_errors() {
    let out = msort(&["-b", "(", "-s", "(x)"], b"x\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stderr).unwrap().starts_with("Error\tRegexError"));

    let out = msort(&["-b", "x", "-s", "x"], b"x\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stderr).unwrap().contains("no capture group"));
}

#[test]
fn check() {
    let args = ["-c", "-b", "\\w+\n", "-s", "(.*)"];
    let out = msort(&args, b"a\nb\nc\n");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());

    let out = msort(&args, b"a\nc\nb\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr).unwrap().contains("block 2"));
}

#[test]
fn verbose() {
    let out = msort(&["-v", "-b", "\\w+\n", "-s", "^(\\w)"], b"b1\na2\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"a2\nb1\n\n");
    assert_eq!(String::from_utf8(out.stderr).unwrap(), "2 blocks\n2\ta\n1\tb\n");
}

#[test]
fn gzipped_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(b"b\na\n").unwrap();
    let out = msort(&["-b", "\\w\n", "-s", "(.)"], &enc.finish().unwrap());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"a\nb\n\n");
}

#[test]
fn latin1_vcards_kept() {
    let input = b"BEGIN:VCARD\nN:Zed\nEND:VCARD\nBEGIN:VCARD\nN:Jos\xe9\nEND:VCARD\n";
    let out = msort(&["-b", "BEGIN:VCARD.*?END:VCARD\n", "-s", "^N:(.*?)$"], input);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        out.stdout,
        &b"BEGIN:VCARD\nN:Jos\xe9\nEND:VCARD\nBEGIN:VCARD\nN:Zed\nEND:VCARD\n\n"[..]
    );
}
