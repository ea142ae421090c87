use anyhow::Result;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn topk_with_stdin(stdin: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_topk"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())?;
    Ok(child.wait_with_output()?)
}

#[test]
fn prints_keys_and_exits_zero() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "a 5\nb 3\nc 9\nd 1\n")?;

    let out = topk_with_stdin(&format!("{}\n", path.display()))?;
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout)?, "c\na\nb\nd\n");
    Ok(())
}

#[test]
fn malformed_line_exits_nonzero_with_empty_stdout() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "a 5\nx\n")?;

    let out = topk_with_stdin(&format!("{}\n", path.display()))?;
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr)?;
    assert!(stderr.contains("malformed line 2"));
    assert!(stderr.contains("missing separator"));
    Ok(())
}

#[test]
fn no_path_exits_nonzero() -> Result<()> {
    let out = topk_with_stdin("")?;
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    Ok(())
}

#[test]
fn generator_without_count_prints_usage() -> Result<()> {
    let out = Command::new(env!("CARGO_BIN_EXE_topk-gen")).output()?;
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stderr)?.contains("Usage: topk-gen"));
    Ok(())
}

#[test]
fn generator_output_feeds_topk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gen.txt");
    let gen_out = Command::new(env!("CARGO_BIN_EXE_topk-gen"))
        .arg("500")
        .arg(&path)
        .output()?;
    assert!(gen_out.status.success());

    let out = topk_with_stdin(&format!("{}\n", path.display()))?;
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout)?;
    assert_eq!(stdout.lines().count(), 10);
    assert!(stdout.lines().all(|k| k.starts_with("http://api.tech.com/item/")));
    Ok(())
}
