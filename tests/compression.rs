#[cfg(any(feature = "compression-gzip", feature = "compression-zstd"))]
mod compression_tests {
    use anyhow::Result;
    use std::fs::File;
    use std::io::{self, BufRead, Read, Write};
    use tempfile::tempdir;
    use topk::datagen::{DEFAULT_SEED, generate};
    use topk::io::compression::{EncodedWrite, auto_detect_reader, auto_detect_writer, codecs};
    use topk::io::open_input;
    use topk::{Config, Runner};

    const DATA: &str = "a 5\nb 3\nc 9\nd 1\n";

    fn write_compressed(path: &std::path::Path, contents: &str) -> Result<()> {
        let mut w = auto_detect_writer(File::create(path)?, path)?;
        w.write_all(contents.as_bytes())?;
        w.finish()?;
        Ok(())
    }

    fn read_all(path: &std::path::Path) -> Result<String> {
        let mut s = String::new();
        open_input(path)?.read_to_string(&mut s)?;
        Ok(s)
    }

    #[cfg(feature = "compression-gzip")]
    #[test]
    fn gzip_roundtrip_by_extension() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data.txt.gz");
        write_compressed(&path, DATA)?;

        let raw = std::fs::read(&path)?;
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);
        assert_eq!(read_all(&path)?, DATA);
        Ok(())
    }

    #[cfg(feature = "compression-zstd")]
    #[test]
    fn zstd_roundtrip_by_extension() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data.txt.zst");
        write_compressed(&path, DATA)?;
        assert_eq!(read_all(&path)?, DATA);
        Ok(())
    }

    #[cfg(feature = "compression-gzip")]
    #[test]
    fn gzip_detected_by_magic_bytes() -> Result<()> {
        let dir = tempdir()?;
        let compressed = dir.path().join("data.gz");
        write_compressed(&compressed, DATA)?;

        // Same bytes, no telling extension.
        let plain_name = dir.path().join("data.bin");
        std::fs::copy(&compressed, &plain_name)?;
        let reader = auto_detect_reader(File::open(&plain_name)?, &plain_name)?;
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
        assert_eq!(lines, ["a 5", "b 3", "c 9", "d 1"]);
        Ok(())
    }

    #[test]
    fn plain_files_pass_through() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data.txt");
        std::fs::write(&path, DATA)?;
        assert_eq!(read_all(&path)?, DATA);
        Ok(())
    }

    #[test]
    fn plain_text_with_compressed_extension_is_read_as_text() -> Result<()> {
        let dir = tempdir()?;
        for name in ["counts.gz", "counts.gzip", "counts.zst", "counts.zstd"] {
            let path = dir.path().join(name);
            std::fs::write(&path, "a 5\nb 3\nc 9\n")?;
            assert_eq!(read_all(&path)?, "a 5\nb 3\nc 9\n");

            let mut out = Vec::new();
            Runner::new(Config::new(&path).with_top_n(2)).run(&mut out)?;
            assert_eq!(out, b"c\na\n", "{name}");
        }
        Ok(())
    }

    /// Accepts nothing, as if the disk were full.
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn finish_reports_sink_errors() -> Result<()> {
        for name in ["out.txt", "out.gz", "out.zst"] {
            let mut w = auto_detect_writer(FullDisk, name)?;
            // Small enough to stay buffered until the stream is finished.
            generate(&mut w, 3, DEFAULT_SEED)?;
            assert!(w.finish().is_err(), "{name}");
        }
        Ok(())
    }

    #[test]
    fn codec_names_are_unique() {
        let names: Vec<&str> = codecs().iter().map(|c| c.name()).collect();
        assert!(!names.is_empty());
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate codec {name}");
        }
    }

    #[cfg(feature = "compression-gzip")]
    #[test]
    fn generated_gzip_file_runs_end_to_end() -> Result<()> {
        let dir = tempdir()?;
        let gz = dir.path().join("gen.txt.gz");
        let plain = dir.path().join("gen.txt");

        let mut w = auto_detect_writer(File::create(&gz)?, &gz)?;
        generate(&mut w, 1_000, DEFAULT_SEED)?;
        w.finish()?;
        generate(&mut File::create(&plain)?, 1_000, DEFAULT_SEED)?;

        let mut from_gz = Vec::new();
        let mut from_plain = Vec::new();
        let s1 = Runner::new(Config::new(&gz)).run(&mut from_gz)?;
        let s2 = Runner::new(Config::new(&plain)).run(&mut from_plain)?;

        assert_eq!(s1.lines, 1_000);
        assert_eq!(s1, s2);
        assert_eq!(from_gz, from_plain);
        assert_eq!(String::from_utf8(from_gz)?.lines().count(), 10);
        Ok(())
    }
}
