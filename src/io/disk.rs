use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// Copy `reader` into `writer` one buffer at a time until end of stream.
///
/// The length of `buffer` is the chunk size. Every chunk is written in full
/// before the next read is issued. Returns the number of bytes copied.
pub fn copy_stream<R, W>(reader: &mut R, writer: &mut W, buffer: &mut [u8]) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    if buffer.is_empty() {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "copy buffer must not be empty",
        ));
    }

    let mut copied = 0u64;
    loop {
        let n = match reader.read(buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..n])?;
        copied += n as u64;
    }
    Ok(copied)
}

/// Read `reader` to end of stream into `buffer`, discarding the data.
pub fn drain_stream<R>(reader: &mut R, buffer: &mut [u8]) -> io::Result<u64>
where
    R: Read + ?Sized,
{
    if buffer.is_empty() {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "read buffer must not be empty",
        ));
    }

    let mut drained = 0u64;
    loop {
        match reader.read(buffer) {
            Ok(0) => break,
            Ok(n) => drained += n as u64,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(drained)
}

/// Benchmark output file, removed when dropped unless told otherwise.
///
/// Dropping the guard on an error path deletes whatever was written so far.
/// On the success path call [`OutputFile::remove`] to see the removal error.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    cleanup_on_drop: bool,
}

impl OutputFile {
    /// Create or truncate `path` for writing
    pub fn create(path: impl Into<PathBuf>) -> io::Result<(Self, File)> {
        let path = path.into();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        Ok((
            Self {
                path,
                cleanup_on_drop: true,
            },
            file,
        ))
    }

    /// Reopen the file for reading
    pub fn open_read(&self) -> io::Result<File> {
        File::open(&self.path)
    }

    /// Disable automatic cleanup (for debugging)
    pub fn keep_on_drop(&mut self) {
        self.cleanup_on_drop = false;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file now, reporting failure instead of swallowing it.
    /// A kept file is left in place.
    pub fn remove(mut self) -> io::Result<()> {
        if !self.cleanup_on_drop {
            return Ok(());
        }
        self.cleanup_on_drop = false;
        fs::remove_file(&self.path)
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        if self.cleanup_on_drop {
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    /// Reader that yields at most `chunk` bytes per call and one spurious
    /// `Interrupted` before the first byte.
    struct Choppy {
        data: Cursor<Vec<u8>>,
        chunk: usize,
        interrupted: bool,
    }

    impl Read for Choppy {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            let len = buf.len().min(self.chunk);
            self.data.read(&mut buf[..len])
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_copy_stream_copies_every_byte() {
        let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
        let mut reader = Cursor::new(data.clone());
        let mut out = Vec::new();
        let mut buffer = vec![0u8; 8192];

        let copied = copy_stream(&mut reader, &mut out, &mut buffer).unwrap();
        assert_eq!(copied, data.len() as u64);
        assert_eq!(out, data);
    }

    #[test]
    fn test_copy_stream_short_reads_and_odd_buffer() {
        let data = vec![0x41u8; 1000];
        let mut reader = Choppy {
            data: Cursor::new(data.clone()),
            chunk: 3,
            interrupted: false,
        };
        let mut out = Vec::new();
        let mut buffer = vec![0u8; 7];

        assert_eq!(copy_stream(&mut reader, &mut out, &mut buffer).unwrap(), 1000);
        assert_eq!(out, data);
    }

    #[test]
    fn test_copy_stream_empty_input() {
        let mut reader = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let mut buffer = vec![0u8; 16];
        assert_eq!(copy_stream(&mut reader, &mut out, &mut buffer).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_copy_stream_propagates_write_error() {
        let mut reader = Cursor::new(vec![1u8; 64]);
        let mut buffer = vec![0u8; 16];
        let err = copy_stream(&mut reader, &mut FailingWriter, &mut buffer).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_zero_length_buffer_rejected() {
        let mut reader = Cursor::new(vec![1u8; 4]);
        let mut out = Vec::new();
        let err = copy_stream(&mut reader, &mut out, &mut []).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let err = drain_stream(&mut reader, &mut []).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_drain_stream_counts_bytes() {
        let mut reader = Choppy {
            data: Cursor::new(vec![0u8; 12_345]),
            chunk: 4096,
            interrupted: false,
        };
        let mut buffer = vec![0u8; 8192];
        assert_eq!(drain_stream(&mut reader, &mut buffer).unwrap(), 12_345);
    }

    #[test]
    fn test_output_file_removed_on_drop() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("test_1mb.rs.out");

        let (guard, mut file) = OutputFile::create(&path).unwrap();
        file.write_all(b"partial").unwrap();
        drop(file);
        assert!(path.exists());

        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn test_output_file_keep_on_drop() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("kept.out");

        let (mut guard, _file) = OutputFile::create(&path).unwrap();
        guard.keep_on_drop();
        drop(guard);
        assert!(path.exists());

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_output_file_truncates_existing() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stale.out");
        std::fs::write(&path, vec![9u8; 4096]).unwrap();

        let (guard, file) = OutputFile::create(&path).unwrap();
        assert_eq!(file.metadata().unwrap().len(), 0);
        drop(file);
        guard.remove().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_output_file_remove_reports_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("gone.out");

        let (guard, file) = OutputFile::create(&path).unwrap();
        drop(file);
        std::fs::remove_file(&path).unwrap();

        let err = guard.remove().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
