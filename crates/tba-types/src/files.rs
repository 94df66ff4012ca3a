//! Remote file handles and the retrieval port they delegate to.

use std::{
    io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use async_trait::async_trait;

use crate::Result;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(1);

const MAX_TEMP_ATTEMPTS: usize = 10_000;

/// Port for fetching file contents by identifier.
///
/// Implemented by the HTTP adapter in `tba-files`; tests use in-memory fakes.
#[async_trait]
pub trait FileRetriever: Send + Sync {
    /// Download the file to `dest`, creating or truncating it.
    async fn download(&self, file_id: &str, dest: &Path) -> Result<()>;

    /// Download into a fresh temporary file and return its path.
    ///
    /// `dir` defaults to the retriever's temp dir; `pattern` follows [`temp_file_name`].
    async fn download_temp(
        &self,
        file_id: &str,
        dir: Option<&Path>,
        pattern: Option<&str>,
    ) -> Result<PathBuf>;
}

/// A record carrying a remote file handle.
#[async_trait]
pub trait RemoteFile: Sync {
    /// Identifier used to download or reuse the file.
    fn file_id(&self) -> &str;

    /// Stable across bots and time, but cannot be used to download.
    fn file_unique_id(&self) -> &str;

    async fn download(&self, files: &dyn FileRetriever, dest: &Path) -> Result<()> {
        files.download(self.file_id(), dest).await
    }

    async fn download_temp(
        &self,
        files: &dyn FileRetriever,
        dir: Option<&Path>,
        pattern: Option<&str>,
    ) -> Result<PathBuf> {
        files.download_temp(self.file_id(), dir, pattern).await
    }
}

/// Borrowed handle for records that carry more than one file (e.g. `ChatPhoto`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileRef<'a> {
    pub file_id: &'a str,
    pub file_unique_id: &'a str,
}

impl RemoteFile for FileRef<'_> {
    fn file_id(&self) -> &str {
        self.file_id
    }

    fn file_unique_id(&self) -> &str {
        self.file_unique_id
    }
}

/// Implements [`RemoteFile`] for records with `file_id` / `file_unique_id` fields.
macro_rules! remote_file {
    ($($record:ty),+ $(,)?) => {
        $(
            impl $crate::files::RemoteFile for $record {
                fn file_id(&self) -> &str {
                    &self.file_id
                }

                fn file_unique_id(&self) -> &str {
                    &self.file_unique_id
                }
            }
        )+
    };
}

pub(crate) use remote_file;

/// Build a temp file name from `pattern`.
///
/// The last `*` is replaced by `token`; without a `*` the token is appended.
pub fn temp_file_name(pattern: &str, token: &str) -> String {
    match pattern.rfind('*') {
        Some(idx) => format!("{}{token}{}", &pattern[..idx], &pattern[idx + 1..]),
        None => format!("{pattern}{token}"),
    }
}

/// Default temp pattern for a file id: the id reduced to filename-safe characters.
pub fn default_temp_pattern(file_id: &str) -> String {
    let safe: String = file_id
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-') {
                ch
            } else {
                '_'
            }
        })
        .take(64)
        .collect();
    if safe.is_empty() {
        "file_".to_string()
    } else {
        format!("{safe}_")
    }
}

fn temp_token() -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let n = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{:x}{:x}{n}", std::process::id(), ts % 0xffff_ffff)
}

/// Exclusively create a new file in `dir` named after `pattern`.
pub async fn create_temp_file(dir: &Path, pattern: &str) -> io::Result<(tokio::fs::File, PathBuf)> {
    if pattern.contains(std::path::is_separator) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("temp pattern contains a path separator: {pattern}"),
        ));
    }

    for _ in 0..MAX_TEMP_ATTEMPTS {
        let path = dir.join(temp_file_name(pattern, &temp_token()));
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => return Ok((file, path)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }

    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("could not create a unique temp file in {}", dir.display()),
    ))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct FakeRetriever {
        pub calls: Mutex<Vec<(String, PathBuf)>>,
    }

    #[async_trait]
    impl FileRetriever for FakeRetriever {
        async fn download(&self, file_id: &str, dest: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push((file_id.to_string(), dest.to_path_buf()));
            Ok(())
        }

        async fn download_temp(
            &self,
            file_id: &str,
            dir: Option<&Path>,
            pattern: Option<&str>,
        ) -> Result<PathBuf> {
            let dir = dir.map(Path::to_path_buf).unwrap_or_else(std::env::temp_dir);
            let name = temp_file_name(pattern.unwrap_or("fake_*"), "x");
            let path = dir.join(name);
            self.calls
                .lock()
                .unwrap()
                .push((file_id.to_string(), path.clone()));
            Ok(path)
        }
    }

    fn tmp_dir(prefix: &str) -> PathBuf {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let pid = std::process::id();
        PathBuf::from(format!("/tmp/{prefix}-{pid}-{ts}"))
    }

    #[test]
    fn temp_name_replaces_last_star() {
        assert_eq!(temp_file_name("img_*.jpg", "42"), "img_42.jpg");
        assert_eq!(temp_file_name("a*b*c", "X"), "a*bXc");
        assert_eq!(temp_file_name("voice_", "7"), "voice_7");
    }

    #[test]
    fn default_pattern_is_filename_safe() {
        assert_eq!(default_temp_pattern("AgAD/x+y"), "AgAD_x_y_");
        assert_eq!(default_temp_pattern(""), "file_");
    }

    #[tokio::test]
    async fn remote_file_delegates_its_id() {
        let handle = FileRef {
            file_id: "BQAC-doc",
            file_unique_id: "AgADdoc",
        };
        let fake = FakeRetriever::default();

        handle
            .download(&fake, Path::new("/tmp/out.bin"))
            .await
            .unwrap();
        let temp = handle
            .download_temp(&fake, Some(Path::new("/tmp")), Some("doc_*.pdf"))
            .await
            .unwrap();
        assert_eq!(temp, PathBuf::from("/tmp/doc_x.pdf"));

        // Repeated calls reach the retriever each time.
        handle
            .download(&fake, Path::new("/tmp/out.bin"))
            .await
            .unwrap();

        let calls = fake.calls.lock().unwrap();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|(id, _)| id == "BQAC-doc"));
    }

    #[tokio::test]
    async fn temp_files_are_unique_and_exclusive() {
        let dir = tmp_dir("tba-temp");
        std::fs::create_dir_all(&dir).unwrap();

        let (_a, pa) = create_temp_file(&dir, "part_*.bin").await.unwrap();
        let (_b, pb) = create_temp_file(&dir, "part_*.bin").await.unwrap();
        assert_ne!(pa, pb);
        for p in [&pa, &pb] {
            let name = p.file_name().unwrap().to_string_lossy().to_string();
            assert!(name.starts_with("part_") && name.ends_with(".bin"), "{name}");
            assert!(p.exists());
        }

        let err = create_temp_file(&dir, "../escape_*").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
