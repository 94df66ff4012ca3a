//! HTTP file retrieval over the Bot API.
//!
//! `getFile` resolves a `file_id` to a server-side path, then the file endpoint serves
//! the bytes. Both calls carry the bot token in the URL, so URLs never reach errors or
//! logs.

use std::{
    env, io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tba_types::{
    codec,
    config::FileApiConfig,
    errors::Error,
    files::{create_temp_file, default_temp_pattern, FileRetriever},
    types::{ApiResponse, File},
    Result,
};
use tokio::io::AsyncWriteExt;

#[derive(Clone, Debug)]
pub struct HttpFileRetriever {
    cfg: FileApiConfig,
    http: reqwest::Client,
}

impl HttpFileRetriever {
    pub fn new(cfg: FileApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()
            .map_err(|e| Error::Config(format!("http client build failed: {e}")))?;
        Ok(Self { cfg, http })
    }

    /// Build from `.env` and the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new(FileApiConfig::load()?)
    }

    pub fn config(&self) -> &FileApiConfig {
        &self.cfg
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.cfg.api_url, self.cfg.bot_token)
    }

    /// Download URL for a `file_path` returned by `getFile`.
    pub fn file_url(&self, file_path: &str) -> String {
        format!(
            "{}/file/bot{}/{}",
            self.cfg.api_url,
            self.cfg.bot_token,
            file_path.trim_start_matches('/')
        )
    }

    /// Resolve `file_id` through `getFile`.
    pub async fn get_file(&self, file_id: &str) -> Result<File> {
        tracing::debug!(file_id, "resolving file");

        let resp = self
            .http
            .get(self.method_url("getFile"))
            .query(&[("file_id", file_id)])
            .send()
            .await
            .map_err(|e| http_failure(file_id, e))?;
        // Error replies come with a non-2xx status and a JSON envelope; decode either way.
        let body = resp.bytes().await.map_err(|e| http_failure(file_id, e))?;

        let envelope: ApiResponse<File> = codec::decode(&body)
            .map_err(|e| Error::retrieval(file_id, io::Error::new(io::ErrorKind::InvalidData, e)))?;
        let file = envelope
            .into_result()
            .map_err(|e| Error::retrieval(file_id, io::Error::new(io::ErrorKind::Other, e)))?;

        if file.file_path.is_empty() {
            return Err(Error::retrieval(
                file_id,
                io::Error::new(io::ErrorKind::NotFound, "getFile returned no file_path"),
            ));
        }
        Ok(file)
    }

    async fn stream_to(&self, file: &File, out: &mut tokio::fs::File) -> Result<u64> {
        let file_id = file.file_id.as_str();
        let mut resp = self
            .http
            .get(self.file_url(&file.file_path))
            .send()
            .await
            .map_err(|e| http_failure(file_id, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::retrieval(
                file_id,
                io::Error::new(io::ErrorKind::Other, format!("file endpoint returned {status}")),
            ));
        }

        let mut written = 0u64;
        while let Some(chunk) = resp.chunk().await.map_err(|e| http_failure(file_id, e))? {
            out.write_all(&chunk)
                .await
                .map_err(|e| Error::retrieval(file_id, e))?;
            written += chunk.len() as u64;
        }
        out.flush().await.map_err(|e| Error::retrieval(file_id, e))?;
        Ok(written)
    }

    fn temp_dir(&self, dir: Option<&Path>) -> PathBuf {
        dir.map(Path::to_path_buf)
            .or_else(|| self.cfg.temp_dir.clone())
            .unwrap_or_else(env::temp_dir)
    }
}

#[async_trait]
impl FileRetriever for HttpFileRetriever {
    async fn download(&self, file_id: &str, dest: &Path) -> Result<()> {
        let file = self.get_file(file_id).await?;
        let mut out = tokio::fs::File::create(dest)
            .await
            .map_err(|e| Error::retrieval(file_id, e))?;

        match self.stream_to(&file, &mut out).await {
            Ok(bytes) => {
                tracing::debug!(file_id, bytes, dest = %dest.display(), "file downloaded");
                Ok(())
            }
            Err(e) => {
                drop(out);
                remove_partial(dest).await;
                Err(e)
            }
        }
    }

    async fn download_temp(
        &self,
        file_id: &str,
        dir: Option<&Path>,
        pattern: Option<&str>,
    ) -> Result<PathBuf> {
        let file = self.get_file(file_id).await?;
        let dir = self.temp_dir(dir);
        let pattern = match pattern {
            Some(p) => p.to_string(),
            None => default_pattern(&file),
        };

        let (mut out, path) = create_temp_file(&dir, &pattern)
            .await
            .map_err(|e| Error::retrieval(file_id, e))?;

        match self.stream_to(&file, &mut out).await {
            Ok(bytes) => {
                tracing::debug!(file_id, bytes, path = %path.display(), "file downloaded");
                Ok(path)
            }
            Err(e) => {
                drop(out);
                remove_partial(&path).await;
                Err(e)
            }
        }
    }
}

/// Sanitized file id, keeping the server-side extension when there is one.
fn default_pattern(file: &File) -> String {
    let prefix = default_temp_pattern(&file.file_id);
    match Path::new(&file.file_path).extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.chars().all(|c| c.is_ascii_alphanumeric()) => format!("{prefix}*.{ext}"),
        _ => prefix,
    }
}

fn http_failure(file_id: &str, err: reqwest::Error) -> Error {
    let kind = if err.is_timeout() {
        io::ErrorKind::TimedOut
    } else {
        io::ErrorKind::Other
    };
    Error::retrieval(file_id, io::Error::new(kind, err.without_url()))
}

async fn remove_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove partial download");
        }
    }
}
