use crate::keys::{generate_video_filename, validate_filename};
use crate::traits::{ByteStream, StorageError, StorageResult, VideoStorage};
use async_trait::async_trait;
use chrono::Utc;
use deepfake_core::models::StoredVideo;
use futures::StreamExt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;

/// Attempts at finding an unused filename before giving up.
const MAX_NAME_ATTEMPTS: usize = 3;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Directory for uploaded videos (e.g., "temp"); created if absent
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        let absolute = std::path::absolute(&base_path).unwrap_or_else(|_| base_path.clone());
        tracing::info!(path = %absolute.display(), "Upload directory ready");

        Ok(LocalStorage { base_path })
    }

    fn filename_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        validate_filename(filename)?;
        Ok(self.base_path.join(filename))
    }

    /// Open a new file that did not exist before, retrying with a fresh name on collision.
    async fn create_unique(&self, extension: &str) -> StorageResult<(String, PathBuf, fs::File)> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let filename = generate_video_filename(Utc::now(), extension);
            let path = self.filename_to_path(&filename)?;

            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => return Ok((filename, path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::debug!(path = %path.display(), "Generated filename already taken");
                    continue;
                }
                Err(e) => {
                    return Err(StorageError::UploadFailed(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    )))
                }
            }
        }

        Err(StorageError::UploadFailed(format!(
            "Could not allocate a unique filename after {} attempts",
            MAX_NAME_ATTEMPTS
        )))
    }

    async fn write_stream(
        file: &mut fs::File,
        path: &Path,
        mut stream: ByteStream<'_>,
    ) -> StorageResult<u64> {
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to write file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            written += chunk.len() as u64;
        }

        file.flush().await?;
        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        Ok(written)
    }
}

#[async_trait]
impl VideoStorage for LocalStorage {
    async fn store_stream(
        &self,
        extension: &str,
        stream: ByteStream<'_>,
    ) -> StorageResult<StoredVideo> {
        let start = std::time::Instant::now();
        let (filename, path, mut file) = self.create_unique(extension).await?;

        tracing::info!(path = %path.display(), "Saving upload");

        let written = match Self::write_stream(&mut file, &path, stream).await {
            Ok(written) => written,
            Err(e) => {
                drop(file);
                if let Err(cleanup_err) = fs::remove_file(&path).await {
                    tracing::debug!(
                        error = %cleanup_err,
                        path = %path.display(),
                        "Failed to remove partial upload"
                    );
                }
                return Err(e);
            }
        };

        let size_bytes = fs::metadata(&path).await?.len();
        if size_bytes != written {
            tracing::warn!(
                path = %path.display(),
                written,
                size_bytes,
                "Stored size differs from bytes written"
            );
        }

        tracing::info!(
            path = %path.display(),
            filename = %filename,
            size_bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(StoredVideo {
            filename,
            path,
            size_bytes,
        })
    }

    async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.filename_to_path(filename)?;
        Ok(fs::try_exists(&path).await?)
    }

    async fn content_length(&self, filename: &str) -> StorageResult<u64> {
        let path = self.filename_to_path(filename)?;
        match fs::metadata(&path).await {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(filename.to_string()))
            }
            Err(e) => Err(StorageError::IoError(e)),
        }
    }

    async fn open_stream(&self, filename: &str) -> StorageResult<ByteStream<'static>> {
        let path = self.filename_to_path(filename)?;

        let file = match fs::File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(filename.to_string()))
            }
            Err(e) => {
                return Err(StorageError::ReadFailed(format!(
                    "Failed to open file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::debug!(path = %path.display(), "Streaming stored video");

        let stream = ReaderStream::new(file).map(|chunk| {
            chunk.map_err(|e| StorageError::ReadFailed(format!("Failed to read chunk: {}", e)))
        });

        Ok(stream.boxed())
    }

    fn base_path(&self) -> &Path {
        &self.base_path
    }
}
