use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::{debug, info};

use crate::errors::ServiceError;

/// Generic JSON file-backed document collection.
///
/// Holds a `Vec<T>` in memory and mirrors it to a file containing a JSON
/// array. Reads never touch the disk; every write rewrites the whole file.
#[derive(Clone)]
pub struct JsonListStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
    file_path: PathBuf,
}

impl<T> JsonListStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Attach to the collection at `path`. Creates the file with an empty
    /// array if missing; a present but malformed file is an error.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let items = Self::read_file(&file_path).await?;
        debug!(path = %file_path.display(), records = items.len(), "json_store_opened");
        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(items)), file_path }))
    }

    async fn read_file(file_path: &Path) -> Result<Vec<T>, ServiceError> {
        match fs::read(file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::write(file_path, b"[]").await?;
                info!(path = %file_path.display(), "json_store_created");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, items: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(items)?;
        fs::write(&self.file_path, data).await?;
        debug!(path = %self.file_path.display(), records = items.len(), "json_store_persisted");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Snapshot of the whole collection in file order.
    pub async fn all(&self) -> Vec<T> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// First record matching `pred`, scanning in file order.
    pub async fn find<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let items = self.inner.read().await;
        items.iter().find(|item| pred(item)).cloned()
    }

    /// Every record matching `pred`, in file order.
    pub async fn filter<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let items = self.inner.read().await;
        items.iter().filter(|item| pred(item)).cloned().collect()
    }

    /// Append a record and persist. On a failed write the record is dropped
    /// from memory as well.
    pub async fn push(&self, record: T) -> Result<(), ServiceError> {
        let mut items = self.inner.write().await;
        items.push(record);
        if let Err(e) = self.save(&items).await {
            items.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Replace the in-memory collection with the current file contents.
    pub async fn reload(&self) -> Result<usize, ServiceError> {
        let mut items = self.inner.write().await;
        *items = Self::read_file(&self.file_path).await?;
        Ok(items.len())
    }
}
