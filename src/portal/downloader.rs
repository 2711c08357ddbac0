//! Document retrieval and the per-class download batches.

use super::client::PortalClient;
use crate::download::{DocumentResource, Summary};
use crate::model::ClassEntry;
use crate::utils::{expected_length, header_string};
use crate::{Error, Result};

use futures::StreamExt;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

impl PortalClient {
    /// Fetch one document by id.
    ///
    /// Anything but a `200` with a non-empty body is a
    /// [`Error::DownloadFailed`]. Progress is reported in bytes received.
    pub async fn fetch_document(&self, id: &str) -> Result<DocumentResource> {
        let url = self.endpoints.download(id)?;
        debug!(%url, "Fetching document");
        let response = self
            .http
            .get(url)
            .headers(self.ajax_headers(None)?)
            .timeout(self.config.download_timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::DownloadFailed {
                id: id.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let headers = response.headers();
        let content_type = header_string(headers, CONTENT_TYPE);
        let content_disposition = header_string(headers, CONTENT_DISPOSITION);
        let child = self.config.style_options.child();
        let pb = self.progress.add(child.to_progress_bar(expected_length(headers)));
        pb.set_message(id.to_string());

        let mut content = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    child.finish(&pb);
                    return Err(e.into());
                }
            };
            pb.inc(chunk.len() as u64);
            content.extend_from_slice(&chunk);
        }
        child.finish(&pb);

        if content.is_empty() {
            return Err(Error::DownloadFailed {
                id: id.to_string(),
                reason: "empty body".to_string(),
            });
        }

        Ok(DocumentResource {
            id: id.to_string(),
            content,
            content_type,
            content_disposition,
        })
    }

    /// Download every id into `out_dir`, returning the saved paths.
    ///
    /// `sequence` and `title` name files the server did not name. A failed
    /// fetch or write skips that id only; the directory is created if
    /// absent.
    pub async fn download_all(
        &self,
        ids: &[String],
        sequence: usize,
        title: &str,
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let (saved, _failed) = self.download_documents(ids, sequence, title, out_dir).await?;
        Ok(saved)
    }

    async fn download_documents(
        &self,
        ids: &[String],
        sequence: usize,
        title: &str,
        out_dir: &Path,
    ) -> Result<(Vec<PathBuf>, Vec<String>)> {
        fs::create_dir_all(out_dir).await?;

        let mut saved = Vec::with_capacity(ids.len());
        let mut failed = Vec::new();
        for (i, id) in ids.iter().enumerate() {
            let document = match self.fetch_document(id).await {
                Ok(document) => document,
                Err(e) => {
                    warn!(id = %id, error = %e, "Skipping document");
                    failed.push(id.clone());
                    continue;
                }
            };

            let dest = out_dir.join(document.filename(sequence, i + 1, ids.len(), title));
            match fs::write(&dest, &document.content).await {
                Ok(()) => {
                    info!(path = %dest.display(), bytes = document.content.len(), "Saved");
                    saved.push(dest);
                }
                Err(e) => {
                    warn!(path = %dest.display(), error = %e, "Could not save document");
                    failed.push(id.clone());
                }
            }
        }
        Ok((saved, failed))
    }

    /// Resolve and download the classes at the 1-based `selection` indices.
    ///
    /// One [`Summary`] is returned per index. A failing class never stops
    /// the batch; indices outside the listing are reported as skipped.
    pub async fn download_classes(
        &self,
        classes: &[ClassEntry],
        selection: &[usize],
        out_dir: &Path,
    ) -> Vec<Summary> {
        let main_opts = self.config.style_options.main();
        let main = self
            .progress
            .add(main_opts.to_progress_bar(Some(selection.len() as u64)));

        let mut summaries = Vec::with_capacity(selection.len());
        for (n, &index) in selection.iter().enumerate() {
            if n > 0 && !self.config.batch_pause.is_zero() {
                tokio::time::sleep(self.config.batch_pause).await;
            }

            let Some(entry) = index.checked_sub(1).and_then(|i| classes.get(i)) else {
                warn!(index, "Skipping invalid class index");
                summaries.push(Summary::new(index, "").skip("index out of range"));
                main.inc(1);
                continue;
            };

            main.set_message(entry.title.clone());
            summaries.push(self.download_class(index, entry, out_dir).await);
            main.inc(1);
        }
        main_opts.finish(&main);
        summaries
    }

    async fn download_class(&self, index: usize, entry: &ClassEntry, out_dir: &Path) -> Summary {
        let title = if entry.title.is_empty() {
            format!("class_{index}")
        } else {
            entry.title.clone()
        };
        let summary = Summary::new(index, title.clone());

        let ids = match self.resolve(entry).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(index, title = %title, error = %e, "Resolution failed");
                return summary.fail(e);
            }
        };
        if ids.is_empty() {
            let e = Error::ResolutionEmpty { title };
            warn!(index, "{e}");
            return summary.no_documents();
        }

        match self.download_documents(&ids, index, &title, out_dir).await {
            Ok((saved, failed)) => {
                if saved.is_empty() {
                    warn!(index, title = %title, "No files saved for class");
                }
                summary.with_failed(failed).with_saved(saved)
            }
            Err(e) => {
                warn!(index, title = %title, error = %e, "Download batch failed");
                summary.fail(e)
            }
        }
    }
}
