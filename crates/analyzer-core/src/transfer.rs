//! Transfer client: sends one file to the extraction service and returns its reply.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::time::Duration;

use reqwest::multipart;
use serde::Deserialize;

use crate::{Config, SelectedFile, UploadError};

/// Multipart field name the extraction service reads the file from.
pub const FILE_FIELD: &str = "file";

/// JSON body returned by the extraction service on success.
///
/// Only `extracted_text` is used for display. The service also reports the
/// untruncated length and a word count; both are optional here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExtractionResponse {
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub full_text_length: Option<usize>,
    #[serde(default)]
    pub word_count: Option<usize>,
}

/// Error body the service sends with 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Something that can turn an uploaded file into extracted text.
pub trait Extractor: Send + Sync {
    /// Upload `file` and wait for the service's reply.
    fn extract<'a>(
        &'a self,
        file: SelectedFile,
    ) -> Pin<Box<dyn Future<Output = Result<ExtractionResponse, UploadError>> + Send + 'a>>;
}

/// [`Extractor`] backed by a multipart POST to a configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpExtractor {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpExtractor {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &Config) -> Result<Self, UploadError> {
        Self::new(config.backend_url.clone(), config.timeout)
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn endpoint_url(&self) -> Result<reqwest::Url, UploadError> {
        let raw = self.endpoint.as_deref().ok_or(UploadError::MissingEndpoint)?;
        reqwest::Url::parse(raw).map_err(|e| UploadError::InvalidEndpoint {
            url: raw.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Extractor for HttpExtractor {
    fn extract<'a>(
        &'a self,
        file: SelectedFile,
    ) -> Pin<Box<dyn Future<Output = Result<ExtractionResponse, UploadError>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.endpoint_url()?;
            tracing::debug!(
                %url,
                filename = %file.filename,
                mime = %file.mime_type,
                bytes = file.len(),
                "uploading file"
            );

            let part = multipart::Part::bytes(file.data)
                .file_name(file.filename)
                .mime_str(&file.mime_type)?;
            let form = multipart::Form::new().part(FILE_FIELD, part);

            let resp = self.client.post(url).multipart(form).send().await?;
            let status = resp.status();
            let body = resp.text().await?;

            if !status.is_success() {
                let message = serde_json::from_str::<ErrorBody>(&body)
                    .map(|b| b.error)
                    .unwrap_or_else(|_| {
                        let trimmed = body.trim();
                        if trimmed.is_empty() {
                            status
                                .canonical_reason()
                                .unwrap_or("unknown error")
                                .to_string()
                        } else {
                            trimmed.to_string()
                        }
                    });
                return Err(UploadError::Status {
                    status: status.as_u16(),
                    message,
                });
            }

            serde_json::from_str(&body).map_err(|e| UploadError::MalformedResponse(e.to_string()))
        })
    }
}

/// Load a file from disk and send it through `extractor`.
pub async fn upload_path(
    extractor: &dyn Extractor,
    path: &Path,
) -> Result<ExtractionResponse, UploadError> {
    let file = SelectedFile::load(path).await?;
    extractor.extract(file).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_tolerates_missing_fields() {
        let resp: ExtractionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, ExtractionResponse::default());

        let resp: ExtractionResponse =
            serde_json::from_str(r#"{"extracted_text": null, "analysis": {"score": 7}}"#).unwrap();
        assert!(resp.extracted_text.is_none());
    }

    #[test]
    fn response_keeps_service_stats() {
        let resp: ExtractionResponse = serde_json::from_str(
            r#"{"extracted_text": "a b", "full_text_length": 3, "word_count": 2}"#,
        )
        .unwrap();
        assert_eq!(resp.extracted_text.as_deref(), Some("a b"));
        assert_eq!(resp.full_text_length, Some(3));
        assert_eq!(resp.word_count, Some(2));
    }

    #[tokio::test]
    async fn missing_endpoint_fails_at_request_time() {
        let extractor = HttpExtractor::new(None, Duration::from_secs(1)).unwrap();
        let err = extractor
            .extract(SelectedFile::from_bytes("a.pdf", vec![1, 2, 3]))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::MissingEndpoint));
    }

    #[tokio::test]
    async fn invalid_endpoint_is_reported() {
        let extractor =
            HttpExtractor::new(Some("not a url".into()), Duration::from_secs(1)).unwrap();
        let err = extractor
            .extract(SelectedFile::from_bytes("a.pdf", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::InvalidEndpoint { .. }));
    }
}
