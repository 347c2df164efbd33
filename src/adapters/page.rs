use crate::core::PageSource;
use crate::utils::error::{PanelError, Result};
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctype {
    pub name: String,
    pub public_id: String,
    pub system_id: String,
}

impl Doctype {
    pub fn html() -> Self {
        Self {
            name: "html".to_string(),
            public_id: String::new(),
            system_id: String::new(),
        }
    }
}

/// The in-memory document, serialized when the page cannot be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub doctype: Option<Doctype>,
    pub outer_html: String,
}

impl DocumentSnapshot {
    pub fn new(doctype: Option<Doctype>, outer_html: impl Into<String>) -> Self {
        Self {
            doctype,
            outer_html: outer_html.into(),
        }
    }

    pub fn doctype_line(&self) -> String {
        match &self.doctype {
            Some(dt) => {
                let mut line = format!("<!DOCTYPE {}", dt.name);
                if !dt.public_id.is_empty() {
                    line.push_str(&format!(" PUBLIC \"{}\"", dt.public_id));
                }
                if !dt.system_id.is_empty() {
                    line.push_str(&format!(" \"{}\"", dt.system_id));
                }
                line.push_str(">\n");
                line
            }
            None => "<!DOCTYPE html>\n".to_string(),
        }
    }

    pub fn to_html(&self) -> String {
        format!("{}{}", self.doctype_line(), self.outer_html)
    }
}

pub struct HttpPageSource {
    client: Client,
    url: String,
    snapshot: DocumentSnapshot,
}

impl HttpPageSource {
    pub fn new(url: impl Into<String>, snapshot: DocumentSnapshot) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            snapshot,
        }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_html(&self) -> Result<String> {
        tracing::debug!("Fetching page source from: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Page source response status: {}", status);
        if !status.is_success() {
            return Err(PanelError::PageSourceError {
                message: format!("Failed to fetch index.html ({})", status.as_u16()),
            });
        }

        Ok(response.text().await?)
    }

    fn snapshot_html(&self) -> String {
        self.snapshot.to_html()
    }
}
