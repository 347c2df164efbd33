use crate::adapters::status::DebugLog;
use crate::core::{Clipboard, FallbackCopier, Notifier, PageSource};
use crate::utils::error::{PanelError, Result};

pub const COPIED_MESSAGE: &str = "Full index.html copied to clipboard.";
pub const MANUAL_COPY_MESSAGE: &str =
    "Could not copy the full page automatically. You may need to copy manually.";
pub const FALLBACK_LOG_MESSAGE: &str =
    "Version pill copied full index.html via fallback clipboard path.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Rich,
    Text,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyPath),
    ManualCopyRequired,
}

pub async fn page_html(source: &dyn PageSource) -> String {
    match source.fetch_html().await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!("Falling back to document snapshot: {}", e);
            source.snapshot_html()
        }
    }
}

async fn write_direct(clipboard: &dyn Clipboard, html: &str) -> Result<CopyPath> {
    let caps = clipboard.capabilities();
    if caps.rich {
        clipboard.write_rich(html, html).await?;
        Ok(CopyPath::Rich)
    } else if caps.text {
        clipboard.write_text(html).await?;
        Ok(CopyPath::Text)
    } else {
        Err(PanelError::ClipboardError {
            message: "Clipboard API unavailable".to_string(),
        })
    }
}

/// Copy the full page source, degrading from a rich write to plain text to the
/// hidden-helper fallback.
pub async fn copy_full_page(
    source: &dyn PageSource,
    clipboard: &dyn Clipboard,
    fallback: &dyn FallbackCopier,
    notifier: &dyn Notifier,
    log: &DebugLog,
) -> CopyOutcome {
    let html = page_html(source).await;

    match write_direct(clipboard, &html).await {
        Ok(path) => {
            tracing::info!("Copied {} bytes via {:?} clipboard path", html.len(), path);
            notifier.notify(COPIED_MESSAGE);
            return CopyOutcome::Copied(path);
        }
        Err(e) => tracing::debug!("Direct clipboard write failed: {}", e),
    }

    if fallback.copy_hidden(&html) {
        notifier.notify(COPIED_MESSAGE);
        log.log(FALLBACK_LOG_MESSAGE, None);
        CopyOutcome::Copied(CopyPath::Fallback)
    } else {
        tracing::warn!("All clipboard paths failed");
        notifier.notify(MANUAL_COPY_MESSAGE);
        CopyOutcome::ManualCopyRequired
    }
}
