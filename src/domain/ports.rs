use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::sync::Arc;

pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
    fn now_local(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now_local().date()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }

    fn now_local(&self) -> NaiveDateTime {
        (**self).now_local()
    }
}

pub trait StatusReporter: Send + Sync {
    fn report(&self, message: &str, is_error: bool);
}

impl<R: StatusReporter + ?Sized> StatusReporter for &R {
    fn report(&self, message: &str, is_error: bool) {
        (**self).report(message, is_error)
    }
}

impl<R: StatusReporter + ?Sized> StatusReporter for Arc<R> {
    fn report(&self, message: &str, is_error: bool) {
        (**self).report(message, is_error)
    }
}

/// A collapsible section carrying a set of class markers and an open flag.
pub trait SectionControl {
    fn has_class(&self, class: &str) -> bool;
    fn set_class(&mut self, class: &str, present: bool);
    fn is_open(&self) -> bool;
    fn set_open(&mut self, open: bool);
}

pub trait LabelControl {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
}

pub trait DateControl {
    fn value(&self) -> &str;
    fn set_value(&mut self, value: &str);
}

#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_html(&self) -> Result<String>;
    /// Serialized form of the live document, used when fetching fails.
    fn snapshot_html(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipboardCapabilities {
    pub rich: bool,
    pub text: bool,
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    fn capabilities(&self) -> ClipboardCapabilities;
    async fn write_rich(&self, plain: &str, html: &str) -> Result<()>;
    async fn write_text(&self, text: &str) -> Result<()>;
}

pub trait FallbackCopier: Send + Sync {
    fn copy_hidden(&self, text: &str) -> bool;
}

pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
