//! Thin wrappers over browser globals.
//!
//! Every accessor returns `None` off the browser so server-side rendering and
//! native tests never touch `web_sys` imports.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Current `(origin, pathname)` of the page.
#[must_use]
pub fn location_base() -> Option<(String, String)> {
    let location = window()?.location();
    let origin = location.origin().ok()?;
    let path = location.pathname().ok()?;
    Some((origin, path))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    if window().is_some() {
        web_sys::console::error_1(&JsValue::from(message));
    }
}

/// Write text to the system clipboard.
///
/// Fire-and-forget: nothing is reported to the user, a rejected write is only
/// logged at debug level.
pub fn copy_to_clipboard(text: &str) {
    let Some(win) = window() else {
        return;
    };
    let promise = win.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::debug!("Clipboard write rejected: {}", js_error_message(&err));
        }
    });
}

/// Copy an absolute link to `anchor` on the current page.
pub fn copy_anchor_link(anchor: &str) {
    if let Some((origin, path)) = location_base() {
        copy_to_clipboard(&legacy_core::anchor_url(&origin, &path, anchor));
    }
}

/// `log` backend printing to the browser console.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) || window().is_none() {
            return;
        }
        let line = JsValue::from(format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Level baked in at build time through `LEGACY_LOG`, `info` when unset.
#[must_use]
pub fn configured_level() -> log::LevelFilter {
    parse_level(option_env!("LEGACY_LOG"))
}

fn parse_level(raw: Option<&str>) -> log::LevelFilter {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

/// Route `log` records to the console. Later calls are ignored.
pub fn init_logging(level: log::LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
