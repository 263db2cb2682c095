//! Transient notifications shown at the bottom of the page.
//!
//! A toast is a styled `div` appended to `<body>` and removed again after
//! [`TOAST_MILLIS`]. It never blocks the UI and needs no component of its own.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const TOAST_MILLIS: u32 = 3000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Failed operations.
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: NotificationVariant::Destructive,
        }
    }
}

/// Shows `notification` as a toast. Does nothing outside a browser document.
pub fn notify(notification: &Notification) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_attribute("role", "status").ok();
    if let Ok(title) = document.create_element("strong") {
        title.set_text_content(Some(&notification.title));
        toast.append_child(&title).ok();
    }
    if let Some(description) = &notification.description {
        if let Ok(line) = document.create_element("div") {
            line.set_text_content(Some(description));
            toast.append_child(&line).ok();
        }
    }

    let html_toast: HtmlElement = toast.unchecked_into();
    let background = match notification.variant {
        NotificationVariant::Default => "rgba(0, 0, 0, 0.8)",
        NotificationVariant::Destructive => "#d32f2f",
    };
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10002").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
