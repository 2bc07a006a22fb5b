//! Document-level wiring: theme attribute, media queries, navbar tint

use tracing::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::storage::LocalStore;
use crate::core::FramePacer;
use crate::error::HostError;
use crate::prefs::PreferenceStore;
use crate::theme::{navbar_background, resolve_initial_theme, Theme, ThemeSource, THEME_KEY};
use crate::time::now_millis;

const THEME_ATTR: &str = "data-theme";

/// Minimum gap between navbar updates while scrolling
const NAVBAR_THROTTLE_MS: f64 = 10.0;

/// Theme read from the root element's `data-theme` attribute on every call
pub struct DocumentTheme {
    root: Element,
}

impl DocumentTheme {
    pub fn new(document: &Document) -> Result<Self, HostError> {
        let root = document
            .document_element()
            .ok_or(HostError::MissingGlobal("documentElement"))?;
        Ok(Self { root })
    }
}

impl ThemeSource for DocumentTheme {
    fn theme(&self) -> Theme {
        self.root
            .get_attribute(THEME_ATTR)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default()
    }
}

pub fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Set the root attribute, persist it and refresh the toggle icon
fn apply_theme(document: &Document, store: &mut LocalStore, theme: Theme) {
    if let Some(root) = document.document_element() {
        if let Err(e) = root.set_attribute(THEME_ATTR, theme.as_str()) {
            debug!(?e, "Failed to set theme attribute");
        }
    }
    store.set(THEME_KEY, theme.as_str());
    if let Ok(Some(icon)) = document.query_selector(".toggle-icon") {
        icon.set_text_content(Some(theme.toggle_icon()));
    }
}

/// Resolve the initial theme and hook up `#darkModeToggle`
pub fn init_theme(window: &Window, document: &Document, mut store: LocalStore) {
    let prefers_dark = media_matches(window, "(prefers-color-scheme: dark)");
    let theme = resolve_initial_theme(&store, prefers_dark);
    apply_theme(document, &mut store, theme);
    info!(theme = theme.as_str(), prefers_dark, "Theme initialised");

    let Some(toggle) = document.get_element_by_id("darkModeToggle") else {
        debug!("No #darkModeToggle, theme toggle disabled");
        return;
    };
    let doc = document.clone();
    let source = match DocumentTheme::new(document) {
        Ok(source) => source,
        Err(e) => {
            debug!(error = %e, "Theme toggle disabled");
            return;
        }
    };
    let on_click = Closure::wrap(Box::new(move || {
        let next = source.theme().toggled();
        apply_theme(&doc, &mut store, next);
        debug!(theme = next.as_str(), "Theme toggled");
    }) as Box<dyn FnMut()>);
    if let Err(e) = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        debug!(?e, "Failed to attach theme toggle");
    }
    on_click.forget();
}

/// Tint `#navbar` more opaquely once the page scrolls
pub fn init_navbar(window: &Window, document: &Document) {
    let Some(navbar) = document
        .get_element_by_id("navbar")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Ok(theme) = DocumentTheme::new(document) else {
        return;
    };
    let win = window.clone();
    let mut throttle = FramePacer::new(1000.0 / NAVBAR_THROTTLE_MS);
    let on_scroll = Closure::wrap(Box::new(move || {
        if !throttle.ready(now_millis()) {
            return;
        }
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let color = navbar_background(scroll_y, theme.theme());
        if let Err(e) = navbar.style().set_property("background", &color.to_string()) {
            debug!(?e, "Failed to tint navbar");
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()) {
        debug!(?e, "Failed to attach scroll listener");
    }
    on_scroll.forget();
}
