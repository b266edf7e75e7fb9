//! Browser wiring for the sidebar toggle controller.
//!
//! Installs one `click` listener on `document` and runs restoration once the
//! document has loaded. Listeners live for the page lifetime.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Element, Event, HtmlElement, Storage, Window};

use crate::util::delegation::is_target;
use crate::util::sidebar_config::{ResizeStrategy, SidebarConfig};
use crate::util::sidebar_toggle::{SidebarController, SidebarError, SidebarHost};

static INSTALLED: AtomicBool = AtomicBool::new(false);

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// [`SidebarHost`] backed by `<body>`, `localStorage`, and window timers.
pub struct BrowserHost {
    window: Window,
    body: HtmlElement,
    transition_target_id: String,
}

type ListenerSlot = Rc<RefCell<Option<Closure<dyn FnMut(Event)>>>>;

impl BrowserHost {
    /// Bind to the current window and document body.
    ///
    /// `transitionend` waits only count events whose target is the element
    /// with `transition_target_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::Unavailable`] outside a browser page.
    pub fn new(transition_target_id: &str) -> Result<Self, SidebarError> {
        let window = web_sys::window().ok_or(SidebarError::Unavailable("window"))?;
        let body = window
            .document()
            .ok_or(SidebarError::Unavailable("document"))?
            .body()
            .ok_or(SidebarError::Unavailable("body"))?;
        Ok(Self { window, body, transition_target_id: transition_target_id.to_owned() })
    }

    fn storage(&self) -> Result<Storage, SidebarError> {
        self.window
            .local_storage()
            .map_err(|e| SidebarError::Storage(js_message(&e)))?
            .ok_or(SidebarError::Unavailable("localStorage"))
    }
}

fn dispatch_resize(window: &Window) {
    let result = Event::new("resize").and_then(|ev| window.dispatch_event(&ev));
    if let Err(e) = result {
        log::warn!("resize dispatch failed: {}", js_message(&e));
    }
}

impl SidebarHost for BrowserHost {
    fn has_marker(&self, class: &str) -> Result<bool, SidebarError> {
        Ok(self.body.class_list().contains(class))
    }

    fn toggle_marker(&self, class: &str) -> Result<(), SidebarError> {
        self.body
            .class_list()
            .toggle(class)
            .map(|_| ())
            .map_err(|e| SidebarError::Dom(js_message(&e)))
    }

    fn add_marker(&self, class: &str) -> Result<(), SidebarError> {
        self.body
            .class_list()
            .add_1(class)
            .map_err(|e| SidebarError::Dom(js_message(&e)))
    }

    fn read_preference(&self, key: &str) -> Result<Option<String>, SidebarError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SidebarError::Storage(js_message(&e)))
    }

    fn write_preference(&self, key: &str, value: &str) -> Result<(), SidebarError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SidebarError::Storage(js_message(&e)))
    }

    fn schedule_resize(&self, strategy: ResizeStrategy) {
        match strategy {
            ResizeStrategy::Delay(_) => {
                let window = self.window.clone();
                Timeout::new(strategy.delay_millis(), move || dispatch_resize(&window)).forget();
            }
            ResizeStrategy::TransitionEnd { .. } => self.resize_after_transition(strategy.delay_millis()),
        }
    }
}

impl BrowserHost {
    /// Dispatch `resize` on the sidebar container's next `transitionend`, or
    /// after `fallback_ms`, whichever comes first. The listener is removed as
    /// soon as either happens.
    fn resize_after_transition(&self, fallback_ms: u32) {
        let fired = Rc::new(Cell::new(false));
        let slot: ListenerSlot = Rc::new(RefCell::new(None));

        let on_end = {
            let window = self.window.clone();
            let body = self.body.clone();
            let target_id = self.transition_target_id.clone();
            let fired = Rc::clone(&fired);
            let slot = Rc::clone(&slot);
            Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
                // Hover and focus transitions inside the sidebar bubble here too.
                let target = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
                if !is_target(target, &target_id) {
                    return;
                }
                detach_transition_listener(&body, &slot);
                if !fired.replace(true) {
                    dispatch_resize(&window);
                }
            })
        };
        if let Err(e) = self
            .body
            .add_event_listener_with_callback("transitionend", on_end.as_ref().unchecked_ref())
        {
            log::warn!("transitionend listener failed: {}", js_message(&e));
        }
        *slot.borrow_mut() = Some(on_end);

        let window = self.window.clone();
        let body = self.body.clone();
        Timeout::new(fallback_ms, move || {
            detach_transition_listener(&body, &slot);
            if !fired.replace(true) {
                dispatch_resize(&window);
            }
        })
        .forget();
    }
}

fn detach_transition_listener(body: &HtmlElement, slot: &ListenerSlot) {
    if let Some(cb) = slot.borrow_mut().take() {
        let _ = body.remove_event_listener_with_callback("transitionend", cb.as_ref().unchecked_ref());
    }
}

fn run_restore(controller: &SidebarController<BrowserHost>) {
    match controller.restore() {
        Ok(state) => log::debug!("sidebar restored: {state}"),
        Err(e) => log::warn!("sidebar restore failed: {e}"),
    }
}

/// Install the delegated click listener and the page-load restoration.
///
/// Subsequent calls are no-ops, so components may call this on every mount.
///
/// # Errors
///
/// Returns an error if the page has no window, document, or body, or if a
/// listener cannot be registered.
pub fn install() -> Result<(), SidebarError> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let result = install_listeners();
    if result.is_err() {
        INSTALLED.store(false, Ordering::SeqCst);
    }
    result
}

fn install_listeners() -> Result<(), SidebarError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(SidebarError::Unavailable("document"))?;

    let body = document.body().ok_or(SidebarError::Unavailable("body"))?;
    let config = SidebarConfig::from_data_attrs(&Element::from(body));
    let host = BrowserHost::new(&config.transition_target_id)?;
    let controller = Rc::new(SidebarController::new(host, config));
    log::debug!("sidebar toggle installing: resize {:?}", controller.config().resize);

    if document.ready_state() == "loading" {
        let pending = Rc::clone(&controller);
        let on_loaded = Closure::once_into_js(move || run_restore(&pending));
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                on_loaded.unchecked_ref(),
                &options,
            )
            .map_err(|e| SidebarError::Dom(js_message(&e)))?;
    } else {
        run_restore(&controller);
    }

    let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let target = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
        match controller.handle_click(target) {
            Ok(Some(state)) => log::debug!("sidebar toggled: {state}"),
            Ok(None) => {}
            Err(e) => log::warn!("sidebar toggle failed: {e}"),
        }
    });
    document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| SidebarError::Dom(js_message(&e)))?;
    on_click.forget();

    Ok(())
}
