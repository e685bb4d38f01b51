use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// One-shot visibility flag: flips the first time an element is seen at or
/// above the threshold and stays set afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    threshold: f64,
    revealed: bool,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, revealed: false }
    }

    /// Feeds one intersection report. Returns `true` only on the report that
    /// reveals the element.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.revealed || !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Live observer registration. Dropping it disconnects the observer.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(element: &Element, threshold: f64, on_reveal: Callback<()>) -> Option<RevealObserver> {
    let mut state = RevealState::new(threshold);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if state.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.unobserve(&entry.target());
                    on_reveal.emit(());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    observer.observe(element);

    Some(RevealObserver { observer, _callback: callback })
}

/// Returns `true` once the referenced element has scrolled into view.
///
/// If the ref never gets attached nothing is observed and the flag simply
/// stays `false`.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let registration = node.cast::<Element>().and_then(|element| {
                    let on_reveal = Callback::from(move |_| visible.set(true));
                    observe_once(&element, config::REVEAL_THRESHOLD, on_reveal)
                });
                move || drop(registration)
            },
            node,
        );
    }

    *visible
}

/// Flag that turns on right after the first render, for pages that animate
/// in on arrival rather than on scroll.
#[hook]
pub fn use_mount_reveal() -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(true);
                || ()
            },
            (),
        );
    }
    *visible
}

/// Classes for an element that fades and slides in with its section.
pub fn reveal_classes(visible: bool) -> Classes {
    classes!("reveal", visible.then_some("visible"))
}

/// Staggered transition delay, only applied once the section is visible so
/// elements appear in sequence.
pub fn reveal_delay(visible: bool, delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", if visible { delay_ms } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let state = RevealState::new(0.2);
        assert!(!state.is_revealed());
    }

    #[test]
    fn reveals_at_threshold() {
        let mut state = RevealState::new(0.2);
        assert!(state.observe(true, 0.2));
        assert!(state.is_revealed());
    }

    #[test]
    fn ignores_reports_below_threshold() {
        let mut state = RevealState::new(0.2);
        assert!(!state.observe(true, 0.1));
        assert!(!state.observe(false, 0.0));
        assert!(!state.is_revealed());
    }

    #[test]
    fn stays_revealed_after_leaving_viewport() {
        let mut state = RevealState::new(0.2);
        assert!(state.observe(true, 0.5));
        assert!(!state.observe(false, 0.0));
        assert!(state.is_revealed());
    }

    #[test]
    fn delay_only_applies_once_visible() {
        assert_eq!(reveal_delay(false, 300), "transition-delay: 0ms;");
        assert_eq!(reveal_delay(true, 300), "transition-delay: 300ms;");
    }

    #[test]
    fn fires_only_once() {
        let mut state = RevealState::new(0.2);
        let flips = [0.3, 0.0, 0.9, 1.0]
            .into_iter()
            .filter(|&ratio| state.observe(ratio > 0.0, ratio))
            .count();
        assert_eq!(flips, 1);
    }
}
