// Thin wrappers over the browser APIs the page leans on: owned event
// listeners that detach on drop, the scroll offset read and the
// smooth-scroll jump to an in-page section.

use web_sys::wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, EventTarget, ScrollBehavior, ScrollIntoViewOptions, Window};

pub const SCROLL_THRESHOLD: f64 = 180.0;

pub fn is_scrolled(offset: f64) -> bool {
  offset > SCROLL_THRESHOLD
}

pub fn scroll_offset(window: &Window) -> f64 {
  window.scroll_y().unwrap_or(0.0)
}

// A DOM event listener that removes itself when dropped. Components keep
// these in a list owned by a hook and clear the list in use_drop, which
// guarantees no callback outlives its rendering context.
pub struct EventSubscription {
  target: EventTarget,
  kind: &'static str,
  callback: Closure<dyn FnMut()>,
}

impl EventSubscription {
  pub fn passive(target: &EventTarget, kind: &'static str, handler: impl FnMut() + 'static) -> Self {
    let callback = Closure::<dyn FnMut()>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
      kind,
      callback.as_ref().unchecked_ref(),
      &options,
    );
    EventSubscription { target: target.clone(), kind, callback }
  }
}

impl Drop for EventSubscription {
  fn drop(&mut self) {
    let _ = self
      .target
      .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
  }
}

// No-op when the section isn't mounted
pub fn smooth_scroll_to(section_id: &str) {
  let Some(document) = web_sys::window().and_then(|w| w.document()) else {
    return;
  };
  let Some(section) = document.get_element_by_id(section_id) else {
    return;
  };
  let options = ScrollIntoViewOptions::new();
  options.set_behavior(ScrollBehavior::Smooth);
  section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flag_is_false_at_the_top() {
    assert!(!is_scrolled(0.0));
  }

  #[test]
  fn threshold_is_exclusive() {
    assert!(!is_scrolled(SCROLL_THRESHOLD));
    assert!(is_scrolled(SCROLL_THRESHOLD + 1.0));
  }
}
