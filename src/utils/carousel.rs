// Minimal capability surface over a horizontal scroll-snap track:
// subscribe-to-settle, scroll-to-index and current-index. Any snapping
// scroll container satisfies this contract, so the testimonial section is
// not tied to one widget.

use web_sys::wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::dom::EventSubscription;

#[derive(Clone)]
pub struct Carousel {
  track: Element,
}

impl Carousel {
  pub fn attach(track_id: &str) -> Option<Self> {
    let document = web_sys::window()?.document()?;
    let track = document.get_element_by_id(track_id)?;
    Some(Carousel { track })
  }

  fn item_offsets(&self) -> Vec<f64> {
    let children = self.track.children();
    let mut offsets = Vec::with_capacity(children.length() as usize);
    for i in 0..children.length() {
      if let Some(item) = children.item(i).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        offsets.push(f64::from(item.offset_left()));
      }
    }
    offsets
  }

  pub fn current_index(&self) -> usize {
    nearest_index(&self.item_offsets(), f64::from(self.track.scroll_left()))
  }

  pub fn scroll_to_index(&self, index: usize) {
    let offsets = self.item_offsets();
    let Some(&left) = offsets.get(index) else {
      return;
    };
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    self.track.scroll_to_with_scroll_to_options(&options);
  }

  // Fires once per settle ("scrollend"), not per scroll frame
  pub fn on_settle(&self, mut handler: impl FnMut(usize) + 'static) -> EventSubscription {
    let probe = self.clone();
    EventSubscription::passive(&self.track, "scrollend", move || handler(probe.current_index()))
  }
}

// Index of the item whose left edge sits closest to the scroll position
pub fn nearest_index(offsets: &[f64], scroll_left: f64) -> usize {
  let mut best = 0;
  let mut best_distance = f64::INFINITY;
  for (i, offset) in offsets.iter().enumerate() {
    let distance = (offset - scroll_left).abs();
    if distance < best_distance {
      best = i;
      best_distance = distance;
    }
  }
  best
}

// Looping navigation: stepping past either end wraps around
pub fn wrap_index(current: usize, len: usize, step: isize) -> usize {
  if len == 0 {
    return 0;
  }
  (current as isize + step).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn next_from_last_wraps_to_first() {
    assert_eq!(wrap_index(2, 3, 1), 0);
  }

  #[test]
  fn previous_from_first_wraps_to_last() {
    assert_eq!(wrap_index(0, 3, -1), 2);
  }

  #[test]
  fn plain_steps_stay_in_range() {
    assert_eq!(wrap_index(0, 3, 1), 1);
    assert_eq!(wrap_index(2, 3, -1), 1);
  }

  #[test]
  fn empty_track_pins_to_zero() {
    assert_eq!(wrap_index(0, 0, 1), 0);
    assert_eq!(nearest_index(&[], 120.0), 0);
  }

  #[test]
  fn settle_position_snaps_to_the_closest_item() {
    let offsets = [0.0, 320.0, 640.0];
    assert_eq!(nearest_index(&offsets, 0.0), 0);
    assert_eq!(nearest_index(&offsets, 150.0), 0);
    assert_eq!(nearest_index(&offsets, 170.0), 1);
    assert_eq!(nearest_index(&offsets, 700.0), 2);
  }
}
