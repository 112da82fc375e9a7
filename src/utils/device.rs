// Device-class detection for the tap-vs-click split on product cards.
// Detected once on mount and refreshed by a resize listener, so click
// handlers read a shared signal instead of re-querying media state inline.

pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
  // coarse pointer or viewport narrower than the breakpoint: card taps
  // open the detail overlay instead of navigating
  CoarseOrNarrow,
  FineWide,
}

impl DeviceClass {
  pub fn intercepts_card_click(&self) -> bool {
    *self == DeviceClass::CoarseOrNarrow
  }
}

pub fn classify(coarse_pointer: bool, viewport_width: f64) -> DeviceClass {
  if coarse_pointer || viewport_width < MOBILE_BREAKPOINT {
    DeviceClass::CoarseOrNarrow
  } else {
    DeviceClass::FineWide
  }
}

pub fn detect() -> DeviceClass {
  let Some(window) = web_sys::window() else {
    return DeviceClass::FineWide;
  };
  let coarse = window
    .match_media("(pointer: coarse)")
    .ok()
    .flatten()
    .map(|query| query.matches())
    .unwrap_or(false);
  let width = window
    .inner_width()
    .ok()
    .and_then(|w| w.as_f64())
    .unwrap_or(MOBILE_BREAKPOINT);
  classify(coarse, width)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fine_pointer_desktop_navigates() {
    assert_eq!(classify(false, 1440.0), DeviceClass::FineWide);
    assert!(!classify(false, 1440.0).intercepts_card_click());
  }

  #[test]
  fn narrow_viewport_opens_the_overlay() {
    assert_eq!(classify(false, 375.0), DeviceClass::CoarseOrNarrow);
    assert!(classify(false, 375.0).intercepts_card_click());
  }

  #[test]
  fn coarse_pointer_wins_even_on_wide_screens() {
    assert_eq!(classify(true, 1440.0), DeviceClass::CoarseOrNarrow);
  }

  #[test]
  fn breakpoint_itself_counts_as_wide() {
    assert_eq!(classify(false, MOBILE_BREAKPOINT), DeviceClass::FineWide);
  }
}
