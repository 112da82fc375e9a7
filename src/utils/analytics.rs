// Fire-and-forget analytics bridge. Events are pushed onto the page's
// `dataLayer` when a collector is present; without one they are dropped
// after a debug log. Emission must never block or fail the interaction
// that triggered it, so every fallible step bails out silently.

use dioxus::logger::tracing::debug;
use serde::Serialize;
use web_sys::wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Serialize, PartialEq)]
pub struct TrackEvent {
  pub action: &'static str,
  pub category: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
}

pub fn track(action: &'static str, category: &'static str) {
  emit(TrackEvent { action, category, label: None });
}

pub fn track_with_label(action: &'static str, category: &'static str, label: impl Into<String>) {
  emit(TrackEvent { action, category, label: Some(label.into()) });
}

fn emit(event: TrackEvent) {
  let Ok(payload) = serde_json::to_string(&event) else {
    return;
  };
  debug!("track {payload}");

  let Some(window) = web_sys::window() else {
    return;
  };
  let Ok(layer) = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("dataLayer")) else {
    return;
  };
  let Ok(layer) = layer.dyn_into::<js_sys::Array>() else {
    return;
  };
  if let Ok(entry) = js_sys::JSON::parse(&payload) {
    layer.push(&entry);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn label_is_omitted_when_absent() {
    let event = TrackEvent { action: "cta_compre_agora", category: "ecommerce", label: None };
    assert_eq!(
      serde_json::to_string(&event).unwrap(),
      r#"{"action":"cta_compre_agora","category":"ecommerce"}"#
    );
  }

  #[test]
  fn label_is_kept_when_present() {
    let event = TrackEvent {
      action: "product_click",
      category: "ecommerce",
      label: Some("Hand Grip 60kg".to_string()),
    };
    assert_eq!(
      serde_json::to_string(&event).unwrap(),
      r#"{"action":"product_click","category":"ecommerce","label":"Hand Grip 60kg"}"#
    );
  }
}
