// Document-head side effects: title, social metadata and resource hints.
// Meta tags are upserted (find-or-create, then set) so re-mounting never
// duplicates them. Only the link elements this module created are removed
// on teardown; the upserted meta tags intentionally stay behind as the
// last-rendered page description.

use web_sys::{Document, Element};

use super::catalog::HERO_IMG;

const PAGE_TITLE: &str = "Move Mode Fit — Transforme seu treino";
const PAGE_DESCRIPTION: &str =
  "Transforme seu treino com a Move Mode Fit: produtos duráveis, ergonômicos e prontos para sua evolução.";
const OG_DESCRIPTION: &str = "Equipamentos que acompanham sua evolução.";

const PRECONNECT_ORIGINS: [&str; 2] = ["https://cdn.builder.io", "https://images.pexels.com"];

pub struct HeadEffects {
  // explicit ownership list: teardown removes exactly these elements
  created_links: Vec<Element>,
}

impl HeadEffects {
  pub fn mount() -> Self {
    let mut effects = HeadEffects { created_links: Vec::new() };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
      return effects;
    };

    document.set_title(PAGE_TITLE);
    ensure_meta(&document, "name", "description", PAGE_DESCRIPTION);
    ensure_meta(&document, "property", "og:title", PAGE_TITLE);
    ensure_meta(&document, "property", "og:description", OG_DESCRIPTION);
    ensure_meta(&document, "property", "og:type", "website");
    ensure_meta(&document, "property", "og:image", HERO_IMG);

    for origin in PRECONNECT_ORIGINS {
      if let Some(link) = append_link(&document, &[("rel", "preconnect"), ("href", origin)]) {
        effects.created_links.push(link);
      }
    }
    if let Some(link) =
      append_link(&document, &[("rel", "preload"), ("as", "image"), ("href", HERO_IMG)])
    {
      effects.created_links.push(link);
    }
    effects
  }

  pub fn unmount(&mut self) {
    for link in self.created_links.drain(..) {
      link.remove();
    }
  }
}

// Idempotent upsert keyed by the attribute selector; missing head is a no-op
pub fn ensure_meta(document: &Document, attr: &str, key: &str, content: &str) {
  let Some(head) = document.head() else {
    return;
  };
  let selector = format!("meta[{attr}='{key}']");
  let existing = head.query_selector(&selector).ok().flatten();
  match existing {
    Some(tag) => {
      let _ = tag.set_attribute("content", content);
    }
    None => {
      let Ok(tag) = document.create_element("meta") else {
        return;
      };
      let _ = tag.set_attribute(attr, key);
      let _ = tag.set_attribute("content", content);
      let _ = head.append_child(&tag);
    }
  }
}

fn append_link(document: &Document, attrs: &[(&str, &str)]) -> Option<Element> {
  let head = document.head()?;
  let link = document.create_element("link").ok()?;
  for &(name, value) in attrs {
    link.set_attribute(name, value).ok()?;
  }
  head.append_child(&link).ok()?;
  Some(link)
}
