use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::components::benefits::Benefits;
use crate::components::products::ProductsGrid;
use crate::components::testimonials::Testimonials;
use crate::utils::analytics::{track, track_with_label};
use crate::utils::catalog::{HERO_IMG, STORE_URL, UGC_IMAGES};
use crate::utils::countdown::{remaining_hhmmss, OFFER_WINDOW_MS};
use crate::utils::device::{self, DeviceClass};
use crate::utils::dom::{is_scrolled, scroll_offset, smooth_scroll_to, EventSubscription};
use crate::utils::head::HeadEffects;

const PRODUCTS_SECTION_ID: &str = "produtos";

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("assets/home.css");

  let mut scrolled = use_signal(|| false);
  // single device observer shared with the product grid via context
  let mut device_class = use_context_provider(|| Signal::new(DeviceClass::FineWide));
  // the offer deadline is fixed once at mount and never re-derived
  let deadline = use_hook(|| js_sys::Date::now() + OFFER_WINDOW_MS);
  let mut time_left = use_signal(move || remaining_hhmmss(deadline, js_sys::Date::now()));

  let subscriptions = use_hook(|| Rc::new(RefCell::new(Vec::<EventSubscription>::new())));
  let head_effects = use_hook(|| Rc::new(RefCell::new(None::<HeadEffects>)));

  // Head metadata, scroll flag and device class are all evaluated once up
  // front, so a deep-linked entry that lands mid-page renders the right
  // chrome before any event fires.
  {
    let subscriptions = subscriptions.clone();
    let head_effects = head_effects.clone();
    use_hook(move || {
      head_effects.borrow_mut().replace(HeadEffects::mount());
      device_class.set(device::detect());
      let Some(window) = web_sys::window() else {
        return;
      };
      scrolled.set(is_scrolled(scroll_offset(&window)));
      let on_scroll = {
        let window = window.clone();
        move || scrolled.set(is_scrolled(scroll_offset(&window)))
      };
      let mut subs = subscriptions.borrow_mut();
      subs.push(EventSubscription::passive(&window, "scroll", on_scroll));
      subs.push(EventSubscription::passive(&window, "resize", move || {
        device_class.set(device::detect());
      }));
    });
  }

  // 1s tick against the fixed deadline; the task dies with the component
  use_future(move || async move {
    loop {
      async_std::task::sleep(Duration::from_secs(1)).await;
      time_left.set(remaining_hhmmss(deadline, js_sys::Date::now()));
    }
  });

  use_drop({
    let subscriptions = subscriptions.clone();
    let head_effects = head_effects.clone();
    move || {
      subscriptions.borrow_mut().clear();
      // removes the preload/preconnect links; upserted meta tags stay
      if let Some(mut effects) = head_effects.borrow_mut().take() {
        effects.unmount();
      }
    }
  });

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "landing",
      div { class: "urgency-banner", "Envio em 24h para todo Brasil" }
      div {
        class: if scrolled() { "sticky-header visible" } else { "sticky-header" },
        span { class: "sticky-brand", "Move Mode Fit" }
        a {
          class: "button button-primary",
          href: STORE_URL,
          target: "_blank",
          rel: "noopener noreferrer",
          onclick: move |_evt| track("cta_header_compre_agora", "ecommerce"),
          "Compre Agora"
        }
      }

      header {
        class: "hero",
        div {
          class: "hero-backdrop",
          img { src: HERO_IMG, alt: "Pessoa treinando com equipamentos Move Mode Fit" }
          div { class: "hero-shade" }
        }
        section {
          class: "section hero-content",
          h1 { class: "hero-title", "Transforme seu treino. Supere seus limites." }
          p { class: "hero-sub", "Equipamentos que acompanham sua evolução." }
          div {
            class: "hero-actions",
            button {
              class: "button button-primary button-glow",
              onclick: move |_evt| {
                smooth_scroll_to(PRODUCTS_SECTION_ID);
                track("cta_explore_agora", "engagement");
              },
              "Explore Agora"
            }
            a {
              class: "hero-store-link",
              href: STORE_URL,
              target: "_blank",
              rel: "noopener noreferrer",
              onclick: move |_evt| track_with_label("visit_store", "navigation", "hero_store"),
              "Loja Oficial ↗"
            }
          }
          div {
            class: "trust-chips",
            TrustChip {
              title: "Frete rápido",
              detail: "Envio em até 24h",
              ChipIcon { path: "M10 17h4V5H2v12h3m9 0h2m4 0h2v-3.3a3 3 0 0 0-.9-2.2L19 8h-5v9M5.5 19a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3zm11 0a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3z" }
            }
            TrustChip {
              title: "7 dias para trocas",
              detail: "Processo simples e rápido",
              ChipIcon { path: "M3 12a9 9 0 0 1 15-6.7L21 8m0-5v5h-5m5 4a9 9 0 0 1-15 6.7L3 16m0 5v-5h5" }
            }
            TrustChip {
              title: "Pagamento seguro",
              detail: "Criptografia e proteção",
              ChipIcon { path: "M7 11V7a5 5 0 0 1 10 0v4M5 11h14v10H5zm7 5v2" }
            }
          }
        }
      }

      section {
        class: "section products-section",
        div {
          id: PRODUCTS_SECTION_ID,
          class: "section-heading",
          h2 { "Produtos em Destaque" }
        }
        ProductsGrid {}
      }

      section {
        class: "section",
        div { class: "section-heading", h2 { "O que dizem nossos clientes" } }
        Testimonials {}
      }

      section {
        class: "section",
        div {
          class: "section-heading",
          h2 { "Benefícios dos Produtos" }
          p { "Durabilidade, ergonomia, tecnologia e praticidade." }
        }
        Benefits {}
      }

      section {
        class: "section",
        div {
          class: "section-heading",
          h2 { "Clientes em Ação" }
          p { "Inspiração real para o seu próximo treino." }
        }
        div {
          class: "ugc-grid",
          for (i, src) in UGC_IMAGES.iter().enumerate() {
            div {
              key: "{i}",
              class: "ugc-tile",
              img { src: *src, alt: "Cliente em ação", loading: "lazy" }
            }
          }
        }
      }

      section {
        class: "section final-cta",
        h3 { "Pronto para elevar seu treino?" }
        div {
          class: "countdown-note",
          "Oferta termina em "
          span { class: "countdown-value", "{time_left}" }
        }
        a {
          class: "button button-primary button-glow button-large",
          href: STORE_URL,
          target: "_blank",
          rel: "noopener noreferrer",
          onclick: move |_evt| track("cta_compre_agora", "ecommerce"),
          "Compre Agora"
        }
      }

      div {
        class: "mobile-cta-bar",
        a {
          class: "button button-primary",
          href: STORE_URL,
          target: "_blank",
          rel: "noopener noreferrer",
          onclick: move |_evt| track("cta_mobile_compre_agora", "ecommerce"),
          "Compre Agora"
        }
      }

      footer {
        class: "footer",
        a {
          href: STORE_URL,
          target: "_blank",
          rel: "noopener noreferrer",
          "Move Mode Fit — Loja Oficial"
        }
      }
    }
  }
}

#[component]
fn TrustChip(title: &'static str, detail: &'static str, children: Element) -> Element {
  rsx! {
    div {
      class: "trust-chip",
      {children}
      div {
        p { class: "trust-title", "{title}" }
        p { class: "trust-detail", "{detail}" }
      }
    }
  }
}

#[component]
fn ChipIcon(path: &'static str) -> Element {
  rsx! {
    svg {
      class: "chip-icon",
      xmlns: "http://www.w3.org/2000/svg",
      width: "20",
      height: "20",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      path { d: path }
    }
  }
}
