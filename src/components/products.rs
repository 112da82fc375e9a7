use dioxus::prelude::*;

use crate::utils::analytics::track_with_label;
use crate::utils::catalog::{product_by_id, visible_products, Category, Product, STORE_URL};
use crate::utils::device::DeviceClass;

const DIALOG_FEATURES: [&str; 4] = [
  "Durabilidade comprovada",
  "Design ergonômico",
  "Tecnologia antiderrapante",
  "Fácil de guardar",
];

#[component]
pub fn ProductsGrid() -> Element {
  let mut selected: Signal<Category> = use_signal(|| Category::All);
  let open_product: Signal<Option<&'static str>> = use_signal(|| None);

  rsx! {
    div {
      class: "filter-tabs",
      for (key, label) in Category::TABS {
        button {
          key: "{key}",
          class: if selected() == Category::from_key(key) { "tab active" } else { "tab" },
          onclick: move |_evt| selected.set(Category::from_key(key)),
          "{label}"
        }
      }
    }
    div {
      class: "product-grid",
      for product in visible_products(selected()) {
        ProductCard { key: "{product.id}", product: *product, open_product }
      }
    }
    if let Some(product) = open_product().and_then(product_by_id) {
      ProductDialog { product: *product, open_product }
    }
  }
}

#[component]
fn ProductCard(product: Product, mut open_product: Signal<Option<&'static str>>) -> Element {
  // shared device observer, see Home; card taps on touch/narrow viewports
  // open the overlay instead of leaving the page
  let device = use_context::<Signal<DeviceClass>>();

  rsx! {
    div {
      class: "product-card",
      a {
        class: "card-link",
        href: product.href,
        target: "_blank",
        rel: "noopener noreferrer",
        onclick: move |evt| {
          track_with_label("product_click", "ecommerce", product.name);
          if device().intercepts_card_click() {
            evt.prevent_default();
            open_product.set(Some(product.id));
          }
        },
        div {
          class: "card-media",
          span { class: "card-badge", "-10% HOJE" }
          img { src: product.img, alt: product.name, loading: "lazy", width: "800", height: "600" }
        }
        div {
          class: "card-body",
          div {
            h3 { class: "card-title", "{product.name}" }
            p { class: "card-desc", "{product.desc}" }
            p { class: "card-note", "Parcele no cartão" }
          }
          span { class: "card-arrow", "→" }
        }
      }
      div {
        class: "card-hover",
        p { class: "card-hover-desc", "{product.desc}" }
        div {
          class: "card-hover-actions",
          a {
            class: "button button-primary",
            href: product.href,
            target: "_blank",
            rel: "noopener noreferrer",
            onclick: move |_evt| track_with_label("ver_produto_overlay", "ecommerce", product.name),
            "Ver Produto"
          }
          button {
            class: "button button-secondary",
            onclick: move |_evt| open_product.set(Some(product.id)),
            "Detalhes"
          }
        }
      }
    }
  }
}

#[component]
fn ProductDialog(product: Product, mut open_product: Signal<Option<&'static str>>) -> Element {
  rsx! {
    div {
      class: "dialog-backdrop",
      onclick: move |_evt| open_product.set(None),
      div {
        class: "dialog",
        onclick: move |evt| evt.stop_propagation(),
        div {
          class: "dialog-header",
          h3 { "{product.name}" }
          button {
            class: "dialog-close",
            aria_label: "Fechar",
            onclick: move |_evt| open_product.set(None),
            "✕"
          }
        }
        div {
          class: "dialog-grid",
          div {
            class: "dialog-media",
            img { src: product.img, alt: product.name, loading: "lazy", width: "800", height: "800" }
          }
          div {
            class: "dialog-info",
            p { class: "dialog-desc", "{product.desc}" }
            ul {
              class: "dialog-features",
              for feature in DIALOG_FEATURES {
                li { key: "{feature}", CheckIcon {} "{feature}" }
              }
            }
            div {
              class: "dialog-actions",
              a {
                class: "button button-primary",
                href: product.href,
                target: "_blank",
                rel: "noopener noreferrer",
                onclick: move |_evt| track_with_label("quickview_ver_produto", "ecommerce", product.name),
                "Ver Produto"
              }
              a {
                class: "button button-outline",
                href: STORE_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                onclick: move |_evt| track_with_label("quickview_compre_agora", "ecommerce", product.name),
                "Compre Agora"
              }
            }
          }
        }
      }
    }
  }
}

#[component]
fn CheckIcon() -> Element {
  rsx! {
    svg {
      class: "check-icon",
      xmlns: "http://www.w3.org/2000/svg",
      width: "16",
      height: "16",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      path { d: "M20 6L9 17l-5-5" }
    }
  }
}
