use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::utils::analytics::track;
use crate::utils::carousel::{wrap_index, Carousel};
use crate::utils::catalog::{STORE_URL, TESTIMONIALS};
use crate::utils::dom::EventSubscription;

const TRACK_ID: &str = "testimonial-track";

#[component]
pub fn Testimonials() -> Element {
  let mut selected: Signal<usize> = use_signal(|| 0);
  let subscriptions = use_hook(|| Rc::new(RefCell::new(Vec::<EventSubscription>::new())));

  use_drop({
    let subscriptions = subscriptions.clone();
    move || subscriptions.borrow_mut().clear()
  });

  let count = TESTIMONIALS.len();

  rsx! {
    div {
      class: "testimonial-panel",
      div {
        id: TRACK_ID,
        class: "testimonial-track",
        onmounted: {
          let subscriptions = subscriptions.clone();
          move |_evt| {
            // the settled index drives the indicator dots, one update per settle
            if let Some(carousel) = Carousel::attach(TRACK_ID) {
              subscriptions
                .borrow_mut()
                .push(carousel.on_settle(move |index| selected.set(index)));
            }
          }
        },
        for (i, testimonial) in TESTIMONIALS.iter().enumerate() {
          div {
            key: "{i}",
            class: "testimonial-card",
            div {
              class: "testimonial-head",
              img { src: testimonial.img, alt: testimonial.author, loading: "lazy" }
              div {
                class: "testimonial-stars",
                for star in 0..5 {
                  StarIcon { key: "{star}" }
                }
              }
            }
            p { class: "testimonial-text", "“{testimonial.text}”" }
            p { class: "testimonial-author", "— {testimonial.author}" }
          }
        }
      }
      div {
        class: "testimonial-footer",
        div {
          class: "testimonial-nav",
          button {
            class: "carousel-arrow",
            aria_label: "Depoimento anterior",
            onclick: move |_evt| {
              if let Some(carousel) = Carousel::attach(TRACK_ID) {
                carousel.scroll_to_index(wrap_index(selected(), count, -1));
              }
            },
            "‹"
          }
          div {
            class: "carousel-dots",
            for i in 0..count {
              button {
                key: "{i}",
                class: if selected() == i { "dot active" } else { "dot" },
                aria_label: format!("Ir para depoimento {}", i + 1),
                onclick: move |_evt| {
                  if let Some(carousel) = Carousel::attach(TRACK_ID) {
                    carousel.scroll_to_index(i);
                  }
                },
              }
            }
          }
          button {
            class: "carousel-arrow",
            aria_label: "Próximo depoimento",
            onclick: move |_evt| {
              if let Some(carousel) = Carousel::attach(TRACK_ID) {
                carousel.scroll_to_index(wrap_index(selected(), count, 1));
              }
            },
            "›"
          }
        }
        a {
          class: "testimonial-more",
          href: STORE_URL,
          target: "_blank",
          rel: "noopener noreferrer",
          onclick: move |_evt| track("view_more_testimonials", "engagement"),
          "Veja Mais Depoimentos ↗"
        }
      }
    }
  }
}

#[component]
fn StarIcon() -> Element {
  rsx! {
    svg {
      class: "star-icon",
      xmlns: "http://www.w3.org/2000/svg",
      width: "16",
      height: "16",
      view_box: "0 0 24 24",
      fill: "currentcolor",
      stroke: "currentcolor",
      stroke_width: "1",
      stroke_linejoin: "round",
      path { d: "M12 2l2.9 6.26 6.6.56-5 4.73 1.5 6.45L12 16.9 5.99 20l1.5-6.45-5-4.73 6.6-.56z" }
    }
  }
}
