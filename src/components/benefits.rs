use dioxus::prelude::*;

// Static benefit callouts; hover emphasis lives entirely in CSS

#[component]
pub fn Benefits() -> Element {
  rsx! {
    div {
      class: "benefit-grid",
      BenefitCard {
        title: "Durabilidade",
        desc: "Materiais resistentes para acompanhar sua evolução.",
        BenefitIcon { path: "M12 2l8 4v6c0 5-3.5 8.5-8 10-4.5-1.5-8-5-8-10V6z" }
      }
      BenefitCard {
        title: "Design Ergonômico",
        desc: "Conforto e segurança em cada movimento.",
        BenefitIcon { path: "M7 11V6a2 2 0 0 1 4 0v5m0-7a2 2 0 0 1 4 0v7m0-4a2 2 0 0 1 4 0v6a7 7 0 0 1-7 7h-1a7 7 0 0 1-7-7v-3a2 2 0 0 1 3-1.7" }
      }
      BenefitCard {
        title: "Tecnologia Antiderrapante",
        desc: "Aderência superior para treinos intensos.",
        svg {
          class: "benefit-icon",
          xmlns: "http://www.w3.org/2000/svg",
          width: "24",
          height: "24",
          view_box: "0 0 24 24",
          fill: "currentcolor",
          circle { cx: "7", cy: "7", r: "1.6" }
          circle { cx: "17", cy: "7", r: "1.6" }
          circle { cx: "7", cy: "12", r: "1.6" }
          circle { cx: "17", cy: "12", r: "1.6" }
          circle { cx: "7", cy: "17", r: "1.6" }
          circle { cx: "17", cy: "17", r: "1.6" }
        }
      }
      BenefitCard {
        title: "Fácil de Guardar",
        desc: "Leve, compacto e prático para o dia a dia.",
        BenefitIcon { path: "M21 8l-9-5-9 5v8l9 5 9-5zM3 8l9 5 9-5M12 13v9" }
      }
    }
  }
}

#[component]
fn BenefitCard(title: &'static str, desc: &'static str, children: Element) -> Element {
  rsx! {
    div {
      class: "benefit-card",
      div {
        class: "benefit-head",
        {children}
        h4 { "{title}" }
      }
      p { class: "benefit-desc", "{desc}" }
    }
  }
}

#[component]
fn BenefitIcon(path: &'static str) -> Element {
  rsx! {
    svg {
      class: "benefit-icon",
      xmlns: "http://www.w3.org/2000/svg",
      width: "24",
      height: "24",
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
