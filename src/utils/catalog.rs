// Static storefront content: featured products, testimonials and the
// category filter used by the product grid.

pub const STORE_URL: &str = env!("STORE_URL");

pub const HERO_IMG: &str = "https://images.pexels.com/photos/3912956/pexels-photo-3912956.jpeg";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
  pub id: &'static str,
  pub name: &'static str,
  pub href: &'static str,
  pub img: &'static str,
  pub desc: &'static str,
  pub tags: &'static [&'static str],
}

impl Product {
  fn tagged(&self, tag: &str) -> bool {
    self.tags.contains(&tag)
  }
}

pub const PRODUCTS: [Product; 5] = [
  Product {
    id: "hand-grip",
    name: "Hand Grip 60kg",
    href: "https://movemodefit.com.br/produtos/hand-grip-com-ajuste-fortaleca-suas-maos-de-5kg-a-60kg",
    img: "https://images.pexels.com/photos/6824816/pexels-photo-6824816.jpeg",
    desc: "Pegada de aço para fortalecer antebraços e mãos.",
    tags: &["forca", "acessorios"],
  },
  Product {
    id: "corda",
    name: "Corda de Pular Crossfit Speed",
    href: "https://movemodefit.com.br/produtos/corda-de-pular-profissional-28m-velocidade-ajustavel-em-pvc-treino-de-boxe-cardio-e-fitness-para-adultos-e-criancas",
    img: "https://images.pexels.com/photos/439223/pexels-photo-439223.jpeg",
    desc: "Velocidade e precisão para condicionamento extremo.",
    tags: &["condicionamento"],
  },
  Product {
    id: "yoga",
    name: "Tapete de Yoga Premium",
    href: "https://movemodefit.com.br/produtos/tapete-de-guia-de-posicao-para-agachamento-80x35cm-multiuso-para-yoga-pilates-e-treinamento-de-quadril-e-perna",
    img: "https://images.pexels.com/photos/8436582/pexels-photo-8436582.jpeg",
    desc: "Estabilidade e conforto para suas práticas.",
    tags: &["yoga", "recuperacao"],
  },
  Product {
    id: "elastico",
    name: "Kit de Elásticos de Resistência",
    href: "https://movemodefit.com.br/produtos/kit-11-elasticos-extensores-treino-funcional-completo-para-academia-ou-em-casa",
    img: "https://cdn.builder.io/api/v1/image/assets%2F715d05704b64457bbdb28975ac4a94a3%2Fc2fe44f9ee714aa6bd5f4d5c838e8114?format=webp&width=800",
    desc: "Treino funcional completo, em qualquer lugar.",
    tags: &["forca", "funcional"],
  },
  Product {
    id: "miofascial",
    name: "Rolo de Liberação Miofascial",
    href: "https://movemodefit.com.br/produtos/rolo-de-massagem-em-cortica-natural-pilates-yoga-e-liberacao-miofascial",
    img: "https://cdn.builder.io/api/v1/image/assets%2F715d05704b64457bbdb28975ac4a94a3%2Fb4bd09bf746a4568b96e68629d59c22f?format=webp&width=800",
    desc: "Recuperação muscular e alívio de tensões.",
    tags: &["yoga", "recuperacao"],
  },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
  All,
  Strength,
  Conditioning,
  YogaRecovery,
}

impl Category {
  // tab key / label pairs, keyed the way the storefront names them
  pub const TABS: [(&'static str, &'static str); 4] = [
    ("tudo", "Tudo"),
    ("forca", "Força"),
    ("condicionamento", "Condicionamento"),
    ("yoga", "Yoga & Recuperação"),
  ];

  // Unknown keys fall back to the full catalog
  pub fn from_key(key: &str) -> Self {
    match key {
      "tudo" => Category::All,
      "forca" => Category::Strength,
      "condicionamento" => Category::Conditioning,
      "yoga" => Category::YogaRecovery,
      _ => Category::All,
    }
  }

  fn admits(&self, product: &Product) -> bool {
    match self {
      Category::All => true,
      Category::Strength => product.tagged("forca") || product.tagged("funcional"),
      Category::Conditioning => product.tagged("condicionamento"),
      Category::YogaRecovery => product.tagged("yoga") || product.tagged("recuperacao"),
    }
  }
}

pub fn visible_products(category: Category) -> Vec<&'static Product> {
  PRODUCTS.iter().filter(|p| category.admits(p)).collect()
}

pub fn product_by_id(id: &str) -> Option<&'static Product> {
  PRODUCTS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
  pub img: &'static str,
  pub text: &'static str,
  pub author: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
  Testimonial {
    img: "https://images.pexels.com/photos/6740804/pexels-photo-6740804.jpeg",
    text: "Desde que comecei a usar os produtos da Move Mode Fit, meus treinos evoluíram significativamente.",
    author: "João S.",
  },
  Testimonial {
    img: "https://images.pexels.com/photos/13020494/pexels-photo-13020494.jpeg",
    text: "Qualidade excelente e design impecável. Recomendo muito!",
    author: "Maria F.",
  },
  Testimonial {
    img: "https://images.pexels.com/photos/18720901/pexels-photo-18720901.jpeg",
    text: "Atendimento rápido e produtos duráveis. Experiência 10/10.",
    author: "Carlos T.",
  },
];

pub const UGC_IMAGES: [&str; 6] = [
  "https://images.pexels.com/photos/13020494/pexels-photo-13020494.jpeg",
  "https://images.pexels.com/photos/18720901/pexels-photo-18720901.jpeg",
  "https://images.pexels.com/photos/6740804/pexels-photo-6740804.jpeg",
  "https://images.pexels.com/photos/8436147/pexels-photo-8436147.jpeg",
  "https://images.pexels.com/photos/8436582/pexels-photo-8436582.jpeg",
  "https://images.pexels.com/photos/6824816/pexels-photo-6824816.jpeg",
];

#[cfg(test)]
mod tests {
  use super::*;

  fn ids(products: &[&'static Product]) -> Vec<&'static str> {
    products.iter().map(|p| p.id).collect()
  }

  #[test]
  fn catalog_ids_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for p in &PRODUCTS {
      assert!(seen.insert(p.id), "duplicate product id: {}", p.id);
    }
  }

  #[test]
  fn all_shows_the_full_catalog() {
    assert_eq!(visible_products(Category::All).len(), PRODUCTS.len());
  }

  #[test]
  fn unknown_keys_fall_back_to_all() {
    assert_eq!(Category::from_key("nonsense"), Category::All);
    assert_eq!(visible_products(Category::from_key("nonsense")).len(), 5);
  }

  #[test]
  fn strength_matches_forca_or_funcional() {
    assert_eq!(ids(&visible_products(Category::Strength)), vec!["hand-grip", "elastico"]);
  }

  #[test]
  fn conditioning_matches_by_tag() {
    assert_eq!(ids(&visible_products(Category::Conditioning)), vec!["corda"]);
  }

  #[test]
  fn yoga_recovery_matches_yoga_or_recuperacao() {
    assert_eq!(ids(&visible_products(Category::YogaRecovery)), vec!["yoga", "miofascial"]);
  }

  #[test]
  fn product_lookup_by_id() {
    assert_eq!(product_by_id("corda").map(|p| p.name), Some("Corda de Pular Crossfit Speed"));
    assert!(product_by_id("missing").is_none());
  }
}
