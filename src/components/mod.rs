pub mod products;
pub mod testimonials;
pub mod benefits;
