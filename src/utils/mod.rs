pub mod analytics;
pub mod carousel;
pub mod catalog;
pub mod countdown;
pub mod device;
pub mod dom;
pub mod head;
