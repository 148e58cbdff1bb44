pub mod catalog_handler;
pub mod generation_handler;
pub mod page_handler;

pub use catalog_handler::{get_domains, get_subtests};
pub use generation_handler::{generate_question, health_check};
pub use page_handler::index_page;
