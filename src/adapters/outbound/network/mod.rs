/// Network adapters for fetching the chart repository index
mod http_index_repository;
mod index_parser;

pub use http_index_repository::HttpIndexRepository;
pub use index_parser::parse_index;
