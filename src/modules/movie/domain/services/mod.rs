pub mod price_parser;
pub mod reconciler;

pub use price_parser::parse_price;
pub use reconciler::MovieReconciler;
