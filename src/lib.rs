// 麻雀の手役テンプレートのカタログ生成
//
// generate_all_templates() でカタログを生成し, render_catalog() でJSONに変換する.

pub mod convert;
pub mod hand;
pub mod model;

pub use hand::{generate, generate_all_templates, render_catalog, Catalog, Generation};
