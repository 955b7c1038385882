// 様々な形式で指定された牌を正規化された牌コードに変換するモジュール
mod descriptor;

pub use descriptor::{resolve, resolve_lenient, Marker, ResolveError, TileSpec};
