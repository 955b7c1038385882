// 手役の組み立て・検証・出力を行うモジュール
mod builder;
mod catalog;
mod patterns;
mod template;
mod validate;

pub use self::{
    builder::{kong, pair, pung, quint, single, FactoryError, GroupBuilder, TileArg},
    catalog::{generate, generate_all_templates, render_catalog, Catalog, Generation},
    patterns::{
        even_pungs_2468, find_pattern, like_kong_kong_pair, p3_k6_p6_k9, sequence_and_kongs,
        PatternFn, PATTERNS,
    },
    template::{flatten, tile_count, HandTemplate, Issue, TemplateRecord, Variation, VariationPart},
    validate::{parse_entry, validate_catalog, validate_template, ValidateError},
};
