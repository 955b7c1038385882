use tracing::warn;

use crate::model::*;

// [Marker]
// 牌の種別を表す記号. 呼び出し元によって単体の文字列だったり(役割, 種別)の組だったりする.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Missing,
    Scalar(String),
    Composite(Vec<String>),
}

impl Marker {
    // 組の場合は2番目(なければ1番目)の要素を採用
    // "(pung, b)" のように組を文字列化したものも同様に扱う
    pub fn flatten(&self) -> String {
        match self {
            Marker::Missing => String::new(),
            Marker::Scalar(s) => unwrap_pair_literal(s).unwrap_or_else(|| s.clone()),
            Marker::Composite(v) => v.get(1).or_else(|| v.first()).cloned().unwrap_or_default(),
        }
    }
}

fn unwrap_pair_literal(s: &str) -> Option<String> {
    let t = s.trim();
    let inner = t
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .or_else(|| t.strip_prefix('[').and_then(|r| r.strip_suffix(']')))?;
    let items: Vec<&str> = inner
        .split(',')
        .map(|p| p.trim().trim_matches(|c| c == '\'' || c == '"'))
        .filter(|p| !p.is_empty())
        .collect();
    if items.len() > 1 {
        Some(items[1].to_string())
    } else {
        None
    }
}

impl From<&str> for Marker {
    fn from(s: &str) -> Self {
        Marker::Scalar(s.to_string())
    }
}

impl From<String> for Marker {
    fn from(s: String) -> Self {
        Marker::Scalar(s)
    }
}

impl From<char> for Marker {
    fn from(c: char) -> Self {
        Marker::Scalar(c.to_string())
    }
}

impl From<Suit> for Marker {
    fn from(s: Suit) -> Self {
        Marker::Scalar(s.letter().to_string())
    }
}

impl From<Option<&str>> for Marker {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Marker::Missing, Marker::from)
    }
}

impl From<(&str, &str)> for Marker {
    fn from((a, b): (&str, &str)) -> Self {
        Marker::Composite(vec![a.to_string(), b.to_string()])
    }
}

impl From<Vec<String>> for Marker {
    fn from(v: Vec<String>) -> Self {
        Marker::Composite(v)
    }
}

// [TileSpec]
// ファクトリに渡される牌の指定. (数字, 種別) の組か, "Dc" や "F" のような牌コード単体.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSpec {
    pub face: Face,
    pub marker: Marker,
}

impl TileSpec {
    pub fn new(face: impl Into<Face>, marker: impl Into<Marker>) -> Self {
        Self {
            face: face.into(),
            marker: marker.into(),
        }
    }

    // (数字, 種別記号) の組に正規化する
    // 三元牌と花牌は ('D', 'c') / "Dc" / (1, "Dc") などの表記ゆれを (1, "Dc") の形に揃える
    pub fn normalize(&self) -> (Face, String) {
        // 数字部分が三元牌の牌コードなら種別記号は見ない
        if let Face::Sym(s) = &self.face {
            if let Some(suit) = dragon_code(s) {
                return (Face::Num(1), format!("D{}", suit));
            }
        }

        let mut face = self.face.clone();
        let mut marker = self.marker.flatten();

        // 数字部分に牌コードが直接指定された場合 ("Dc", "F", "N" など)
        // 'D' 単体は種別 'd' と区別できないのでそのまま
        if marker.is_empty() {
            if let Face::Sym(s) = &self.face {
                if let Ok(TileCode::Suited(n, suit)) = s.parse::<TileCode>() {
                    face = Face::Num(n);
                    marker = suit.to_string();
                } else if face.number().is_none() && !is_suit_letter(s) {
                    marker = s.clone();
                    face = Face::Num(1);
                }
            }
        }

        if face.is_sym("D") && is_suit_letter(&marker) {
            let code = format!("D{}", marker.to_ascii_lowercase());
            return (Face::Num(1), code);
        }
        if let Some(s) = dragon_code(&marker) {
            return (Face::Num(1), format!("D{}", s));
        }
        if is_flower(&face, &marker) {
            return (Face::Num(1), "F".to_string());
        }
        (face, marker)
    }
}

impl From<&str> for TileSpec {
    fn from(s: &str) -> Self {
        Self::new(s, Marker::Missing)
    }
}

impl From<char> for TileSpec {
    fn from(c: char) -> Self {
        Self::new(c, Marker::Missing)
    }
}

impl<M: Into<Marker>> From<(Tnum, M)> for TileSpec {
    fn from((n, m): (Tnum, M)) -> Self {
        Self::new(n, m)
    }
}

impl<M: Into<Marker>> From<(char, M)> for TileSpec {
    fn from((c, m): (char, M)) -> Self {
        Self::new(c, m)
    }
}

impl<M: Into<Marker>> From<(&str, M)> for TileSpec {
    fn from((s, m): (&str, M)) -> Self {
        Self::new(s, m)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no suit or marker given for face '{face}'")]
    MissingMarker { face: String },
    #[error("unknown tile marker '{marker}' (face '{face}')")]
    UnknownMarker { face: String, marker: String },
    #[error("face '{face}' is not a tile number for suit '{marker}'")]
    FaceOutOfRange { face: String, marker: String },
}

#[inline]
fn is_suit_letter(s: &str) -> bool {
    let mut cs = s.chars();
    matches!((cs.next(), cs.next()), (Some(c), None) if Suit::from_letter(c).is_some())
}

// "Dc", "db", "DD" -> 種別 (1文字目は大文字小文字を区別しない)
fn dragon_code(s: &str) -> Option<Suit> {
    let mut cs = s.chars();
    match (cs.next(), cs.next(), cs.next()) {
        (Some('D' | 'd'), Some(c), None) => Suit::from_letter(c),
        _ => None,
    }
}

fn is_flower(face: &Face, marker: &str) -> bool {
    marker.eq_ignore_ascii_case("f")
        || marker.eq_ignore_ascii_case("flower")
        || face.is_sym("F")
        || face.is_sym("flower")
}

fn wind_synonym(s: &str) -> Option<Wind> {
    match s {
        "n" | "north" => Some(Wind::North),
        "e" | "east" => Some(Wind::East),
        "s" | "south" => Some(Wind::South),
        "w" | "west" => Some(Wind::West),
        _ => None,
    }
}

fn dragon_color_synonym(s: &str) -> Option<DragonColor> {
    match s {
        "dragon_r" | "dragon_red" | "rd" => Some(DragonColor::Red),
        "dragon_g" | "dragon_green" | "gd" => Some(DragonColor::Green),
        "dragon_w" | "dragon_white" | "wd" => Some(DragonColor::White),
        _ => None,
    }
}

fn suit_synonym(s: &str) -> Option<Suit> {
    match s {
        "b" | "bam" | "bamboo" => Some(Suit::Bamboo),
        "c" | "crack" | "character" => Some(Suit::Character),
        "d" | "dot" | "coin" => Some(Suit::Dot),
        _ => None,
    }
}

// 数字部分と種別記号から牌コードを決定する. 判定は上から順に優先.
pub fn resolve(face: &Face, marker: &str) -> Result<TileCode, ResolveError> {
    let lower = marker.to_ascii_lowercase();

    // 三元牌 (牌コード指定)
    if let Some(s) = dragon_code(marker) {
        return Ok(TileCode::Dragon(s));
    }
    // 三元牌 ('D' + 種別)
    if face.is_sym("D") && is_suit_letter(marker) {
        if let Some(s) = suit_synonym(&lower) {
            return Ok(TileCode::Dragon(s));
        }
    }
    // 花牌
    if is_flower(face, marker) {
        return Ok(TileCode::Flower);
    }
    // 風牌
    if let Some(w) = wind_synonym(&lower) {
        return Ok(TileCode::Wind(w));
    }
    // 三元牌 (色指定)
    if let Some(c) = dragon_color_synonym(&lower) {
        return Ok(TileCode::ColorDragon(c));
    }
    // 数牌
    if let Some(s) = suit_synonym(&lower) {
        return match face.number() {
            Some(n) if (TNUM_MIN..=TNUM_MAX).contains(&n) => Ok(TileCode::Suited(n, s)),
            _ => Err(ResolveError::FaceOutOfRange {
                face: face.to_string(),
                marker: marker.to_string(),
            }),
        };
    }

    if marker.is_empty() {
        Err(ResolveError::MissingMarker {
            face: face.to_string(),
        })
    } else {
        Err(ResolveError::UnknownMarker {
            face: face.to_string(),
            marker: marker.to_string(),
        })
    }
}

// 解決できなかった場合は 数字 + 記号の1文字目(小文字) を牌コードとする. 記号が空なら "?".
pub fn resolve_lenient(face: &Face, marker: &str) -> TileCode {
    match resolve(face, marker) {
        Ok(code) => code,
        Err(e) => {
            let text = match marker.chars().next() {
                Some(c) => format!("{}{}", face, c.to_ascii_lowercase()),
                None => "?".to_string(),
            };
            warn!(error = %e, fallback = %text, "tile marker not resolved");
            TileCode::Unresolved(text)
        }
    }
}
