// 型エイリアス
pub type Tnum = u8; // 牌の数字部分 (1~9)
pub type Index = usize; // その他Index

// Number
pub const HAND_SIZE: usize = 14; // 1つの手役に含まれる牌の数 (変更不可)
pub const TNUM_MIN: Tnum = 1;
pub const TNUM_MAX: Tnum = 9;

// 出力カタログのバージョン
pub const CATALOG_VERSION: &str = "1.0.0";
