// 牌・グループのデータモデル
mod define;
mod group;
mod instance;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use group::*;
pub use instance::*;
pub use tile::*;
