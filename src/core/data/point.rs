use serde::{Deserialize, Serialize};

/// A pixel position: `x` is the column, `y` is the row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
