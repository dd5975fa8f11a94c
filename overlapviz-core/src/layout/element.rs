use serde::Serialize;

use crate::analysis::bbox::Bbox;

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct LabeledBox {
    pub label: String,
    pub bbox: Bbox,
    /// 1-based line in the input the box was read from.
    pub line_no: usize,
}
