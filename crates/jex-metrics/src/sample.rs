/// One published gauge value.
///
/// `(metric, node, url)` is the uniqueness key; `value` is always exactly
/// 0.0 or 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSample {
    pub metric: String,
    pub node: String,
    pub url: String,
    pub value: f64,
}
