//! Typed kernel parameters and their binding from JSON.
//!
//! A [`ParameterList`] is the ordered set of values bound to a kernel's formal
//! parameters. Values are bound once per shading pass and shared read-only by
//! every pixel evaluation.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::color::Color;
use crate::error::KernelError;
use crate::geometry::BoundingRect;
use crate::kernel::Signature;

/// The kind of a formal kernel parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Float,
    Color,
    ColorArray,
    Rect,
}

impl ParamKind {
    /// Lowercase name used in error messages and schemas.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::Float => "float",
            ParamKind::Color => "color",
            ParamKind::ColorArray => "color_array",
            ParamKind::Rect => "rect",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, read-only colors with an explicit length.
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorArray {
    colors: Arc<[Color]>,
}

impl ColorArray {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors: colors.into(),
        }
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the array holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Length as a signed count, saturating at `i64::MAX`.
    pub fn count(&self) -> i64 {
        i64::try_from(self.colors.len()).unwrap_or(i64::MAX)
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

impl From<Vec<Color>> for ColorArray {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

/// A single bound parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Float(f64),
    Color(Color),
    ColorArray(ColorArray),
    Rect(BoundingRect),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Float(_) => ParamKind::Float,
            ParamValue::Color(_) => ParamKind::Color,
            ParamValue::ColorArray(_) => ParamKind::ColorArray,
            ParamValue::Rect(_) => ParamKind::Rect,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<Color> for ParamValue {
    fn from(c: Color) -> Self {
        ParamValue::Color(c)
    }
}

impl From<ColorArray> for ParamValue {
    fn from(a: ColorArray) -> Self {
        ParamValue::ColorArray(a)
    }
}

impl From<BoundingRect> for ParamValue {
    fn from(r: BoundingRect) -> Self {
        ParamValue::Rect(r)
    }
}

/// Ordered parameter values, matched positionally against a [`Signature`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterList {
    values: Vec<ParamValue>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value, builder style.
    pub fn with(mut self, value: impl Into<ParamValue>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn push(&mut self, value: impl Into<ParamValue>) {
        self.values.push(value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ParamValue> {
        self.values.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamValue> {
        self.values.iter()
    }

    /// Kinds of the bound values, in order.
    pub fn kinds(&self) -> Vec<ParamKind> {
        self.values.iter().map(ParamValue::kind).collect()
    }

    /// Builds a parameter list for `signature` from a JSON object keyed by
    /// parameter name, or from a positional JSON array. `null` binds no
    /// parameters.
    ///
    /// Accepted encodings per kind:
    /// - float: a JSON number
    /// - color: `"#rrggbb"`, `"#rrggbbaa"`, or `[r, g, b]` with 0–255 integers
    /// - color array: an array of colors
    /// - rect: `[x, y, w, h]`, `{"x", "y", "width", "height"}`, or `"bounds"`
    ///   for `view_bounds`
    pub fn from_json(
        kernel: &str,
        signature: &Signature,
        params: &Value,
        view_bounds: BoundingRect,
    ) -> Result<Self, KernelError> {
        let specs = signature.params();
        let mut list = ParameterList::new();
        match params {
            Value::Null => {
                if let Some(spec) = specs.first() {
                    return Err(KernelError::MissingParam {
                        kernel: kernel.to_string(),
                        name: spec.name.to_string(),
                    });
                }
            }
            Value::Object(map) => {
                let unknown = map
                    .keys()
                    .find(|k| !specs.iter().any(|s| s.name == k.as_str()));
                if let Some(unknown) = unknown {
                    return Err(KernelError::UnknownParam {
                        kernel: kernel.to_string(),
                        name: unknown.clone(),
                    });
                }
                for spec in specs {
                    let raw = map.get(spec.name).ok_or_else(|| KernelError::MissingParam {
                        kernel: kernel.to_string(),
                        name: spec.name.to_string(),
                    })?;
                    list.push(parse_value(kernel, spec.name, spec.kind, raw, view_bounds)?);
                }
            }
            Value::Array(items) => {
                if items.len() != specs.len() {
                    return Err(KernelError::ArityMismatch {
                        kernel: kernel.to_string(),
                        expected: specs.len(),
                        got: items.len(),
                    });
                }
                for (spec, raw) in specs.iter().zip(items) {
                    list.push(parse_value(kernel, spec.name, spec.kind, raw, view_bounds)?);
                }
            }
            other => {
                return Err(KernelError::ParamTypeMismatch {
                    kernel: kernel.to_string(),
                    name: "params".to_string(),
                    expected: "object or array".to_string(),
                    got: json_type_name(other).to_string(),
                })
            }
        }
        Ok(list)
    }
}

impl From<Vec<ParamValue>> for ParameterList {
    fn from(values: Vec<ParamValue>) -> Self {
        Self { values }
    }
}

/// JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(kernel: &str, name: &str, kind: ParamKind, got: &Value) -> KernelError {
    KernelError::ParamTypeMismatch {
        kernel: kernel.to_string(),
        name: name.to_string(),
        expected: kind.to_string(),
        got: json_type_name(got).to_string(),
    }
}

fn parse_value(
    kernel: &str,
    name: &str,
    kind: ParamKind,
    raw: &Value,
    view_bounds: BoundingRect,
) -> Result<ParamValue, KernelError> {
    match kind {
        ParamKind::Float => raw
            .as_f64()
            .map(ParamValue::Float)
            .ok_or_else(|| mismatch(kernel, name, kind, raw)),
        ParamKind::Color => parse_color(kernel, name, raw).map(ParamValue::Color),
        ParamKind::ColorArray => {
            let items = raw
                .as_array()
                .ok_or_else(|| mismatch(kernel, name, kind, raw))?;
            let colors = items
                .iter()
                .map(|item| parse_color(kernel, name, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ParamValue::ColorArray(ColorArray::new(colors)))
        }
        ParamKind::Rect => parse_rect(kernel, name, raw, view_bounds).map(ParamValue::Rect),
    }
}

fn parse_color(kernel: &str, name: &str, raw: &Value) -> Result<Color, KernelError> {
    match raw {
        Value::String(s) => Color::from_hex(s),
        Value::Array(items) if items.len() == 3 => {
            let mut channels = [0u8; 3];
            for (slot, item) in channels.iter_mut().zip(items) {
                *slot = item
                    .as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(|| {
                        KernelError::InvalidColor(format!(
                            "channel {item} of '{name}' is not an integer in 0..=255"
                        ))
                    })?;
            }
            Ok(Color::from_channels(channels[0], channels[1], channels[2]))
        }
        other => Err(mismatch(kernel, name, ParamKind::Color, other)),
    }
}

fn parse_rect(
    kernel: &str,
    name: &str,
    raw: &Value,
    view_bounds: BoundingRect,
) -> Result<BoundingRect, KernelError> {
    match raw {
        Value::String(s) if s == "bounds" => Ok(view_bounds),
        Value::Array(items) if items.len() == 4 => {
            let nums = items
                .iter()
                .map(Value::as_f64)
                .collect::<Option<Vec<f64>>>()
                .ok_or_else(|| mismatch(kernel, name, ParamKind::Rect, raw))?;
            Ok(BoundingRect::new(nums[0], nums[1], nums[2], nums[3]))
        }
        Value::Object(_) => serde_json::from_value(raw.clone())
            .map_err(|_| mismatch(kernel, name, ParamKind::Rect, raw)),
        other => Err(mismatch(kernel, name, ParamKind::Rect, other)),
    }
}
