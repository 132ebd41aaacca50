use std::fmt::Formatter;

/// Possible values for an attribute
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum AttributeValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl AttributeValue {
    /// Whether a boolean attribute holding this value should be written out.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttributeValue::Text(value) => {
                !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
            }
            AttributeValue::Bool(value) => *value,
            AttributeValue::Int(value) => *value != 0,
            AttributeValue::Float(value) => *value != 0.0,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Text(a) => write!(f, "{}", a),
            AttributeValue::Int(a) => write!(f, "{}", a),
            AttributeValue::Float(a) => write!(f, "{}", a),
            AttributeValue::Bool(a) => write!(f, "{}", a),
        }
    }
}

/// Anything that can be stored as an attribute value.
pub trait IntoAttributeValue {
    fn into_value(self) -> AttributeValue;
}

impl IntoAttributeValue for AttributeValue {
    fn into_value(self) -> AttributeValue {
        self
    }
}

impl IntoAttributeValue for &str {
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.to_string())
    }
}

impl IntoAttributeValue for String {
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self)
    }
}

impl IntoAttributeValue for &String {
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.clone())
    }
}

impl IntoAttributeValue for bool {
    fn into_value(self) -> AttributeValue {
        AttributeValue::Bool(self)
    }
}

impl IntoAttributeValue for std::fmt::Arguments<'_> {
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.to_string())
    }
}

macro_rules! int_values {
    ($($ty:ty),*) => {
        $(
            impl IntoAttributeValue for $ty {
                fn into_value(self) -> AttributeValue {
                    AttributeValue::Int(self as i64)
                }
            }
        )*
    };
}

int_values!(i8, i16, i32, i64, u8, u16, u32, isize, usize);

impl IntoAttributeValue for f32 {
    fn into_value(self) -> AttributeValue {
        AttributeValue::Float(self as f64)
    }
}

impl IntoAttributeValue for f64 {
    fn into_value(self) -> AttributeValue {
        AttributeValue::Float(self)
    }
}
