/// The scalar type of an option's value (or, for a collection, of each of its items).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `i32`
    Integer,
    /// `i64`
    Long,
    /// `i16`
    Short,
    /// `i8`
    Byte,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// `bool`
    Boolean,
    /// `char`
    Character,
    /// `String`
    String,
    /// Any [`Enumerated`](./prelude/trait.Enumerated.html) type.
    Enum,
}

impl ScalarKind {
    pub(crate) fn is_integral(&self) -> bool {
        matches!(
            self,
            ScalarKind::Integer | ScalarKind::Long | ScalarKind::Short | ScalarKind::Byte
        )
    }

    pub(crate) fn is_floating(&self) -> bool {
        matches!(self, ScalarKind::Float | ScalarKind::Double)
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScalarKind::Integer => "integer",
            ScalarKind::Long => "long",
            ScalarKind::Short => "short",
            ScalarKind::Byte => "byte",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Character => "character",
            ScalarKind::String => "string",
            ScalarKind::Enum => "enum",
        };
        write!(f, "{name}")
    }
}
