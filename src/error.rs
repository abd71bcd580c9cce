use shader::{SlotKind, SlotType};

#[derive(Debug, Fail)]
pub enum RenderError {
    #[fail(display = "uniform `{}` declared as both {:?} and {:?}", _0, _1, _2)]
    UniformTypeConflict(String, SlotType, SlotType),
    #[fail(display = "fragment varying `{}` is not written by the vertex shader", _0)]
    MissingVarying(String),
    #[fail(display = "varying `{}` declared as {:?} by the vertex shader but {:?} by the fragment shader", _0, _1, _2)]
    VaryingTypeMismatch(String, SlotType, SlotType),
    #[fail(display = "{:?} slot `{}` is declared more than once", _0, _1)]
    DuplicateSlot(SlotKind, String),
    #[fail(display = "no {:?} slot named `{}`", _0, _1)]
    UnknownSlot(SlotKind, String),
    #[fail(display = "slot `{}` expects {:?} data, found {:?}", _0, _1, _2)]
    SlotTypeMismatch(String, SlotType, SlotType),
    #[fail(display = "slot `{}` is bound to {} elements but the program draws {} vertices", _0, _1, _2)]
    BindingTooShort(String, usize, usize),
    #[fail(display = "{:?} slot `{}` was never bound", _0, _1)]
    UnboundSlot(SlotKind, String),
    #[fail(display = "index {} is out of range for {} vertices", _0, _1)]
    IndexOutOfRange(usize, usize),
}

pub type RenderResult<T> = Result<T, RenderError>;
