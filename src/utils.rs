macro_rules! compile_fail {(
    fn $fname:ident $($rest:tt)*
) => (
    #[cfg(doctest)]
    /// ```rust, compile_fail
    /// use ::classcast::prelude::*;
    ///
    /// trait Shape { fn sides(&self) -> u8; }
    /// struct Circle; impl Shape for Circle { fn sides(&self) -> u8 { 0 } }
    /// struct Square; impl Shape for Square { fn sides(&self) -> u8 { 4 } }
    /// struct Unrelated;
    /// ::classcast::hierarchy! { unsafe dyn Shape {
    ///     Circle => |shape| shape.sides() == 0,
    ///     Square => |shape| shape.sides() == 4,
    /// }}
    ///
    #[doc = stringify!( fn main $($rest)* )]
    #[doc = "\n```"]
    fn $fname() {}
)}
