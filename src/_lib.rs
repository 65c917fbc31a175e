//! `isa`, `cast`, and `dyn_cast` over `dyn Trait` hierarchies, driven by a
//! classification predicate rather than by [`Any`][::core::any::Any] /
//! `TypeId`.
//!
//! Each variant of a hierarchy tells, through its
//! [`Classof::classof()`] predicate, whether some base-typed value (a
//! `&dyn Trait`, usually looking at some discriminant) is one of its own.
//! On top of this, three primitives are provided:
//!
//!   - the membership test, [`isa()`] (and [`isa_any()`]);
//!   - the unchecked narrowing, [`cast_unchecked()`] (and its asserting,
//!     safe counterpart, [`cast()`]);
//!   - the checked narrowing, [`dyn_cast()`].
//!
//! They work the same whatever the ownership shape the value is held in:
//! references, raw pointers, `Box`es, `Rc`s / `Arc`s, or `Option`s of any of
//! the previous. The [`traits`] module offers them as methods, shape by shape.
//!
//! ## Example
//!
//! ```rust
//! use ::classcast::prelude::*;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! enum ShapeKind { Circle, Rectangle, Triangle }
//!
//! trait Shape {
//!     fn kind(&self) -> ShapeKind;
//! }
//!
//! struct Circle { radius: f64 }
//! struct Rectangle { width: f64, height: f64 }
//! struct Triangle { base: f64, height: f64 }
//!
//! impl Shape for Circle { fn kind(&self) -> ShapeKind { ShapeKind::Circle } }
//! impl Shape for Rectangle { fn kind(&self) -> ShapeKind { ShapeKind::Rectangle } }
//! impl Shape for Triangle { fn kind(&self) -> ShapeKind { ShapeKind::Triangle } }
//!
//! ::classcast::hierarchy! {
//!     unsafe dyn Shape {
//!         Circle => |shape| shape.kind() == ShapeKind::Circle,
//!         Rectangle => |shape| shape.kind() == ShapeKind::Rectangle,
//!         Triangle => |shape| shape.kind() == ShapeKind::Triangle,
//!     }
//! }
//!
//! fn area(shape: &dyn Shape) -> f64 {
//!     if let Some(circle) = shape.dyn_cast_ref::<Circle>() {
//!         3.0 * circle.radius * circle.radius
//!     } else if shape.isa::<Rectangle>() {
//!         let rectangle = unsafe {
//!             // Safety: just checked.
//!             shape.cast_ref_unchecked::<Rectangle>()
//!         };
//!         rectangle.width * rectangle.height
//!     } else {
//!         let triangle = shape.cast_ref::<Triangle>();
//!         triangle.base * triangle.height / 2.0
//!     }
//! }
//!
//! let shapes: Vec<Box<dyn Shape>> = vec![
//!     Box::new(Circle { radius: 1.0 }),
//!     Box::new(Rectangle { width: 2.0, height: 3.0 }),
//!     Box::new(Triangle { base: 4.0, height: 1.0 }),
//! ];
//! let total: f64 = shapes.iter().map(|it| area(&**it)).sum();
//! assert_eq!(total, 3.0 + 6.0 + 2.0);
//!
//! let rectangles = shapes.into_iter().filter_map(|it| it.dyn_cast::<Rectangle>().ok());
//! assert_eq!(rectangles.map(|it| it.width).collect::<Vec<_>>(), [2.0]);
//! ```
//!
//! ## Features
//!
//!   - `alloc` (enabled by default): the `Box`, `Rc` and `Arc` shapes.
#![no_std]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, doctest))]
extern crate std;

#[macro_use]
extern crate extension_traits;

#[cfg(doctest)]
#[macro_use]
extern crate macro_rules_attribute;

#[macro_use]
mod utils;

pub use self::{
    cast::{cast, cast_unchecked, dyn_cast, isa, isa_any},
    classof::{AnyOf, Classof, Polymorphic},
    handle::{Handle, Retype},
};

mod arities;

mod cast;

mod classof;

pub
mod handle;

mod hierarchy;

pub
mod traits;

pub
mod prelude {
    pub use {
        ::core::{
            ops::Not as _,
        },
        crate::{
            cast, cast_unchecked, dyn_cast, isa, isa_any,
            derives, hierarchy,
            AnyOf, Classof, Handle, Polymorphic, Retype,
            traits::*,
        },
    };
}

#[doc(hidden)] /** Not part of the public API */ pub
mod ඞ {
    pub use {
        ::core::{
            primitive::bool,
        },
        crate::{
            classof::{
                Classof,
                Polymorphic,
            },
        },
    };
}

#[cfg(any(test, doctest))]
mod tests;
