//! Exclusively-owned and shared-owned handles.

use ::alloc::{
    boxed::Box,
    rc::Rc,
    sync::Arc,
};

use crate::Classof;

/// Narrowings for a `Box`, which move the allocation over to the narrowed
/// `Box`.
///
/// The membership test is reached through auto-deref
/// (see [`CastExt`][crate::traits::CastExt]).
///
/// ## Example
///
/// ```rust
/// use ::classcast::prelude::*;
/// # trait Shape { fn sides(&self) -> u8; }
/// # struct Circle; impl Shape for Circle { fn sides(&self) -> u8 { 0 } }
/// # struct Square(f64); impl Shape for Square { fn sides(&self) -> u8 { 4 } }
/// # ::classcast::hierarchy! { unsafe dyn Shape {
/// #     Circle => |shape| shape.sides() == 0, Square => |shape| shape.sides() == 4,
/// # }}
///
/// let shape: Box<dyn Shape> = Box::new(Square(1.5));
/// // A failed `dyn_cast` hands the original `Box` back.
/// let Err(shape) = shape.dyn_cast::<Circle>() else { unreachable!() };
/// let square: Box<Square> = shape.dyn_cast::<Square>().ok().unwrap();
/// assert_eq!(square.0, 1.5);
/// ```
#[extension(pub trait BoxCastExt)]
impl<B : ?Sized> Box<B> {
    /// Narrows into a `Box<To>`.
    ///
    /// ## Panics
    ///
    /// If the value is not a `To` (the value is then dropped while
    /// unwinding).
    fn cast<To>(self)
      -> Box<To>
    where
        To : ?Sized + Classof<B>,
    {
        crate::cast::<To, _>(self)
    }

    /// # Safety
    ///
    /// The value must be a `To`.
    unsafe
    fn cast_unchecked<To>(self)
      -> Box<To>
    where
        To : ?Sized + Classof<B>,
    {
        unsafe {
            // Safety: forwarded to the caller.
            crate::cast_unchecked::<To, _>(self)
        }
    }

    /// Narrows into a `Box<To>` if the value is a `To`, or hands `self` back.
    fn dyn_cast<To>(self)
      -> Result<Box<To>, Box<B>>
    where
        To : ?Sized + Classof<B>,
    {
        crate::dyn_cast::<To, _>(self)
    }
}

// `Rc` and `Arc` share the same API.
macro_rules! shared_cast_ext {(
    $Shared:ident
) => (::paste::paste! {
    #[doc = concat!(
        "Narrowings for an `", stringify!($Shared), "`, which hand out new ",
        "handles aliasing the same value.\n",
        "\n",
        "The membership test is reached through auto-deref ",
        "(see [`CastExt`][crate::traits::CastExt]).",
    )]
    #[extension(pub trait [< $Shared CastExt >])]
    impl<B : ?Sized> $Shared<B> {
        /// Returns a new handle to this value, seen as the `To` it is.
        ///
        /// `self` is left untouched, and there is one more owner of the
        /// value.
        ///
        /// ## Panics
        ///
        /// If the value is not a `To`.
        fn cast<To>(&self)
          -> $Shared<To>
        where
            To : ?Sized + Classof<B>,
        {
            crate::cast::<To, _>($Shared::clone(self))
        }

        /// # Safety
        ///
        /// The value must be a `To`.
        unsafe
        fn cast_unchecked<To>(&self)
          -> $Shared<To>
        where
            To : ?Sized + Classof<B>,
        {
            unsafe {
                // Safety: forwarded to the caller.
                crate::cast_unchecked::<To, _>($Shared::clone(self))
            }
        }

        /// Returns a new handle to this value, seen as a `To`, if it is one.
        ///
        /// The count of owners is only bumped on success.
        fn dyn_cast<To>(&self)
          -> Option<$Shared<To>>
        where
            To : ?Sized + Classof<B>,
        {
            let _matches @ true = crate::isa::<To, _>(self) else {
                return None;
            };
            Some(unsafe {
                // Safety: just checked.
                crate::cast_unchecked::<To, _>($Shared::clone(self))
            })
        }

        /// Narrows this very handle into a handle to a `To`, if the value
        /// is one, or hands it back.
        ///
        /// The count of owners is left untouched either way.
        fn try_cast<To>(self)
          -> Result<$Shared<To>, $Shared<B>>
        where
            To : ?Sized + Classof<B>,
        {
            crate::dyn_cast::<To, _>(self)
        }
    }
})}

shared_cast_ext!(Rc);
shared_cast_ext!(Arc);
