//! Optional-wrapped handles.

use crate::{AnyOf, Classof, Handle, Retype};

/// Membership test and narrowings for an `Option`al handle, where `None` is
/// the absent value.
///
/// ```rust
/// use ::classcast::prelude::*;
/// # trait Shape { fn sides(&self) -> u8; }
/// # struct Circle; impl Shape for Circle { fn sides(&self) -> u8 { 0 } }
/// # struct Square; impl Shape for Square { fn sides(&self) -> u8 { 4 } }
/// # ::classcast::hierarchy! { unsafe dyn Shape {
/// #     Circle => |shape| shape.sides() == 0, Square => |shape| shape.sides() == 4,
/// # }}
///
/// let shapes: [Option<&dyn Shape>; 3] = [Some(&Circle), None, Some(&Square)];
/// let squares = shapes.iter().filter_map(|&it| it.dyn_cast::<Square>()).count();
/// assert_eq!(squares, 1);
/// ```
#[extension(pub trait OptionCastExt)]
impl<H : Handle> Option<H> {
    /// Whether the value is a `To`.
    ///
    /// ## Panics
    ///
    /// If `self` is `None`.
    fn isa<To>(&self)
      -> bool
    where
        To : ?Sized + Classof<H::Base>,
    {
        crate::isa::<To, _>(self)
    }

    /// Whether the value is any of the `Candidates`, a tuple of types.
    ///
    /// ## Panics
    ///
    /// If `self` is `None`.
    fn isa_any<Candidates>(&self)
      -> bool
    where
        Candidates : AnyOf<H::Base>,
    {
        crate::isa_any::<Candidates, _>(self)
    }

    /// Narrows the handle into a handle to the `To` the value is.
    ///
    /// ## Panics
    ///
    /// If `self` is `None`, or if the value is not a `To`.
    fn cast<To>(self)
      -> Option<<H as Retype<To>>::Output>
    where
        H : Retype<To>,
        To : ?Sized + Classof<H::Base>,
    {
        crate::cast::<To, _>(self)
    }

    /// Like [`Self::cast()`], but `None` goes through (as `None`).
    ///
    /// ## Panics
    ///
    /// If the value is not a `To`.
    fn cast_if_present<To>(self)
      -> Option<<H as Retype<To>>::Output>
    where
        H : Retype<To>,
        To : ?Sized + Classof<H::Base>,
    {
        self.map(crate::cast::<To, H>)
    }

    /// Narrows the handle into a handle to a `To`, if there is a value and it
    /// is one.
    ///
    /// **A mismatching handle gets dropped** (for an owning `H`, such as a
    /// `Box`, so does the value): use [`Self::try_cast()`] to get it back
    /// instead.
    fn dyn_cast<To>(self)
      -> Option<<H as Retype<To>>::Output>
    where
        H : Retype<To>,
        To : ?Sized + Classof<H::Base>,
    {
        self.try_cast::<To>().ok().flatten()
    }

    /// Narrows the handle into a handle to a `To`, if there is a value and it
    /// is one, or hands `self` back, untouched (including when it is `None`).
    fn try_cast<To>(self)
      -> Result<Option<<H as Retype<To>>::Output>, Option<H>>
    where
        H : Retype<To>,
        To : ?Sized + Classof<H::Base>,
    {
        crate::dyn_cast::<To, _>(self)
    }
}
