//! Ownership shapes, seen through one generic accessor.
//!
//! Every shape a polymorphic value may come in (reference, `Box`, `Rc`,
//! `Arc`, `Option`-wrapped) provides two things: a read-only view of the
//! base value, for the predicates to look at, and a way to consume the
//! handle and get it back with a narrower pointee. The [membership test],
//! [checked] and [unchecked] narrowings are written once, against these two
//! traits.
//!
//! Raw pointers are not [`Handle`]s, since looking through them is `unsafe`;
//! see [`ConstPtrCastExt`][crate::traits::ConstPtrCastExt] instead.
//!
//! [membership test]: crate::isa
//! [checked]: crate::dyn_cast
//! [unchecked]: crate::cast_unchecked

use super::*;

mod impls;

/// An ownership shape around a `Self::Base` value.
pub
trait Handle : Sized {
    /// The (static) type of the value being held.
    type Base : ?Sized;

    /// A read-only view of the held value, or `None` when the handle is
    /// absent (_e.g._, an empty `Option`).
    fn view(&self)
      -> Option<&Self::Base>
    ;
}

/// A [`Handle`] which can be consumed and turned into the same shape around a
/// `To` value.
///
/// # Safety
///
/// `retype()` must hand out the very same value (or ownership thereof) which
/// [`view()`][Handle::view] exposes, with its pointer retyped through
/// [`Classof::retype()`]. In particular, it must neither copy nor drop it.
pub
unsafe
trait Retype<To : ?Sized> : Handle {
    /// The shape around a `To`, _e.g._, `Box<To>` for a `Box<Self::Base>`.
    type Output;

    /// # Safety
    ///
    /// The handle must be present, and `To` must classify the held value as
    /// its own (`<To as Classof<Self::Base>>::classof(…) == true`).
    unsafe
    fn retype(self)
      -> Self::Output
    ;
}
