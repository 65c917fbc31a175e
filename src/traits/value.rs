//! Direct values, and references thereto.

use crate::{AnyOf, Classof, Polymorphic};

/// Membership test and narrowings for a [`Polymorphic`] value, behind a
/// reference.
///
/// Since smart pointers are not [`Polymorphic`], these methods can also be
/// called on a `Box<dyn Trait>`, `Rc<dyn Trait>`, _etc._, through auto-deref.
///
/// ## Example
///
/// ```rust
/// use ::classcast::prelude::*;
///
/// trait Expr { fn is_literal(&self) -> bool; }
///
/// struct Literal(f64);
/// impl Expr for Literal { fn is_literal(&self) -> bool { true } }
///
/// struct Neg(Box<dyn Expr>);
/// impl Expr for Neg { fn is_literal(&self) -> bool { false } }
///
/// ::classcast::hierarchy! {
///     unsafe dyn Expr {
///         Literal => |expr| expr.is_literal(),
///         Neg => |expr| expr.is_literal().not(),
///     }
/// }
///
/// fn fold(expr: &mut (dyn Expr + 'static)) {
///     if let Some(Neg(inner)) = expr.dyn_cast_mut::<Neg>() {
///         fold(&mut **inner);
///         if let Some(Literal(value)) = inner.dyn_cast_mut::<Literal>() {
///             *value = -*value;
///         }
///     }
/// }
///
/// let mut expr = Neg(Box::new(Literal(42.0)));
/// fold(&mut expr);
/// assert_eq!(expr.0.cast_ref::<Literal>().0, -42.0);
/// ```
#[extension(pub trait CastExt)]
impl<B : ?Sized + Polymorphic> B {
    /// Whether this value is a `To`.
    fn isa<To>(&self)
      -> bool
    where
        To : ?Sized + Classof<B>,
    {
        crate::isa::<To, _>(&self)
    }

    /// Whether this value is any of the `Candidates`, a tuple of types.
    fn isa_any<Candidates>(&self)
      -> bool
    where
        Candidates : AnyOf<B>,
    {
        crate::isa_any::<Candidates, _>(&self)
    }

    /// Sees this value as the `To` it is.
    ///
    /// ## Panics
    ///
    /// If it is not a `To`.
    fn cast_ref<To>(&self)
      -> &To
    where
        To : ?Sized + Classof<B>,
    {
        crate::cast::<To, _>(self)
    }

    /// Sees this value as the `To` it is, mutably.
    ///
    /// ## Panics
    ///
    /// If it is not a `To`.
    fn cast_mut<To>(&mut self)
      -> &mut To
    where
        To : ?Sized + Classof<B>,
    {
        crate::cast::<To, _>(self)
    }

    /// # Safety
    ///
    /// This value must be a `To`.
    unsafe
    fn cast_ref_unchecked<To>(&self)
      -> &To
    where
        To : ?Sized + Classof<B>,
    {
        unsafe {
            // Safety: forwarded to the caller.
            crate::cast_unchecked::<To, _>(self)
        }
    }

    /// # Safety
    ///
    /// This value must be a `To`.
    unsafe
    fn cast_mut_unchecked<To>(&mut self)
      -> &mut To
    where
        To : ?Sized + Classof<B>,
    {
        unsafe {
            // Safety: forwarded to the caller.
            crate::cast_unchecked::<To, _>(self)
        }
    }

    /// Sees this value as a `To`, if it is one.
    fn dyn_cast_ref<To>(&self)
      -> Option<&To>
    where
        To : ?Sized + Classof<B>,
    {
        crate::dyn_cast::<To, _>(self).ok()
    }

    /// Sees this value as a `To`, mutably, if it is one.
    fn dyn_cast_mut<To>(&mut self)
      -> Option<&mut To>
    where
        To : ?Sized + Classof<B>,
    {
        crate::dyn_cast::<To, _>(self).ok()
    }
}
