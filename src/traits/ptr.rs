//! Raw, non-owning pointers.
//!
//! A null pointer is the absent case: asking whether it `isa` something, or
//! [`cast_ptr`][ConstPtrCastExt::cast_ptr]ing it, panics, whereas
//! [`dyn_cast_ptr`][ConstPtrCastExt::dyn_cast_ptr]ing it just yields null.
//!
//! The methods are not named `cast` so as not to be shadowed by the
//! (unchecked) inherent `<*const _>::cast()`.

use ::core::{ops::Not as _, ptr};

use crate::{AnyOf, Classof};

macro_rules! ptr_cast_ext {(
    $(#[$doc:meta])*
    $Ext:ident for *$mutability:tt
) => (
    $(#[$doc])*
    #[extension(pub trait $Ext)]
    impl<B : ?Sized> *$mutability B {
        /// Whether the pointee is a `To`.
        ///
        /// # Safety
        ///
        /// `self` must be null or valid for reads.
        ///
        /// ## Panics
        ///
        /// If `self` is null.
        unsafe
        fn isa<To>(self)
          -> bool
        where
            To : ?Sized + Classof<B>,
        {
            assert!(self.is_null().not(), "isa<> used on a null pointer");
            crate::isa::<To, _>(&unsafe {
                // Safety: non-null, and valid for reads per the caller.
                &*self
            })
        }

        /// Whether the pointee is any of the `Candidates`, a tuple of types.
        ///
        /// # Safety
        ///
        /// `self` must be null or valid for reads.
        ///
        /// ## Panics
        ///
        /// If `self` is null.
        unsafe
        fn isa_any<Candidates>(self)
          -> bool
        where
            Candidates : AnyOf<B>,
        {
            assert!(self.is_null().not(), "isa<> used on a null pointer");
            crate::isa_any::<Candidates, _>(&unsafe {
                // Safety: non-null, and valid for reads per the caller.
                &*self
            })
        }

        /// Retypes the pointer into a pointer to the `To` the pointee is.
        ///
        /// # Safety
        ///
        /// `self` must be null or valid for reads.
        ///
        /// ## Panics
        ///
        /// If `self` is null, or if the pointee is not a `To`.
        unsafe
        fn cast_ptr<To>(self)
          -> *$mutability To
        where
            To : ?Sized + Classof<B>,
        {
            assert!(
                unsafe {
                    // Safety: forwarded to the caller.
                    self.isa::<To>()
                },
                "cast<> argument of incompatible type!",
            );
            // Retype the pointer itself rather than going through a
            // reference, so as to keep its provenance as is.
            <To as Classof<B>>::retype(self as *mut B) as _
        }

        /// Retypes the pointer into a pointer to a `To`, if the pointee is
        /// one, or returns null.
        ///
        /// A null `self` yields null, without running the classification
        /// predicate.
        ///
        /// # Safety
        ///
        /// `self` must be null or valid for reads.
        unsafe
        fn dyn_cast_ptr<To>(self)
          -> *$mutability To
        where
            To : Classof<B>,
        {
            let view = unsafe {
                // Safety: null or valid for reads, per the caller.
                self.as_ref()
            };
            let _matches @ true = view.map_or(false, <To as Classof<B>>::classof)
            else {
                return ptr::null::<To>() as _;
            };
            <To as Classof<B>>::retype(self as *mut B) as _
        }
    }
)}

ptr_cast_ext! {
    /// Membership test and narrowings for a `*const` pointer.
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
    /// let square = Square;
    /// let shape: *const dyn Shape = &square;
    /// unsafe {
    ///     assert!(shape.isa::<Square>());
    ///     assert!(shape.dyn_cast_ptr::<Circle>().is_null());
    ///     assert_eq!(shape.cast_ptr::<Square>(), &square as *const Square);
    /// }
    /// ```
    ConstPtrCastExt for *const
}

ptr_cast_ext! {
    /// Membership test and narrowings for a `*mut` pointer.
    MutPtrCastExt for *mut
}
