//! The classification protocol: how a type tells whether some base-typed
//! value is, at runtime, one of its own.

/// `Self` can be recognized among, and narrowed out of, `Base` values.
///
/// There are three ways for a pair of types to be related:
///
///   - `Self` *is* `Base`: every type is (reflexively) classified as itself,
///     without any predicate being run;
///
///   - `Self` is a declared ancestor of `Base` (_e.g._, `Self = dyn Shape`,
///     `Base = Circle`): the relation holds statically, and narrowing is an
///     unsizing upcast. See [`derives!`][crate::derives].
///
///   - `Self` is a variant of the `Base` hierarchy (_e.g._, `Self = Circle`,
///     `Base = dyn Shape`): [`Self::classof()`] inspects the runtime
///     discriminant of the value. See [`hierarchy!`][crate::hierarchy].
///
/// Pairs of types without any such relation simply do not implement this
/// trait, so asking about them is a compile-time error rather than a constant
/// `false`.
///
/// # Safety
///
/// Whenever `Self::classof(it)` returns `true`, then
/// `Self::retype(<*mut Base>::from(it))` must:
///
///   - point to a valid `Self` value, at the same address as `it`;
///
///   - carry pointer metadata such that the size and alignment of the
///     pointee, as computed through it, are those of the allocation `it`
///     lives in. Owning handles (`Box`, `Rc`, `Arc`) rely on this to
///     deallocate with the right layout.
///
/// Moreover, `classof()` must be pure: asking again about the same,
/// unmodified value must yield the same answer.
pub
unsafe
trait Classof<Base : ?Sized> {
    /// The classification predicate.
    fn classof(base: &Base)
      -> bool
    ;

    /// Reinterprets a pointer to a `Base` the predicate has accepted.
    ///
    /// Only the pointer is retyped; nothing is read through it.
    fn retype(ptr: *mut Base)
      -> *mut Self
    ;
}

unsafe
impl<T : ?Sized> Classof<T> for T {
    #[inline]
    fn classof(_: &T)
      -> bool
    {
        true
    }

    #[inline]
    fn retype(ptr: *mut T)
      -> *mut T
    {
        ptr
    }
}

/// A set of candidate types, written as a tuple `(T1, …, Tn)`, any of which
/// may match a `Base` value.
///
/// Implemented for tuples of up to
#[doc = crate::arities::max!()]
/// [`Classof<Base>`] types.
pub
trait AnyOf<Base : ?Sized> {
    /// Whether any of the candidates classifies `base` as its own.
    fn any_classof(base: &Base)
      -> bool
    ;
}

crate::arities::feed_all!(=> any_of!);
// where
macro_rules! any_of {(
    $($T:ident)+
) => (
    impl<Base : ?Sized, $($T),+> AnyOf<Base> for ($($T, )+)
    where
        $($T : Classof<Base>, )+
    {
        #[inline]
        fn any_classof(base: &Base)
          -> bool
        {
            $(<$T as Classof<Base>>::classof(base))||+
        }
    }
)} use any_of;

/// Marker for the base types of a hierarchy (usually a `dyn Trait`), which
/// enables the [`CastExt`][crate::traits::CastExt] method-call syntax on
/// them.
///
/// [`hierarchy!`][crate::hierarchy] implements it for the base it declares.
/// Implementing it for a variant is fine too, and lets `.isa::<…>()` be
/// called on a concretely-typed value directly.
///
/// Smart pointers must *not* be `Polymorphic`: that is what lets
/// `boxed.isa::<T>()` auto-deref to the pointee.
pub
trait Polymorphic {}
