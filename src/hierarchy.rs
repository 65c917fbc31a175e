//! Declaring a `dyn Trait` hierarchy.

/// Declares the variants of a `dyn Trait` hierarchy, along with the
/// classification predicate identifying each of them.
///
/// ## Syntax
///
/// ```rust,ignore
/// ::classcast::hierarchy! {
///     unsafe dyn Base {
///         Variant => |it| /* predicate on `it: &dyn Base` */,
///         …
///     }
/// }
/// ```
///
/// For each `Variant`, this emits:
///
///   - `Variant : Classof<dyn Base + '_>`, running the predicate;
///   - `dyn Base + '_ : Classof<Variant>`, the structural upcast
///     (see [`derives!`]).
///
/// It also marks `dyn Base` as [`Polymorphic`][crate::Polymorphic], which
/// must only happen once per base. The variant list may thus be left empty,
/// and more variants be declared elsewhere (another module, or a downstream
/// crate) with the `extend` form, which emits the per-variant items only:
///
/// ```rust,ignore
/// ::classcast::hierarchy! {
///     unsafe extend dyn Base {
///         OtherVariant => |it| /* … */,
///     }
/// }
/// ```
///
/// ## Safety
///
/// The `unsafe` keyword is the caller vouching for each predicate: it must
/// return `true` exactly for the values whose concrete type is `Variant`
/// (and keep doing so for as long as the value lives). A predicate accepting
/// some other type leads to that value being reinterpreted as a `Variant`,
/// which is undefined behavior.
///
/// A predicate cannot tell lifetimes apart: a `Holder<'static>` variant would
/// also accept a `Holder<'a>` behind a `dyn Base + 'a`, and narrowing it would
/// extend `'a` to `'static`. Variants must thus not carry lifetime parameters
/// unless every value of the base is known to only ever hold `'static` ones.
///
/// ## Example
///
/// ```rust
/// use ::classcast::prelude::*;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum ShapeKind { Circle, Square }
///
/// trait Shape {
///     fn kind(&self) -> ShapeKind;
/// }
///
/// struct Circle { radius: f64 }
/// impl Shape for Circle {
///     fn kind(&self) -> ShapeKind { ShapeKind::Circle }
/// }
///
/// struct Square { side: f64 }
/// impl Shape for Square {
///     fn kind(&self) -> ShapeKind { ShapeKind::Square }
/// }
///
/// ::classcast::hierarchy! {
///     unsafe dyn Shape {
///         Circle => |shape| shape.kind() == ShapeKind::Circle,
///         Square => |shape| shape.kind() == ShapeKind::Square,
///     }
/// }
///
/// let shape: Box<dyn Shape> = Box::new(Square { side: 2.0 });
/// assert!(shape.isa::<Square>());
/// assert!(shape.isa::<Circle>().not());
/// assert_eq!(shape.dyn_cast_ref::<Square>().map(|it| it.side), Some(2.0));
///
/// let square: Box<Square> = shape.cast::<Square>();
/// assert_eq!(square.side * square.side, 4.0);
/// ```
///
/// Splitting a hierarchy:
///
/// ```rust
/// use ::classcast::prelude::*;
///
/// trait Animal { fn legs(&self) -> u8; }
///
/// struct Bird;
/// impl Animal for Bird { fn legs(&self) -> u8 { 2 } }
///
/// ::classcast::hierarchy! {
///     unsafe dyn Animal {
///         Bird => |animal| animal.legs() == 2,
///     }
/// }
///
/// mod mammals {
///     use super::Animal;
///
///     pub struct Dog;
///     impl Animal for Dog { fn legs(&self) -> u8 { 4 } }
///
///     ::classcast::hierarchy! {
///         unsafe extend dyn Animal {
///             Dog => |animal| animal.legs() == 4,
///         }
///     }
/// }
///
/// # fn main() {
/// let animal: &dyn Animal = &mammals::Dog;
/// assert!(animal.isa::<mammals::Dog>());
/// assert!(animal.isa::<Bird>().not());
/// # }
/// ```
#[macro_export]
macro_rules! hierarchy {
(
    unsafe extend dyn $Base:path {
        $(
            $Variant:ty => |$it:ident| $classof:expr
        ),* $(,)?
    }
) => (
    $(
        unsafe
        impl<'__> $crate::ඞ::Classof<dyn $Base + '__> for $Variant {
            #[inline]
            fn classof($it: &(dyn $Base + '__))
              -> $crate::ඞ::bool
            {
                $classof
            }

            #[inline]
            fn retype(ptr: *mut (dyn $Base + '__))
              -> *mut $Variant
            {
                // Only the vtable goes away; the data pointer is that of the
                // `$Variant` which the predicate has vouched for.
                ptr.cast()
            }
        }

        $crate::derives! {
            $Variant : dyn $Base
        }
    )*
);

(
    unsafe dyn $Base:path {
        $($variants:tt)*
    }
) => (
    impl<'__> $crate::ඞ::Polymorphic for dyn $Base + '__ {}

    $crate::hierarchy! {
        unsafe extend dyn $Base {
            $($variants)*
        }
    }
);
}

/// Declares structural "is-a" relations, from a concrete type to the
/// `dyn Trait`s it implements.
///
/// `derives! { Square : dyn Rectangle, dyn Parallelogram }` makes
/// `isa::<dyn Rectangle>` and `isa::<dyn Parallelogram>` unconditionally `true`
/// on a `Square`, and `cast`ing a `Square` (in any ownership shape) to either
/// of them is an unsizing upcast. No predicate is involved, so this macro is
/// safe to call.
///
/// ## Example
///
/// ```rust
/// use ::classcast::prelude::*;
///
/// trait Named { fn name(&self) -> &'static str; }
///
/// struct Unit;
/// impl Named for Unit { fn name(&self) -> &'static str { "unit" } }
///
/// ::classcast::derives! {
///     Unit : dyn Named
/// }
///
/// let named: Box<dyn Named> = Box::new(Unit).cast::<dyn Named>();
/// assert_eq!(named.name(), "unit");
/// ```
#[macro_export]
macro_rules! derives {(
    $(
        $Derived:ty : $(dyn $Ancestor:path),+
    );+ $(;)?
) => (
    $($(
        unsafe
        impl<'__> $crate::ඞ::Classof<$Derived> for dyn $Ancestor + '__
        where
            $Derived : '__,
        {
            #[inline]
            fn classof(_: &$Derived)
              -> $crate::ඞ::bool
            {
                true
            }

            #[inline]
            fn retype(ptr: *mut $Derived)
              -> *mut (dyn $Ancestor + '__)
            {
                ptr
            }
        }
    )+)+
)}
