//! Membership test and (un)checked narrowing, generic over the ownership
//! shape.

use super::*;

/// Whether `handle`'s value is a `To`.
///
/// ## Panics
///
/// If the handle is absent (_e.g._, a `None`).
///
/// ## Example
///
/// ```rust
/// # use ::classcast::prelude::*;
/// # trait Shape {}
/// # struct Circle; impl Shape for Circle {}
/// # ::classcast::derives! { Circle : dyn Shape }
/// let circle = Circle;
/// assert!(::classcast::isa::<Circle, _>(&&circle));
/// assert!(::classcast::isa::<dyn Shape, _>(&Some(&circle)));
/// ```
#[track_caller]
#[must_use]
pub
fn isa<To, H>(handle: &H)
  -> bool
where
    H : Handle,
    To : ?Sized + Classof<H::Base>,
{
    let Some(base) = handle.view() else {
        panic!("isa<> used on an absent value");
    };
    <To as Classof<H::Base>>::classof(base)
}

/// Whether `handle`'s value is any of the `Candidates`, a tuple of types.
///
/// ```rust
/// # use ::classcast::prelude::*;
/// # trait Shape { fn sides(&self) -> u8; }
/// # struct Circle; impl Shape for Circle { fn sides(&self) -> u8 { 0 } }
/// # struct Square; impl Shape for Square { fn sides(&self) -> u8 { 4 } }
/// # ::classcast::hierarchy! { unsafe dyn Shape {
/// #     Circle => |shape| shape.sides() == 0, Square => |shape| shape.sides() == 4,
/// # }}
/// let shape: &dyn Shape = &Square;
/// assert!(::classcast::isa_any::<(Circle, Square), _>(&shape));
/// assert!(shape.isa_any::<(Circle,)>().not());
/// ```
///
/// ## Panics
///
/// If the handle is absent.
#[track_caller]
#[must_use]
pub
fn isa_any<Candidates, H>(handle: &H)
  -> bool
where
    H : Handle,
    Candidates : AnyOf<H::Base>,
{
    let Some(base) = handle.view() else {
        panic!("isa<> used on an absent value");
    };
    Candidates::any_classof(base)
}

/// Narrows `handle` to the same shape around a `To`, checking membership
/// first.
///
/// Ownership follows the shape: a `Box` is consumed and its allocation
/// handed over; an `Rc` or `Arc` handle is consumed without touching the
/// reference count (clone it beforehand to keep the original around).
///
/// ## Panics
///
/// If the handle is absent, or if its value is not a `To`. Use [`dyn_cast()`]
/// when a mismatch is a legitimate outcome.
#[track_caller]
pub
fn cast<To, H>(handle: H)
  -> H::Output
where
    H : Retype<To>,
    To : ?Sized + Classof<H::Base>,
{
    assert!(isa::<To, H>(&handle), "cast<> argument of incompatible type!");
    unsafe {
        // Safety: just checked.
        handle.retype()
    }
}

/// [`cast()`], without the membership check in release builds.
///
/// Meant for when membership has already been established by other means,
/// _e.g._, within an `if x.isa::<To>()` branch.
///
/// # Safety
///
/// The handle must be present, and its value must be a `To`: otherwise the
/// value gets reinterpreted as something it is not, which is undefined
/// behavior. This is `debug_assert!`ed.
#[track_caller]
pub
unsafe
fn cast_unchecked<To, H>(handle: H)
  -> H::Output
where
    H : Retype<To>,
    To : ?Sized + Classof<H::Base>,
{
    debug_assert!(isa::<To, H>(&handle), "cast<> argument of incompatible type!");
    unsafe {
        // Safety: upheld by the caller.
        handle.retype()
    }
}

/// Narrows `handle` to the same shape around a `To`, if its value is a `To`.
///
/// Otherwise, including when the handle is absent, the very same handle is
/// handed back, untouched (the classification predicate is not even run in
/// the latter case).
///
/// ## Example
///
/// ```rust
/// # use ::classcast::prelude::*;
/// # trait Shape { fn sides(&self) -> u8; }
/// # struct Circle; impl Shape for Circle { fn sides(&self) -> u8 { 0 } }
/// # struct Square; impl Shape for Square { fn sides(&self) -> u8 { 4 } }
/// # ::classcast::hierarchy! { unsafe dyn Shape {
/// #     Circle => |shape| shape.sides() == 0, Square => |shape| shape.sides() == 4,
/// # }}
/// let shape: Box<dyn Shape> = Box::new(Square);
/// let shape = match ::classcast::dyn_cast::<Circle, _>(shape) {
///     Ok(_circle) => unreachable!(),
///     Err(shape) => shape,
/// };
/// assert!(::classcast::dyn_cast::<Square, _>(shape).is_ok());
/// ```
pub
fn dyn_cast<To, H>(handle: H)
  -> Result<H::Output, H>
where
    H : Retype<To>,
    To : ?Sized + Classof<H::Base>,
{
    let _matches @ true = handle.view().map_or(false, <To as Classof<H::Base>>::classof)
    else {
        return Err(handle);
    };
    Ok(unsafe {
        // Safety: present, and accepted by `To`.
        handle.retype()
    })
}
