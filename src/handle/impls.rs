//! The ownership shapes themselves.

#[cfg(feature = "alloc")]
use ::alloc::{
    boxed::Box,
    rc::Rc,
    sync::Arc,
};

use super::*;

/// Direct value, through a shared reference.
impl<'r, B : ?Sized> Handle for &'r B {
    type Base = B;

    #[inline]
    fn view(&self)
      -> Option<&B>
    {
        Some(*self)
    }
}

unsafe
impl<'r, B : ?Sized, To : ?Sized + 'r> Retype<To> for &'r B
where
    To : Classof<B>,
{
    type Output = &'r To;

    #[inline]
    unsafe
    fn retype(self)
      -> &'r To
    {
        unsafe {
            // Safety: `To` has accepted `*self` (caller's narrow contract), so
            // `retype` yields a valid `To` within the same borrowed storage.
            // The `*mut` is only there to fit the signature; nothing gets
            // written through it.
            &*<To as Classof<B>>::retype(self as *const B as *mut B)
        }
    }
}

/// Direct value, through an exclusive reference.
impl<'r, B : ?Sized> Handle for &'r mut B {
    type Base = B;

    #[inline]
    fn view(&self)
      -> Option<&B>
    {
        Some(&**self)
    }
}

unsafe
impl<'r, B : ?Sized, To : ?Sized + 'r> Retype<To> for &'r mut B
where
    To : Classof<B>,
{
    type Output = &'r mut To;

    #[inline]
    unsafe
    fn retype(self)
      -> &'r mut To
    {
        unsafe {
            // Safety: same as for `&'r B`, with the pointer carrying the
            // unique (write) provenance of `self` along.
            &mut *<To as Classof<B>>::retype(self)
        }
    }
}

#[cfg(feature = "alloc")]
impl<B : ?Sized> Handle for Box<B> {
    type Base = B;

    #[inline]
    fn view(&self)
      -> Option<&B>
    {
        Some(&**self)
    }
}

#[cfg(feature = "alloc")]
unsafe
impl<B : ?Sized, To : ?Sized> Retype<To> for Box<B>
where
    To : Classof<B>,
{
    type Output = Box<To>;

    #[inline]
    unsafe
    fn retype(self)
      -> Box<To>
    {
        let ptr: *mut B = Box::into_raw(self);
        unsafe {
            // Safety: `retype` keeps the address, and its metadata describes
            // the layout of the allocation (`Classof` contract), which is
            // what `Box::from_raw()` needs to later free it.
            Box::from_raw(<To as Classof<B>>::retype(ptr))
        }
    }
}

// `Rc` and `Arc` are the same shape, up to the atomicity of the counters.
macro_rules! shared_handle {(
    $Shared:ident
) => (
    #[cfg(feature = "alloc")]
    impl<B : ?Sized> Handle for $Shared<B> {
        type Base = B;

        #[inline]
        fn view(&self)
          -> Option<&B>
        {
            Some(&**self)
        }
    }

    #[cfg(feature = "alloc")]
    unsafe
    impl<B : ?Sized, To : ?Sized> Retype<To> for $Shared<B>
    where
        To : Classof<B>,
    {
        type Output = $Shared<To>;

        #[inline]
        unsafe
        fn retype(self)
          -> $Shared<To>
        {
            let ptr: *const B = $Shared::into_raw(self);
            unsafe {
                // Safety: the data pointer is unchanged and the pointee
                // layout is that of the allocation (`Classof` contract), so
                // this is the same as having unsize-coerced a `$Shared<To>`
                // into the original `$Shared<B>`, as `from_raw()` requires.
                // The ownership (one strong count) is handed over as-is.
                $Shared::from_raw(<To as Classof<B>>::retype(ptr.cast_mut()).cast_const())
            }
        }
    }
)}

shared_handle!(Rc);
shared_handle!(Arc);

/// Optional-wrapped value: `None` is the absent handle.
impl<H : Handle> Handle for Option<H> {
    type Base = H::Base;

    #[inline]
    fn view(&self)
      -> Option<&H::Base>
    {
        self.as_ref().and_then(H::view)
    }
}

unsafe
impl<H, To : ?Sized> Retype<To> for Option<H>
where
    H : Retype<To>,
{
    type Output = Option<H::Output>;

    #[inline]
    unsafe
    fn retype(self)
      -> Option<H::Output>
    {
        self.map(|handle| unsafe {
            // Safety: forwarded from the caller's narrow contract.
            handle.retype()
        })
    }
}
