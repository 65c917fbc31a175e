//! Method-call syntax for the membership test and the narrowings, one
//! extension trait per ownership shape.
//!
//! They are all thin wrappers around the free functions at the root of the
//! crate, adapting the "absent" outcome to each shape's natural encoding:
//!
//! | Shape | Extension trait | Mismatch / absent |
//! |---|---|---|
//! | `&B`, `&mut B` | [`CastExt`] | `None` |
//! | `*const B`, `*mut B` | [`ConstPtrCastExt`], [`MutPtrCastExt`] | null |
//! | `Box<B>` | [`BoxCastExt`] | `Err(original)` |
//! | `Rc<B>`, `Arc<B>` | [`RcCastExt`], [`ArcCastExt`] | `None` |
//! | `Option<H>` | [`OptionCastExt`] | `None`, or `Err(original)` through `try_cast` |

pub use value::CastExt;
mod value;

pub use ptr::{ConstPtrCastExt, MutPtrCastExt};
mod ptr;

#[cfg(feature = "alloc")]
pub use owned::{ArcCastExt, BoxCastExt, RcCastExt};
#[cfg(feature = "alloc")]
mod owned;

pub use option::OptionCastExt;
mod option;
