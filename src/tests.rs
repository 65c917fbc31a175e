use super::*;
use crate::prelude::*;
use ::core::{cell::Cell, ptr};
use ::std::{boxed::Box, thread_local, vec, vec::Vec};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
}

trait Shape {
    fn kind(&self) -> ShapeKind;
    fn area(&self) -> f64;
}

#[derive(Debug, PartialEq)]
struct Circle {
    radius: f64,
}

#[derive(Debug, PartialEq)]
struct Rectangle {
    width: f64,
    height: f64,
}

#[derive(Debug, PartialEq)]
struct Triangle {
    base: f64,
    height: f64,
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind { ShapeKind::Circle }
    fn area(&self) -> f64 { 3.0 * self.radius * self.radius }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind { ShapeKind::Rectangle }
    fn area(&self) -> f64 { self.width * self.height }
}

impl Shape for Triangle {
    fn kind(&self) -> ShapeKind { ShapeKind::Triangle }
    fn area(&self) -> f64 { self.base * self.height / 2.0 }
}

crate::hierarchy! {
    unsafe dyn Shape {
        Circle => |shape| shape.kind() == ShapeKind::Circle,
        Rectangle => |shape| shape.kind() == ShapeKind::Rectangle,
        Triangle => |shape| shape.kind() == ShapeKind::Triangle,
    }
}

// A hierarchy whose predicates keep count of how many times they ran.
thread_local! {
    static CLASSOF_CALLS: Cell<usize> = Cell::new(0);
}

fn classof_calls()
  -> usize
{
    CLASSOF_CALLS.with(Cell::take)
}

fn counted(matches: bool)
  -> bool
{
    CLASSOF_CALLS.with(|it| it.set(it.get() + 1));
    matches
}

trait Probe {
    fn tag(&self) -> u8;
}

struct Hit;
impl Probe for Hit { fn tag(&self) -> u8 { 1 } }

crate::hierarchy! {
    unsafe dyn Probe {
        Hit => |probe| counted(probe.tag() == 1),
    }
}

use misses::Miss;
mod misses {
    use super::*;

    pub(super)
    struct Miss;
    impl Probe for Miss { fn tag(&self) -> u8 { 2 } }

    crate::hierarchy! {
        unsafe extend dyn Probe {
            Miss => |probe| counted(probe.tag() == 2),
        }
    }
}

// A base with no variants yet, completed in two separate declarations.
trait Token {
    fn id(&self) -> char;
}

crate::hierarchy! {
    unsafe dyn Token {}
}

struct Comma;
impl Token for Comma { fn id(&self) -> char { ',' } }

struct Semicolon;
impl Token for Semicolon { fn id(&self) -> char { ';' } }

crate::hierarchy! {
    unsafe extend dyn Token {
        Comma => |token| token.id() == ',',
    }
}

crate::hierarchy! {
    unsafe extend dyn Token {
        Semicolon => |token| token.id() == ';',
    }
}

#[test]
fn end_to_end()
{
    let rectangle = Rectangle { width: 2.0, height: 3.0 };
    let shape: &dyn Shape = &rectangle;

    assert!(shape.isa::<Rectangle>());
    assert!(shape.isa::<Circle>().not());
    assert!(shape.dyn_cast_ref::<Circle>().is_none());

    let narrowed = shape.dyn_cast_ref::<Rectangle>().unwrap();
    assert!(ptr::eq(narrowed, &rectangle));
    assert_eq!(*narrowed, Rectangle { width: 2.0, height: 3.0 });

    let narrowed: &Rectangle = shape.cast_ref::<Rectangle>();
    assert_eq!(narrowed.area(), 6.0);
}

#[test]
fn every_type_is_itself()
{
    let circle = Circle { radius: 1.0 };
    assert!(isa::<Circle, _>(&&circle));
    assert!(ptr::eq(cast::<Circle, _>(&circle), &circle));

    let shape: &dyn Shape = &circle;
    assert!(shape.isa::<dyn Shape>());
    assert!(ptr::eq(shape.cast_ref::<dyn Shape>(), shape));
}

#[test]
fn upcasts_skip_the_predicate()
{
    classof_calls();
    let hit = Hit;
    assert!(isa::<dyn Probe, _>(&&hit));
    assert!(isa::<dyn Probe, _>(&Some(&hit)));
    let probe: Box<dyn Probe> = Box::new(Hit).cast::<dyn Probe>();
    assert_eq!(classof_calls(), 0);

    assert!(probe.isa::<Hit>());
    assert!(probe.isa::<Miss>().not());
    assert_eq!(classof_calls(), 2);
    assert_eq!(probe.tag(), 1);
}

#[test]
fn variants_declared_apart()
{
    let tokens: [&dyn Token; 3] = [&Comma, &Semicolon, &Comma];
    let commas = tokens.iter().filter(|it| it.isa::<Comma>()).count();
    assert_eq!(commas, 2);
    assert!(tokens[1].isa::<Semicolon>());
    assert!(tokens[1].dyn_cast_ref::<Comma>().is_none());
    assert!(tokens.iter().all(|it| it.isa_any::<(Comma, Semicolon)>()));

    let token: Box<dyn Token> = Box::new(Semicolon).cast::<dyn Token>();
    assert!(token.dyn_cast::<Semicolon>().is_ok());

    classof_calls();
    let probe: &dyn Probe = &Miss;
    assert!(probe.isa::<Miss>());
    assert!(probe.isa::<Hit>().not());
    assert_eq!(classof_calls(), 2);
}

#[test]
fn checked_and_unchecked_agree()
{
    let triangle = Triangle { base: 4.0, height: 1.0 };
    let shape: &dyn Shape = &triangle;

    let checked = shape.cast_ref::<Triangle>();
    let unchecked = unsafe {
        // Safety: it is a `Triangle`.
        shape.cast_ref_unchecked::<Triangle>()
    };
    let dynamic = shape.dyn_cast_ref::<Triangle>().unwrap();
    assert!(ptr::eq(checked, &triangle));
    assert!(ptr::eq(unchecked, &triangle));
    assert!(ptr::eq(dynamic, &triangle));
}

#[test]
fn narrowing_mutably()
{
    let mut circle = Circle { radius: 1.0 };
    let shape: &mut dyn Shape = &mut circle;

    assert!(shape.dyn_cast_mut::<Rectangle>().is_none());
    shape.dyn_cast_mut::<Circle>().unwrap().radius *= 2.0;
    shape.cast_mut::<Circle>().radius += 1.0;
    unsafe {
        // Safety: it is a `Circle`.
        shape.cast_mut_unchecked::<Circle>().radius += 1.0;
    }
    assert_eq!(circle, Circle { radius: 4.0 });
}

#[test]
fn any_of_candidates()
{
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 1.0 }),
        Box::new(Rectangle { width: 2.0, height: 3.0 }),
        Box::new(Triangle { base: 4.0, height: 1.0 }),
    ];
    let polygons = shapes.iter().filter(|it| it.isa_any::<(Rectangle, Triangle)>()).count();
    assert_eq!(polygons, 2);
    assert!(shapes.iter().all(|it| it.isa_any::<(Circle, Rectangle, Triangle)>()));
    assert!(shapes[0].isa_any::<(Rectangle,)>().not());

    classof_calls();
    let probe: &dyn Probe = &Hit;
    assert!(isa_any::<(Hit, Miss), _>(&probe));
    // First match wins.
    assert_eq!(classof_calls(), 1);
}

#[test]
fn boxed_shapes()
{
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 1.0 }),
        Box::new(Rectangle { width: 2.0, height: 3.0 }),
        Box::new(Triangle { base: 4.0, height: 1.0 }),
        Box::new(Rectangle { width: 1.0, height: 1.0 }),
    ];
    let total: f64 = shapes.iter().map(|it| it.area()).sum();
    assert_eq!(total, 3.0 + 6.0 + 2.0 + 1.0);

    let rectangles: Vec<Box<Rectangle>> =
        shapes
            .into_iter()
            .filter_map(|it| it.dyn_cast::<Rectangle>().ok())
            .collect()
    ;
    assert_eq!(rectangles.len(), 2);
    assert_eq!(*rectangles[1], Rectangle { width: 1.0, height: 1.0 });
}

#[test]
fn raw_pointers()
{
    let mut circle = Circle { radius: 1.0 };
    let shape: *mut dyn Shape = &mut circle;
    unsafe {
        assert!(shape.isa::<Circle>());
        assert!(shape.isa_any::<(Triangle, Circle)>());
        assert!(shape.dyn_cast_ptr::<Triangle>().is_null());

        let narrowed: *mut Circle = shape.cast_ptr::<Circle>();
        (*narrowed).radius = 5.0;
        assert!(ptr::eq(shape.dyn_cast_ptr::<Circle>(), narrowed));
    }
    assert_eq!(circle.radius, 5.0);

    let shape: *const dyn Shape = &circle;
    unsafe {
        assert_eq!((*shape.cast_ptr::<Circle>()).radius, 5.0);
    }
}

#[test]
fn absent_inputs_stay_absent()
{
    classof_calls();

    let none: Option<&dyn Probe> = None;
    assert!(none.dyn_cast::<Hit>().is_none());
    assert!(none.cast_if_present::<Hit>().is_none());
    assert!(matches!(dyn_cast::<Hit, _>(none), Err(None)));

    let none: Option<Box<dyn Probe>> = None;
    assert!(none.dyn_cast::<Miss>().is_none());

    let null: *const dyn Probe = ptr::null::<Hit>();
    assert!(unsafe { null.dyn_cast_ptr::<Hit>() }.is_null());
    let null: *mut dyn Probe = ptr::null_mut::<Miss>();
    assert!(unsafe { null.dyn_cast_ptr::<Miss>() }.is_null());

    assert_eq!(classof_calls(), 0);
}

#[test]
fn present_optionals()
{
    let hit = Hit;
    let some: Option<&dyn Probe> = Some(&hit);
    assert!(some.isa::<Hit>());
    assert!(some.isa_any::<(Miss,)>().not());
    assert!(some.dyn_cast::<Miss>().is_none());
    assert!(ptr::eq(some.dyn_cast::<Hit>().unwrap(), &hit));
    assert!(ptr::eq(some.cast::<Hit>().unwrap(), &hit));
    assert!(ptr::eq(some.cast_if_present::<Hit>().unwrap(), &hit));
}

#[test]
#[should_panic(expected = "cast<> argument of incompatible type!")]
fn cast_mismatch()
{
    let shape: &dyn Shape = &Circle { radius: 1.0 };
    let _ = shape.cast_ref::<Triangle>();
}

#[test]
#[should_panic(expected = "cast<> argument of incompatible type!")]
fn cast_if_present_mismatch()
{
    let circle = Circle { radius: 1.0 };
    let shape: Option<&dyn Shape> = Some(&circle);
    let _ = shape.cast_if_present::<Triangle>();
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "cast<> argument of incompatible type!")]
fn cast_unchecked_mismatch_is_caught_in_debug()
{
    let shape: &dyn Shape = &Circle { radius: 1.0 };
    let _ = unsafe {
        // Safety: not upheld, but the debug assertion fires first.
        shape.cast_ref_unchecked::<Triangle>()
    };
}

#[test]
#[should_panic(expected = "isa<> used on an absent value")]
fn isa_on_none()
{
    let none: Option<&dyn Shape> = None;
    let _ = none.isa::<Circle>();
}

#[test]
#[should_panic(expected = "isa<> used on an absent value")]
fn cast_on_none()
{
    let none: Option<&dyn Shape> = None;
    let _ = none.cast::<Circle>();
}

#[test]
#[should_panic(expected = "isa<> used on a null pointer")]
fn isa_on_null()
{
    let null: *const dyn Shape = ptr::null::<Circle>();
    let _ = unsafe { null.isa::<Circle>() };
}

#[test]
#[should_panic(expected = "isa<> used on a null pointer")]
fn cast_ptr_on_null()
{
    let null: *mut dyn Shape = ptr::null_mut::<Triangle>();
    let _ = unsafe { null.cast_ptr::<Triangle>() };
}

#[cfg(doctest)]
#[apply(compile_fail!)]
fn unrelated_types_do_not_compile()
{
    let shape: &dyn Shape = &Circle;
    let _ = shape.isa::<Unrelated>(); // Error: `Unrelated: Classof<dyn Shape>` is not satisfied.
}

#[cfg(doctest)]
#[apply(compile_fail!)]
fn siblings_do_not_compile()
{
    // Error: `Square: Classof<Circle>` is not satisfied.
    let _ = ::classcast::isa::<Square, _>(&&Circle);
}

#[cfg(doctest)]
#[apply(compile_fail!)]
fn dyn_cast_ptr_needs_a_sized_target()
{
    let shape: *const dyn Shape = &Circle;
    // Error: there is no null `*const dyn Shape`.
    let _ = unsafe { shape.dyn_cast_ptr::<dyn Shape>() };
}
