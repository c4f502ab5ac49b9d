//! Debug rendering for literals, variables and the containers built from them.
//!
//! Scalars render through their own `Display`, tuples as `(a, b)` and
//! sequences as `[a, b]`. Text renders verbatim, never as a sequence of chars.
//!
//! ```
//! use cnfkit::cnf::cnf::{Literal, Variable};
//! use cnfkit::render::render;
//!
//! let x = Variable::new(1);
//! let clause = vec![Literal::positive(x), Literal::negative(x)];
//! assert_eq!(render(&clause), "[Lit 1 (2), Lit ¬1 (3)]");
//! assert_eq!(render(&(x, "ok")), "(Var 1, ok)");
//! ```

mod tuple;

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::cnf::cnf::{Literal, Variable};

pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// `Display` adapter returned by [`rendered`].
pub struct Rendered<'a, T: ?Sized>(&'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

pub fn rendered<T: Render + ?Sized>(value: &T) -> Rendered<'_, T> {
    Rendered(value)
}

pub fn render<T: Render + ?Sized>(value: &T) -> String {
    rendered(value).to_string()
}

/// Renders any re-iterable collection as a sequence.
#[derive(Debug, Clone, Copy)]
pub struct Seq<I>(I);

pub fn seq<I>(iter: I) -> Seq<I>
where
    I: IntoIterator + Clone,
    I::Item: Render,
{
    Seq(iter)
}

impl<I> Render for Seq<I>
where
    I: IntoIterator + Clone,
    I::Item: Render,
{
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self.0.clone())
    }
}

fn render_seq<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Render,
{
    f.write_str("[")?;
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        item.render(f)?;
    }
    f.write_str("]")
}

macro_rules! render_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Render for $t {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_via_display!(
    Variable, Literal, bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32,
    u64, u128, usize, f32, f64,
);

impl Render for Cow<'_, str> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! render_via_deref {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Render + ?Sized> Render for $ptr {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).render(f)
                }
            }
        )*
    };
}

render_via_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T: Render> Render for [T] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<T: Render> Render for VecDeque<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<T: Render> Render for BTreeSet<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

// hash containers render in their iteration order
impl<T: Render, S> Render for HashSet<T, S> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<T: Render, S> Render for IndexSet<T, S> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

// maps render as sequences of (key, value) pairs
impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}

impl<K: Render, V: Render, S> Render for IndexMap<K, V, S> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(f, self)
    }
}
