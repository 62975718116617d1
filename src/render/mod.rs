/*!
 * Rendering
 * Best-effort human-readable text and JSON export
 *
 * The text form is for logs and debugging, not a parseable format:
 * strings are quoted, booleans literal, sequences `[a, b]`, pairs `key:value`,
 * maps `{k:v, ...}`, empty slots `null`. Hash map entry order is whatever the
 * map yields.
 */

use crate::core::errors::{StoreError, StoreResult};
use crate::permissions::Operation;
use crate::store::OrderedStore;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

/// A value with a textual rendering
pub trait Render {
    fn render_into(&self, out: &mut String);

    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Anything shaped like a key/value pair renders as `key:value`
pub trait PairLike {
    type Key: Render + ?Sized;
    type Value: Render + ?Sized;

    fn key(&self) -> &Self::Key;
    fn value(&self) -> &Self::Value;
}

/// Render a pair-like value as `key:value`
pub fn render_pair<P: PairLike + ?Sized>(pair: &P, out: &mut String) {
    pair.key().render_into(out);
    out.push(':');
    pair.value().render_into(out);
}

/// Render items separated by `, ` between `open` and `close`
pub fn render_seq<'a, I, R>(items: I, open: char, close: char, out: &mut String)
where
    I: IntoIterator<Item = &'a R>,
    R: Render + ?Sized + 'a,
{
    out.push(open);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item.render_into(out);
    }
    out.push(close);
}

macro_rules! render_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render_into(&self, out: &mut String) {
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    };
}

render_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool);

impl Render for str {
    fn render_into(&self, out: &mut String) {
        let _ = write!(out, "{:?}", self);
    }
}

impl Render for String {
    fn render_into(&self, out: &mut String) {
        self.as_str().render_into(out);
    }
}

impl Render for char {
    fn render_into(&self, out: &mut String) {
        let _ = write!(out, "{:?}", self);
    }
}

impl<R: Render + ?Sized> Render for &R {
    fn render_into(&self, out: &mut String) {
        (**self).render_into(out);
    }
}

impl<R: Render + ?Sized> Render for Box<R> {
    fn render_into(&self, out: &mut String) {
        (**self).render_into(out);
    }
}

impl<R: Render> Render for Option<R> {
    fn render_into(&self, out: &mut String) {
        match self {
            Some(value) => value.render_into(out),
            None => out.push_str("null"),
        }
    }
}

impl<R: Render> Render for [R] {
    fn render_into(&self, out: &mut String) {
        render_seq(self.iter(), '[', ']', out);
    }
}

impl<R: Render, const N: usize> Render for [R; N] {
    fn render_into(&self, out: &mut String) {
        self.as_slice().render_into(out);
    }
}

impl<R: Render> Render for Vec<R> {
    fn render_into(&self, out: &mut String) {
        self.as_slice().render_into(out);
    }
}

impl<K: Render, V: Render> PairLike for (K, V) {
    type Key = K;
    type Value = V;

    fn key(&self) -> &K {
        &self.0
    }

    fn value(&self) -> &V {
        &self.1
    }
}

impl<K: Render, V: Render> Render for (K, V) {
    fn render_into(&self, out: &mut String) {
        render_pair(self, out);
    }
}

fn render_map<'a, K, V, I>(entries: I, out: &mut String)
where
    K: Render + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    out.push('{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        key.render_into(out);
        out.push(':');
        value.render_into(out);
    }
    out.push('}');
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render_into(&self, out: &mut String) {
        render_map(self.iter(), out);
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    fn render_into(&self, out: &mut String) {
        render_map(self.iter(), out);
    }
}

impl<T: Render> Render for OrderedStore<T> {
    /// Renders every slot regardless of permissions; use
    /// [`OrderedStore::render_text`] for the gated form.
    fn render_into(&self, out: &mut String) {
        render_seq(self.view_unchecked(), '[', ']', out);
    }
}

impl<T: Render> OrderedStore<T> {
    /// Gated text rendering (Convert class)
    pub fn render_text(&self) -> StoreResult<String> {
        if !self.authorize(Operation::Convert)? {
            return Ok(String::new());
        }
        Ok(Render::render(self))
    }
}

impl<T: Serialize> OrderedStore<T> {
    /// Gated JSON export of the slots (Convert class); empty slots are `null`
    pub fn to_json(&self) -> StoreResult<String> {
        if !self.authorize(Operation::Convert)? {
            return Ok(String::new());
        }
        serde_json::to_string(self.view_unchecked())
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }
}
