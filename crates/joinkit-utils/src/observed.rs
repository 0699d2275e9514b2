//! Change-notifying vector.
//!
//! Observation is caller-injected and must not affect the contained data:
//! the sink sees every mutation after it has been applied, and a sink that
//! does nothing costs nothing.

use derive_more::Deref;

///
/// VecEvent
///
/// One applied mutation, borrowed from the vector that performed it.
///

#[derive(Debug)]
pub enum VecEvent<'a, T> {
    Pushed { index: usize, value: &'a T },
    Inserted { index: usize, value: &'a T },
    Removed { index: usize, value: &'a T },
    Cleared { len: usize },
}

///
/// VecEventSink
///

pub trait VecEventSink<T> {
    fn on_event(&self, event: VecEvent<'_, T>);
}

///
/// NullSink
///
/// The sink used when the caller injects none.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl<T> VecEventSink<T> for NullSink {
    fn on_event(&self, _event: VecEvent<'_, T>) {}
}

///
/// FnSink
///
/// Adapter carrying a caller-supplied closure as a sink.
///

#[derive(Clone, Copy, Debug)]
pub struct FnSink<F>(F);

/// Wrap a bare `|event| ...` closure for use anywhere a `VecEventSink` is
/// expected.
pub const fn sink_fn<F>(f: F) -> FnSink<F> {
    FnSink(f)
}

impl<T, F> VecEventSink<T> for FnSink<F>
where
    F: Fn(VecEvent<'_, T>),
{
    fn on_event(&self, event: VecEvent<'_, T>) {
        (self.0)(event);
    }
}

///
/// ObservedVec
///
/// Ordered container whose mutations are reported to the injected sink.
/// Reads go through `Deref` to a slice; mutation is only possible through
/// the notifying methods.
///

#[derive(Debug, Deref)]
pub struct ObservedVec<T, S = NullSink> {
    #[deref]
    items: Vec<T>,
    sink: S,
}

impl<T> ObservedVec<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            sink: NullSink,
        }
    }
}

impl<T> Default for ObservedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> ObservedVec<T, S>
where
    S: VecEventSink<T>,
{
    #[must_use]
    pub const fn with_sink(sink: S) -> Self {
        Self {
            items: Vec::new(),
            sink,
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
        let index = self.items.len() - 1;
        self.sink.on_event(VecEvent::Pushed {
            index,
            value: &self.items[index],
        });
    }

    pub fn insert(&mut self, index: usize, value: T) {
        self.items.insert(index, value);
        self.sink.on_event(VecEvent::Inserted {
            index,
            value: &self.items[index],
        });
    }

    /// Remove and return the element at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }

        let value = self.items.remove(index);
        self.sink.on_event(VecEvent::Removed {
            index,
            value: &value,
        });

        Some(value)
    }

    pub fn clear(&mut self) {
        let len = self.items.len();
        self.items.clear();
        self.sink.on_event(VecEvent::Cleared { len });
    }

    /// Consume the container, dropping the sink.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
