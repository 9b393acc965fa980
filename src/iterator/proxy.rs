//! Proxy references: what a plain input iterator hands out instead of `&T`.
//!
//! Input iterators are not required to produce genuine references, so the
//! synthetic input iterator yields this proxy. Reading is always possible;
//! writing only when the writable flag is `Present`. No proxy value can ever
//! exist, because the synthetic iterator is never traversed.
//!
//! ```compile_fail
//! use tola_concepts::{Absent, Present, ProxyReference};
//!
//! // Read-only proxies have no `write`.
//! fn assign(proxy: ProxyReference<i32, Present, Absent>) {
//!     proxy.write(1);
//! }
//! ```

use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;

use crate::primitives::bool::{Bool, Present};

/// A readable and/or writable stand-in for a reference to `T`.
pub struct ProxyReference<T, R: Bool, W: Bool> {
    never: Infallible,
    marker: PhantomData<(fn() -> T, R, W)>,
}

impl<T, R: Bool, W: Bool> ProxyReference<T, R, W> {
    pub const READABLE: bool = R::VALUE;
    pub const WRITABLE: bool = W::VALUE;
    pub const READ_WRITE: bool = <R::And<W> as Bool>::VALUE;
}

impl<T, W: Bool> ProxyReference<T, Present, W> {
    /// Read the referenced value.
    pub fn read(self) -> T {
        match self.never {}
    }

    /// Member access (`->`) for reading.
    pub fn as_ptr(&self) -> *const T {
        match self.never {}
    }
}

impl<T, R: Bool> ProxyReference<T, R, Present> {
    /// Assign through the proxy.
    pub fn write(self, value: T) {
        drop(value);
        match self.never {}
    }
}

impl<T> ProxyReference<T, Present, Present> {
    /// Member access (`->`) for writing.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match self.never {}
    }
}

impl<T, R: Bool, W: Bool> fmt::Debug for ProxyReference<T, R, W> {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.never {}
    }
}
