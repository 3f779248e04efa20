use std::sync::{Arc, LazyLock, PoisonError};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Context;

// -----------------------------------------------------------------------------
// ContextArc

static GLOBAL: LazyLock<ContextArc> = LazyLock::new(|| {
    #[cfg_attr(not(feature = "auto_register"), expect(unused_mut))]
    let mut context = Context::new();
    #[cfg(feature = "auto_register")]
    context.auto_register();
    ContextArc::new(context)
});

/// A [`Context`] behind a shared read-write lock.
///
/// Clones share the same context. Traversal takes a read lock, registration
/// a write lock, so the usual pattern is to register during setup and only
/// read afterwards.
///
/// # Examples
///
/// ```
/// use vc_mapping::{Context, ContextArc};
///
/// let shared = ContextArc::new(Context::new());
/// let other = shared.clone();
///
/// shared.write().register::<u32>();
/// assert!(other.read().get_type::<u32>().is_some());
/// ```
#[derive(Clone, Default)]
pub struct ContextArc {
    /// The wrapped [`Context`].
    pub internal: Arc<RwLock<Context>>,
}

impl ContextArc {
    #[inline]
    pub fn new(context: Context) -> Self {
        Self {
            internal: Arc::new(RwLock::new(context)),
        }
    }

    /// The process-wide context, created on first access.
    ///
    /// With the `auto_register` feature, submitted registrations are applied
    /// when it is created.
    #[inline]
    pub fn global() -> &'static ContextArc {
        &GLOBAL
    }

    /// Takes a read lock on the underlying [`Context`].
    pub fn read(&self) -> RwLockReadGuard<'_, Context> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`Context`].
    pub fn write(&self) -> RwLockWriteGuard<'_, Context> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns `true` if both handles share the same context.
    #[inline]
    pub fn ptr_eq(&self, other: &ContextArc) -> bool {
        Arc::ptr_eq(&self.internal, &other.internal)
    }
}

impl core::fmt::Debug for ContextArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.read().fmt(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ContextArc;

    #[test]
    fn global_is_a_single_instance() {
        assert!(ContextArc::global().ptr_eq(ContextArc::global()));
        assert!(!ContextArc::global().ptr_eq(&ContextArc::default()));
    }
}
