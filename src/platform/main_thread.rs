use crate::model::error::platform::PlatformError;
use std::marker::PhantomData;
use std::sync::OnceLock;
use std::thread::{self, ThreadId};

static PINNED: OnceLock<ThreadId> = OnceLock::new();

/// Proof that the process main thread has been pinned for window work.
///
/// Obtained once per process through [`MainThread::pin`]. The token is neither `Send` nor
/// `Sync`, so it cannot leave the thread it was issued on.
#[derive(Debug)]
pub struct MainThread {
    _not_send: PhantomData<*const ()>,
}

impl MainThread {
    pub fn pin() -> Result<Self, PlatformError> {
        let current = thread::current();
        if current.name() != Some("main") {
            return Err(PlatformError::NotMainThread);
        }
        Self::claim(current.id())
    }

    fn claim(id: ThreadId) -> Result<Self, PlatformError> {
        let mut claimed = false;
        PINNED.get_or_init(|| {
            claimed = true;
            id
        });
        if !claimed {
            return Err(PlatformError::MainThreadAlreadyPinned);
        }
        Ok(Self {
            _not_send: PhantomData,
        })
    }

    pub fn is_current(&self) -> bool {
        PINNED.get() == Some(&thread::current().id())
    }

    /// A token that skips the process-wide pin, for exercising runtimes in unit tests.
    #[cfg(test)]
    pub(crate) fn unpinned() -> Self {
        Self {
            _not_send: PhantomData,
        }
    }
}
