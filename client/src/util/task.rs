//! Fire-and-forget async tasks for UI event handlers.
//!
//! In the browser futures run on the Leptos local executor. During SSR there is
//! no backend access, so the future is dropped without being polled.

use std::future::Future;
use std::time::Duration;

/// Run `fut` to completion on the browser's event loop.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(fut);
    }
}

/// Run `f` once after `delay` has elapsed.
pub fn after<F>(delay: Duration, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        spawn(async move {
            gloo_timers::future::sleep(delay).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, f);
    }
}
