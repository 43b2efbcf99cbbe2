//! Browser driver for the typing animation.

use futures::future::{abortable, AbortHandle};
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlElement;

use crate::typing::TypingAnimator;

/// Running animation; dropping or stopping it cancels the pending timeout
pub struct TypingHandle {
    abort: AbortHandle,
}

impl TypingHandle {
    pub fn stop(&self) {
        self.abort.abort();
    }
}

impl Drop for TypingHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

pub fn start(target: HtmlElement, animator: TypingAnimator) -> TypingHandle {
    let (task, abort) = abortable(run(target, animator));
    wasm_bindgen_futures::spawn_local(async move {
        if task.await.is_err() {
            tracing::debug!("Typing animation stopped");
        }
    });
    TypingHandle { abort }
}

async fn run(target: HtmlElement, mut animator: TypingAnimator) {
    loop {
        let frame = animator.step();
        target.set_text_content(Some(&frame.text));
        let millis = u32::try_from(frame.delay.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
