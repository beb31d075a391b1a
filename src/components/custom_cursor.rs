//! Decorative dot-and-ring cursor that follows the mouse.
//!
//! ARCHITECTURE
//! ============
//! The component owns the pointer signal and the spring state. While it is
//! mounted it holds a `mousemove` subscription on `window` and drives an
//! animation-frame loop that advances both springs toward the pointer. The
//! loop idles once the springs settle and is restarted by the next move.
//! Cleanup removes the listener and stops any pending frame.
//!
//! The parent mounts this component only on non-touch devices, so touch
//! devices never acquire the listener.

#[cfg(test)]
#[path = "custom_cursor_test.rs"]
mod custom_cursor_test;

use leptos::prelude::*;

use crate::state::pointer::PointerState;
use crate::state::ui::UiState;
use crate::util::spring::{CursorMotion, Point};

pub const DOT_SIZE_PX: f64 = 8.0;
pub const RING_SIZE_PX: f64 = 40.0;

/// Translate an element of `size` so its center sits on `center`.
#[must_use]
pub fn centered_transform(center: Point, size: f64) -> String {
    let half = size / 2.0;
    format!("translate3d({}px, {}px, 0)", center.x - half, center.y - half)
}

#[must_use]
pub fn dot_style(center: Point, color: &str) -> String {
    format!(
        "background-color: {color}; transform: {};",
        centered_transform(center, DOT_SIZE_PX)
    )
}

#[must_use]
pub fn ring_style(center: Point, color: &str) -> String {
    format!(
        "border-color: {color}; transform: {};",
        centered_transform(center, RING_SIZE_PX)
    )
}

#[cfg(feature = "csr")]
mod frame_loop {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    use leptos::prelude::*;

    use crate::state::pointer::PointerState;
    use crate::util::browser::now_ms;
    use crate::util::spring::{CursorMotion, Point};

    /// Animation-frame driver for the cursor springs.
    #[derive(Clone)]
    pub struct FrameLoop {
        pointer: RwSignal<PointerState>,
        motion: RwSignal<CursorMotion>,
        alive: Arc<AtomicBool>,
        running: Arc<AtomicBool>,
        last_ms: Arc<AtomicU64>,
    }

    impl FrameLoop {
        pub fn new(pointer: RwSignal<PointerState>, motion: RwSignal<CursorMotion>) -> Self {
            Self {
                pointer,
                motion,
                alive: Arc::new(AtomicBool::new(true)),
                running: Arc::new(AtomicBool::new(false)),
                last_ms: Arc::new(AtomicU64::new(0)),
            }
        }

        /// Begin ticking unless a frame is already scheduled.
        pub fn start(&self) {
            if !self.alive.load(Ordering::Relaxed) || self.running.swap(true, Ordering::Relaxed) {
                return;
            }
            self.last_ms.store(now_ms().to_bits(), Ordering::Relaxed);
            self.schedule();
        }

        pub fn stop(&self) {
            self.alive.store(false, Ordering::Relaxed);
        }

        fn schedule(&self) {
            let this = self.clone();
            request_animation_frame(move || this.tick());
        }

        fn tick(&self) {
            if !self.alive.load(Ordering::Relaxed) {
                self.running.store(false, Ordering::Relaxed);
                return;
            }
            let now = now_ms();
            let last = f64::from_bits(self.last_ms.swap(now.to_bits(), Ordering::Relaxed));
            let dt_s = (now - last).max(0.0) / 1000.0;

            let Some(pointer) = self.pointer.try_get_untracked() else {
                self.running.store(false, Ordering::Relaxed);
                return;
            };
            let target = Point::new(pointer.x, pointer.y);
            let moving = self.motion.try_update(|m| m.step(target, dt_s)).unwrap_or(false);

            if moving {
                self.schedule();
            } else {
                self.running.store(false, Ordering::Relaxed);
            }
        }
    }
}

/// Subscribe to `mousemove` for the lifetime of the current owner.
#[cfg(feature = "csr")]
fn track_pointer(pointer: RwSignal<PointerState>, motion: RwSignal<CursorMotion>) {
    let frames = frame_loop::FrameLoop::new(pointer, motion);
    let frames_on_move = frames.clone();

    let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
        let x = f64::from(ev.client_x());
        let y = f64::from(ev.client_y());
        let mut revealed = false;
        pointer.update(|p| revealed = p.record_move(x, y));
        if revealed {
            log::debug!("cursor: first move at ({x}, {y})");
            motion.update(|m| m.snap(Point::new(x, y)));
        }
        frames_on_move.start();
    });

    on_cleanup(move || {
        frames.stop();
        handle.remove();
        log::debug!("cursor: pointer listener released");
    });
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pointer = RwSignal::new(PointerState::default());
    let motion = RwSignal::new(CursorMotion::default());

    #[cfg(feature = "csr")]
    track_pointer(pointer, motion);

    let shown = Memo::new(move |_| pointer.with(|p| p.cursor_shown(ui.with(|u| u.device))));
    let color = move || ui.with(|u| u.palette().cursor);

    view! {
        <Show when=move || shown.get()>
            <div
                class="cursor cursor--dot"
                aria-hidden="true"
                style=move || dot_style(motion.with(|m| m.dot.position), color())
            ></div>
            <div
                class="cursor cursor--ring"
                aria-hidden="true"
                style=move || ring_style(motion.with(|m| m.ring.position), color())
            ></div>
        </Show>
    }
}
