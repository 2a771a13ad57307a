//! Bridges browser events into the [`ViewportTracker`] and exposes its
//! snapshots as signals. The tracker behind the context is the single
//! writer; components only ever see read-only copies.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::viewport::{Section, ViewportState, ViewportTracker};

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos::ev;
#[cfg(feature = "hydrate")]
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

#[cfg(feature = "hydrate")]
use crate::viewport::{dom, motion, sched};

/// Debounce window for active-section re-evaluation.
#[cfg(feature = "hydrate")]
const ACTIVE_DEBOUNCE_MS: u64 = 50;

/// Consecutive unmoved frames before an arrival monitor gives up.
#[cfg(feature = "hydrate")]
const MONITOR_SETTLE_FRAMES: u32 = 10;

/// Outstanding programmatic-scroll work. Replacing a slot cancels whatever
/// was in it; dropping the slots on teardown cancels everything.
#[cfg(feature = "hydrate")]
#[derive(Default)]
struct AnimSlots {
    monitor: Option<sched::RafLoop>,
    probe: Option<sched::Poller>,
    fallback: Option<sched::RafLoop>,
}

#[derive(Clone, Copy)]
pub struct TrackerHandle {
    tracker: StoredValue<Arc<Mutex<ViewportTracker>>>,
    state: ReadSignal<ViewportState>,
    set_state: WriteSignal<ViewportState>,
    active: ReadSignal<Section>,
    set_active: WriteSignal<Section>,
    revealed: ReadSignal<HashSet<String>>,
    set_revealed: WriteSignal<HashSet<String>>,
    #[cfg(feature = "hydrate")]
    anims: StoredValue<AnimSlots, LocalStorage>,
}

pub fn provide_tracker() -> TrackerHandle {
    let tracker = StoredValue::new(Arc::new(Mutex::new(ViewportTracker::new())));
    let (state, set_state) = signal(ViewportState::default());
    let (active, set_active) = signal(Section::Hero);
    let (revealed, set_revealed) = signal(HashSet::new());
    let handle = TrackerHandle {
        tracker,
        state,
        set_state,
        active,
        set_active,
        revealed,
        set_revealed,
        #[cfg(feature = "hydrate")]
        anims: StoredValue::new_local(AnimSlots::default()),
    };
    provide_context(handle);
    #[cfg(feature = "hydrate")]
    handle.wire_browser_events();
    handle
}

pub fn use_tracker() -> TrackerHandle {
    expect_context::<TrackerHandle>()
}

impl TrackerHandle {
    pub fn scroll_offset(&self) -> f64 {
        self.state.get().scroll_offset
    }

    pub fn progress(&self) -> f64 {
        self.state.get().progress
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.state.get().pointer
    }

    pub fn active(&self) -> Section {
        self.active.get()
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.with(|set| set.contains(id))
    }

    /// Reveal-once entry point for the intersection observer.
    pub fn mark_visible(&self, id: &str) {
        let newly = self.with_tracker(|t| t.mark_visible(id));
        if newly {
            self.set_revealed.update(|set| {
                set.insert(id.to_string());
            });
        }
    }

    /// Smooth-scroll to a section: activate it immediately for instant nav
    /// feedback, then let an animation-frame monitor refresh scroll state
    /// until geometry confirms arrival.
    pub fn scroll_to(&self, section: Section) {
        self.with_tracker(|t| t.set_active(section));
        self.set_active.set(section);

        #[cfg(feature = "hydrate")]
        {
            if !dom::smooth_scroll_into_view(section) {
                return;
            }
            let handle = *self;
            let mut last_offset = f64::NAN;
            let mut settled_frames = 0u32;
            let monitor = sched::RafLoop::spawn(move || {
                let Some(sample) = dom::scroll_sample() else {
                    return false;
                };
                let snapshot = handle.with_tracker(|t| t.on_scroll(sample));
                handle.set_state.set(snapshot);
                // A bottom section may never reach the viewport top; once the
                // scroll stops moving the monitor must stop with it.
                if sample.offset == last_offset {
                    settled_frames += 1;
                } else {
                    settled_frames = 0;
                    last_offset = sample.offset;
                }
                if settled_frames >= MONITOR_SETTLE_FRAMES {
                    return false;
                }
                match dom::section_band(section) {
                    Some(band) => band.top.abs() > motion::ARRIVAL_TOLERANCE_PX,
                    None => false,
                }
            });
            self.anims.update_value(|slots| slots.monitor = Some(monitor));
        }
    }

    /// Scroll back to the origin: native smooth scroll first, watched by a
    /// fixed-interval probe; if the position never moves, hand over to the
    /// manual easing animation.
    pub fn scroll_to_top(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(win) = web_sys::window() else {
                return;
            };
            let start = dom::scroll_offset();
            if start <= 0.0 {
                return;
            }
            dom::request_native_scroll_top(&win);

            let handle = *self;
            let mut detector = motion::StallDetector::new(start);
            let probe = sched::Poller::spawn(motion::PROBE_INTERVAL_MS, move || {
                match detector.observe(dom::scroll_offset()) {
                    motion::ProbeVerdict::Pending => {}
                    motion::ProbeVerdict::Arrived | motion::ProbeVerdict::TimedOut => {
                        handle.anims.update_value(|slots| slots.probe = None);
                    }
                    motion::ProbeVerdict::Stalled => {
                        log::debug!("native smooth scroll stalled, running manual fallback");
                        handle.anims.update_value(|slots| slots.probe = None);
                        handle.start_fallback(start);
                    }
                }
            });
            self.anims.update_value(|slots| slots.probe = Some(probe));
        }
    }

    #[cfg(feature = "hydrate")]
    fn start_fallback(&self, start: f64) {
        let animation = motion::ScrollAnimation::new(start);
        let started_at = dom::now_ms();
        let handle = *self;
        let fallback = sched::RafLoop::spawn(move || {
            let elapsed = dom::now_ms() - started_at;
            dom::force_scroll_to(animation.position_at(elapsed));
            if let Some(sample) = dom::scroll_sample() {
                let snapshot = handle.with_tracker(|t| t.on_scroll(sample));
                handle.set_state.set(snapshot);
            }
            !animation.is_done(elapsed)
        });
        self.anims.update_value(|slots| slots.fallback = Some(fallback));
    }

    fn with_tracker<R>(&self, f: impl FnOnce(&mut ViewportTracker) -> R) -> R {
        self.tracker.with_value(|tracker| {
            let mut tracker = tracker.lock().expect("tracker lock should not be poisoned");
            f(&mut tracker)
        })
    }

    #[cfg(feature = "hydrate")]
    fn wire_browser_events(self) {
        let debounce = Rc::new(sched::Debounce::new(ACTIVE_DEBOUNCE_MS));

        let refresh = {
            let debounce = Rc::clone(&debounce);
            let handle = self;
            move || {
                let Some(sample) = dom::scroll_sample() else {
                    return;
                };
                let snapshot = handle.with_tracker(|t| t.on_scroll(sample));
                handle.set_state.set(snapshot);
                debounce.schedule(move || {
                    let Some(sample) = dom::scroll_sample() else {
                        return;
                    };
                    let bands = dom::section_bands();
                    let active = handle.with_tracker(|t| t.resolve_active(sample, &bands));
                    handle.set_active.set(active);
                });
            }
        };

        {
            let refresh = refresh.clone();
            let _ = use_event_listener_with_options(
                use_window(),
                ev::scroll,
                move |_| refresh(),
                UseEventListenerOptions::default().passive(false),
            );
        }
        {
            let refresh = refresh.clone();
            let _ = use_event_listener_with_options(
                use_window(),
                ev::wheel,
                move |_| refresh(),
                UseEventListenerOptions::default().passive(false),
            );
        }

        // Pointer positions are coalesced to one committed update per frame;
        // intermediate positions within a frame are intentionally dropped.
        {
            let handle = self;
            let frame = Rc::new(sched::FrameTask::new());
            let _ = use_event_listener_with_options(
                use_window(),
                ev::mousemove,
                move |ev: web_sys::MouseEvent| {
                    let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
                    frame.request(move || {
                        let snapshot = handle.with_tracker(|t| t.on_pointer(x, y));
                        handle.set_state.set(snapshot);
                    });
                },
                UseEventListenerOptions::default().passive(true),
            );
        }

        // Initial reading so the chrome is correct before the first event.
        refresh();
    }
}
