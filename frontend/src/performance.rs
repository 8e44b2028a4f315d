use shared::{EnvConfig, PerformanceMetrics};
use zoon::*;

/// Milliseconds from the page's performance clock, 0 when unavailable.
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|w| Some(w.performance()?.now()))
        .unwrap_or(0.0)
}

/// Timestamps collected for one component between build and removal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderTimings {
    pub build_started: f64,
    pub build_finished: f64,
    pub inserted: f64,
    /// Set when the change that removes the component starts
    pub removal_started: Option<f64>,
}

impl RenderTimings {
    pub fn metrics(&self, component_name: &str) -> PerformanceMetrics {
        PerformanceMetrics::new(
            component_name,
            elapsed(self.build_started, self.build_finished),
            elapsed(self.build_finished, self.inserted),
        )
    }

    /// Metrics once the element is gone. Unmount time is only reported when
    /// the start of the removal was stamped.
    pub fn metrics_after_removal(&self, component_name: &str, removed: f64) -> PerformanceMetrics {
        let metrics = self.metrics(component_name);
        match self.removal_started {
            Some(started) => metrics.with_unmount_time(elapsed(started, removed)),
            None => metrics,
        }
    }
}

fn elapsed(from: f64, to: f64) -> f64 {
    (to - from).max(0.0)
}

/// Handle for stamping the start of a removal, e.g. from the click handler
/// whose state change takes the element out of the tree.
#[derive(Clone, Default)]
pub struct UnmountClock(Mutable<Option<f64>>);

impl UnmountClock {
    pub fn start(&self) {
        self.0.set(Some(now()));
    }

    fn started(&self) -> Option<f64> {
        self.0.get()
    }
}

/// Wraps the element produced by `build` and logs its render and mount times
/// when `debug` is enabled. The unmount time is logged on removal when
/// `unmount_clock` was started.
pub fn measured<E: Element>(
    component_name: &'static str,
    config: &EnvConfig,
    unmount_clock: UnmountClock,
    build: impl FnOnce() -> E,
) -> impl Element {
    let debug = config.debug;
    let build_started = now();
    let child = build();
    let timings = Mutable::new(RenderTimings {
        build_started,
        build_finished: now(),
        ..RenderTimings::default()
    });

    El::new()
        .s(Width::fill())
        .after_insert(clone!((timings) move |_| {
            timings.lock_mut().inserted = now();
            if debug {
                zoon::println!("{}", timings.get().metrics(component_name));
            }
        }))
        .after_remove(move |_| {
            if !debug {
                return;
            }
            let mut timings = timings.get();
            timings.removal_started = unmount_clock.started();
            if timings.removal_started.is_some() {
                zoon::println!("{}", timings.metrics_after_removal(component_name, now()));
            }
        })
        .child(child)
}
