// File: crates/cylinder-core/src/animation.rs
// Summary: Progressive-reveal animation: progress clock, cancellable session and host timer hooks.
// Notes:
// - Single-threaded and cooperative. A session draws one complete frame per tick
//   and asks the host to call it again after `1000 / fps` ms.
// - Each session owns its progress counter; two sessions on the same surface do not
//   know about each other. Cancel the old one through its `CancelHandle`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::chart::Chart;
use crate::geometry::Rect;
use crate::surface::Surface;

/// Progress bookkeeping for one animation.
///
/// Progress starts one step in, so an animation without duration is complete
/// after its first tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressClock {
    progress: f64,
    delta: f64,
    interval: Duration,
}

impl ProgressClock {
    /// `delta = 1000 / duration_ms / fps`, with the duration floored to 1 ms and fps to 1.
    pub fn new(duration: Duration, fps: u32) -> Self {
        let ms = (duration.as_secs_f64() * 1000.0).max(1.0);
        let fps = fps.max(1) as f64;
        let delta = 1000.0 / ms / fps;
        Self { progress: delta, delta, interval: Duration::from_secs_f64(1.0 / fps) }
    }

    /// Clock that is complete on its first tick.
    pub fn instant() -> Self {
        Self { progress: 1.0, delta: 1.0, interval: Duration::ZERO }
    }

    /// Current cumulative progress; may overshoot 1 on the last tick.
    pub fn progress(&self) -> f64 { self.progress }
    pub fn delta(&self) -> f64 { self.delta }
    /// Delay between two ticks.
    pub fn interval(&self) -> Duration { self.interval }
    pub fn is_complete(&self) -> bool { self.progress >= 1.0 }

    pub fn advance(&mut self) {
        self.progress += self.delta;
    }
}

/// Shared flag that stops a running animation before its next tick.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self { Self::default() }
    pub fn cancel(&self) { self.0.store(true, Ordering::Relaxed); }
    pub fn is_cancelled(&self) -> bool { self.0.load(Ordering::Relaxed) }
}

/// Outcome of one animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// A frame was drawn; call `step` again after this delay.
    Continue(Duration),
    /// The final frame has been drawn (or was drawn by an earlier tick).
    Finished,
    /// The session was cancelled; nothing was drawn.
    Cancelled,
}

/// Host capability to run a callback later: not before `delay`, possibly after.
pub trait Scheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// One running progressive reveal of a chart snapshot.
pub struct Animation<C> {
    chart: C,
    rect: Rect,
    clock: ProgressClock,
    cancel: CancelHandle,
    frames: u64,
    finished: bool,
}

impl<C: Chart> Animation<C> {
    pub fn new(chart: C, rect: Rect, clock: ProgressClock) -> Self {
        Self { chart, rect, clock, cancel: CancelHandle::new(), frames: 0, finished: false }
    }

    pub fn cancel_handle(&self) -> CancelHandle { self.cancel.clone() }
    pub fn progress(&self) -> f64 { self.clock.progress().min(1.0) }
    pub fn clock(&self) -> &ProgressClock { &self.clock }
    /// Frames drawn so far.
    pub fn frames(&self) -> u64 { self.frames }
    pub fn is_finished(&self) -> bool { self.finished }
    pub fn chart(&self) -> &C { &self.chart }

    /// Draw the next frame and advance the clock.
    pub fn step(&mut self, surface: &mut dyn Surface) -> Tick {
        if self.cancel.is_cancelled() {
            debug!(kind = %self.chart.kind(), frames = self.frames, "animation cancelled");
            return Tick::Cancelled;
        }
        if self.finished {
            return Tick::Finished;
        }

        let progress = self.progress();
        trace!(kind = %self.chart.kind(), frame = self.frames, progress, "animation tick");
        self.chart.draw_frame(surface, self.rect, progress);
        self.frames += 1;

        if self.clock.is_complete() {
            self.finished = true;
            Tick::Finished
        } else {
            self.clock.advance();
            Tick::Continue(self.clock.interval())
        }
    }

    /// Drive the session to the end on the current thread, sleeping between ticks.
    pub fn run_blocking(mut self, surface: &mut dyn Surface) -> Tick {
        loop {
            match self.step(surface) {
                Tick::Continue(delay) => std::thread::sleep(delay),
                done => return done,
            }
        }
    }

    /// Draw the first frame now and let `scheduler` run the remaining ticks.
    pub fn spawn<S>(self, surface: Rc<RefCell<S>>, scheduler: Rc<dyn Scheduler>) -> CancelHandle
    where
        C: 'static,
        S: Surface + 'static,
    {
        let handle = self.cancel_handle();
        drive(self, surface, scheduler);
        handle
    }
}

fn drive<C, S>(mut anim: Animation<C>, surface: Rc<RefCell<S>>, scheduler: Rc<dyn Scheduler>)
where
    C: Chart + 'static,
    S: Surface + 'static,
{
    let tick = anim.step(&mut *surface.borrow_mut());
    if let Tick::Continue(delay) = tick {
        let next = Rc::clone(&scheduler);
        scheduler.defer(delay, Box::new(move || drive(anim, surface, next)));
    }
}

struct Timer {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

/// Deterministic scheduler on a virtual clock; the host pumps it.
///
/// Tasks run in due-time order (insertion order for equal due times), and the
/// clock jumps straight to each task's due time.
#[derive(Default)]
pub struct TimerQueue {
    now: Cell<Duration>,
    seq: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration { self.now.get() }
    pub fn pending(&self) -> usize { self.timers.borrow().len() }

    /// Run the earliest task. Returns false when the queue is empty.
    pub fn run_next(&self) -> bool {
        let next = {
            let mut timers = self.timers.borrow_mut();
            let idx = timers
                .iter()
                .enumerate()
                .min_by_key(|(_, t)| (t.due, t.seq))
                .map(|(i, _)| i);
            idx.map(|i| timers.swap_remove(i))
        };
        match next {
            Some(timer) => {
                self.now.set(self.now.get().max(timer.due));
                (timer.task)();
                true
            }
            None => false,
        }
    }

    /// Run tasks (including ones they schedule) until none are left; returns how many ran.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }
}

impl Scheduler for TimerQueue {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        let due = self.now.get() + delay;
        self.timers.borrow_mut().push(Timer { due, seq, task });
    }
}
