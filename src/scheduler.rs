use crate::{
    checks::{
        cycle::{CheckCycle, CycleReport},
        inspector::Inspector,
    },
    config::Config,
    notificator::Dispatcher,
};
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use std::thread;
use tracing::{debug, error, info};


/// Source of wall-clock time and the way to wait for it
pub trait Clock {
    /// Time zone in which the check hour is interpreted
    type Zone: TimeZone;

    /// Current time
    fn now(&self) -> DateTime<Self::Zone>;

    /// Block until given instant
    fn sleep_until(&self, instant: &DateTime<Self::Zone>);
}


impl<C: Clock + ?Sized> Clock for &C {
    type Zone = C::Zone;

    fn now(&self) -> DateTime<Self::Zone> {
        (**self).now()
    }

    fn sleep_until(&self, instant: &DateTime<Self::Zone>) {
        (**self).sleep_until(instant)
    }
}


/// Local system clock
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;


impl Clock for SystemClock {
    type Zone = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep_until(&self, instant: &DateTime<Local>) {
        let remaining = (*instant - Local::now()).to_std().unwrap_or_default();
        thread::sleep(remaining)
    }
}


/// Scheduler state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulerState {
    /// Waiting for the next check
    Idle,

    /// Check cycle in progress
    Checking,
}


/// First instant strictly after now at check_hour:00:00 in the time zone of now.
/// Local times skipped by DST resolve to one hour later, repeated ones to the earliest.
pub fn next_fire<Tz: TimeZone>(now: &DateTime<Tz>, check_hour: u32) -> Option<DateTime<Tz>> {
    let timezone = now.timezone();
    let mut day = now.date_naive();
    for _ in 0..3 {
        let at_hour = day.and_hms_opt(check_hour, 0, 0)?;
        let candidate = timezone
            .from_local_datetime(&at_hour)
            .earliest()
            .or_else(|| {
                timezone
                    .from_local_datetime(&(at_hour + Duration::hours(1)))
                    .earliest()
            });
        match candidate {
            Some(instant) if instant > *now => return Some(instant),
            _ => day = day.succ_opt()?,
        }
    }
    None
}


/// Runs a check cycle on start, then once a day at the configured hour
#[derive(Debug)]
pub struct Scheduler<'a, I, D, C> {
    config: &'a Config,
    inspector: &'a I,
    dispatcher: &'a D,
    clock: C,
    state: SchedulerState,
    last_run: Option<NaiveDate>,
}


impl<'a, I: Inspector, D: Dispatcher, C: Clock> Scheduler<'a, I, D, C> {
    /// New idle scheduler
    pub fn new(
        config: &'a Config,
        inspector: &'a I,
        dispatcher: &'a D,
        clock: C,
    ) -> Scheduler<'a, I, D, C> {
        Scheduler {
            config,
            inspector,
            dispatcher,
            clock,
            state: SchedulerState::Idle,
            last_run: None,
        }
    }


    /// Current state
    pub fn state(&self) -> SchedulerState {
        self.state
    }


    /// Local date of the last finished cycle
    pub fn last_run(&self) -> Option<NaiveDate> {
        self.last_run
    }


    fn transition(&mut self, state: SchedulerState) {
        debug!("Scheduler state: {:?} -> {:?}", self.state, state);
        self.state = state;
    }


    /// Run one check cycle right now
    pub fn run_cycle(&mut self) -> CycleReport {
        self.transition(SchedulerState::Checking);
        let now = self.clock.now();
        let report = CheckCycle::new(self.config, self.inspector, self.dispatcher)
            .run(now.with_timezone(&Utc));
        self.last_run = Some(now.date_naive());
        self.transition(SchedulerState::Idle);
        report
    }


    /// Wait for the next check hour and run a cycle.
    /// Returns None when the cycle was skipped by the once-per-day guard.
    pub fn tick(&mut self) -> Option<CycleReport> {
        let now = self.clock.now();
        let next = match next_fire(&now, self.config.check_hour) {
            Some(next) => next,
            None => {
                error!(
                    "Couldn't compute next check time after: {}! Retrying in an hour…",
                    now.naive_local()
                );
                self.clock.sleep_until(&(now + Duration::hours(1)));
                return None;
            }
        };
        info!("Next certificate check at: {}", next.naive_local());
        self.clock.sleep_until(&next);
        // wall clock may have stepped back while sleeping:
        while self.clock.now() < next {
            debug!(
                "Woke up at: {} before check time. Sleeping again…",
                self.clock.now().naive_local()
            );
            self.clock.sleep_until(&next);
        }

        if self.config.once_per_day && self.last_run == Some(next.date_naive()) {
            info!(
                "Certificates were already checked on: {}. Skipping…",
                next.date_naive()
            );
            return None;
        }
        Some(self.run_cycle())
    }


    /// Check now, then daily, forever
    pub fn run(mut self) -> ! {
        info!(
            "Initial certificate check of {} endpoints…",
            self.config.urls.len()
        );
        self.run_cycle();
        loop {
            self.tick();
        }
    }
}
