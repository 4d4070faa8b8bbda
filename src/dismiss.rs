use crate::config::Config;
use crate::error::Result;
use std::time::Duration;

/// A notification whose dismissal is owned by the host UI toolkit.
pub trait Dismissible {
    fn close(&self) -> Result<()>;
}

/// Wraps page elements in the toolkit's dismissal controller.
pub trait AlertToolkit {
    type Element;
    type Alert: Dismissible;

    fn attach(&self, element: &Self::Element) -> Result<Self::Alert>;
}

/// Finds the alerts currently on the page.
pub trait AlertSource {
    type Element;

    fn alerts(&self, selector: &str) -> Vec<Self::Element>;
}

pub trait Scheduler {
    /// Runs `task` once after `delay` has elapsed.
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Closes every success alert a fixed time after the page became ready.
pub struct AutoDismiss {
    delay: Duration,
    selector: String,
}

impl AutoDismiss {
    pub fn new(config: &Config) -> Self {
        AutoDismiss {
            delay: config.dismiss_delay(),
            selector: config.alert_selector.clone(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules a single dismissal pass. Alerts are looked up when the timer fires, not when it
    /// is armed.
    pub fn arm<S, A, T>(self, scheduler: &S, source: A, toolkit: T)
    where
        S: Scheduler,
        A: AlertSource + 'static,
        T: AlertToolkit<Element = A::Element> + 'static,
    {
        log::trace!("closing {} in {:?}", self.selector, self.delay);
        let delay = self.delay;
        scheduler.schedule_once(
            delay,
            Box::new(move || {
                let closed = self.dismiss(&source, &toolkit);
                log::debug!("closed {closed} alert(s) matching {}", self.selector);
            }),
        );
    }

    /// Arms dismissal on the scheduler's next turn, resolving `config` only then.
    ///
    /// Page script that runs as soon as the module has initialised (e.g. a `configure` call after
    /// `await init()`) still lands before the configuration is read.
    pub fn arm_next_turn<S, C, A, T>(scheduler: &S, config: C, source: A, toolkit: T)
    where
        S: Scheduler + Clone + 'static,
        C: FnOnce() -> Config + 'static,
        A: AlertSource + 'static,
        T: AlertToolkit<Element = A::Element> + 'static,
    {
        let next = scheduler.clone();
        scheduler.schedule_once(
            Duration::ZERO,
            Box::new(move || AutoDismiss::new(&config()).arm(&next, source, toolkit)),
        );
    }

    /// Closes the alerts present right now, returning how many were closed.
    ///
    /// A failure on one alert is logged and does not stop the others from closing.
    pub fn dismiss<A, T>(&self, source: &A, toolkit: &T) -> usize
    where
        A: AlertSource,
        T: AlertToolkit<Element = A::Element>,
    {
        let mut closed = 0;
        for element in source.alerts(&self.selector) {
            match toolkit.attach(&element).and_then(|alert| alert.close()) {
                Ok(()) => closed += 1,
                Err(e) => log::error!("unable to close alert: {}", e),
            }
        }
        closed
    }
}
