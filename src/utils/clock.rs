use std::cell::RefCell;
use std::rc::Rc;
use chrono::{Local, NaiveDate};

// Clock supplies the current date for due-date math and overdue checks.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

// SystemClock reads the host's local date.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

// FixedClock always reports the same date.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        FixedClock { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

// SharedClock is a cloneable handle to the engine's time source. The
// source can be swapped at any time between operations; the swap takes
// effect on the next date computation and never rewrites existing loans.
#[derive(Clone)]
pub struct SharedClock {
    inner: Rc<RefCell<Box<dyn Clock>>>,
}

impl SharedClock {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        SharedClock { inner: Rc::new(RefCell::new(clock)) }
    }

    pub fn today(&self) -> NaiveDate {
        self.inner.borrow().today()
    }

    pub fn replace(&self, clock: Box<dyn Clock>) {
        *self.inner.borrow_mut() = clock;
    }
}
