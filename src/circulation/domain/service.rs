use std::cell::RefCell;
use std::rc::Rc;
use crate::catalog::domain::CatalogService;
use crate::circulation::domain::model::{CopyKey, LoanEntity};
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::LoanDto;
use crate::circulation::repository::LoanRepository;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::Notice;
use crate::core::library::{CirculationError, CirculationResult};
use crate::hold::domain::HoldService;
use crate::notify::NoticePublisher;
use crate::patrons::domain::model::Patron;
use crate::patrons::domain::PatronService;
use crate::utils::clock::SharedClock;
use crate::utils::date::plus_months;

pub(crate) struct CirculationServiceImpl {
    loan_period_months: u32,
    loan_repository: Rc<RefCell<dyn LoanRepository>>,
    patron_service: Rc<dyn PatronService>,
    catalog_service: Rc<dyn CatalogService>,
    hold_service: Rc<dyn HoldService>,
    notice_publisher: Rc<dyn NoticePublisher>,
    clock: SharedClock,
}

impl CirculationServiceImpl {
    pub(crate) fn new(config: &Configuration,
                      loan_repository: Rc<RefCell<dyn LoanRepository>>,
                      patron_service: Rc<dyn PatronService>,
                      catalog_service: Rc<dyn CatalogService>,
                      hold_service: Rc<dyn HoldService>,
                      notice_publisher: Rc<dyn NoticePublisher>,
                      clock: SharedClock) -> Self {
        Self {
            loan_period_months: config.loan_period_months,
            loan_repository,
            patron_service,
            catalog_service,
            hold_service,
            notice_publisher,
            clock,
        }
    }

    fn create_loan(&self, key: &CopyKey, patron_id: &str) -> LoanEntity {
        let today = self.clock.today();
        let due_on = plus_months(today, self.loan_period_months);
        let loan = LoanEntity::new(key, patron_id, today, due_on);
        self.loan_repository.borrow_mut().save(&loan);
        loan
    }
}

impl CirculationService for CirculationServiceImpl {
    fn borrow(&self, patron: &Patron, isbn: &str) -> CirculationResult<LoanDto> {
        // every check passes before anything mutates, so a failed borrow
        // leaves the queue and the pool exactly as they were
        self.patron_service.identify(patron)?;
        if !self.catalog_service.has_isbn(isbn) {
            return Err(CirculationError::unknown_title(
                format!("no copy of isbn {} was ever registered", isbn).as_str()));
        }
        let through_queue = self.hold_service.has_waiting(isbn);
        if through_queue && !self.hold_service.is_first_in_queue(patron, isbn) {
            return Err(CirculationError::not_first_in_queue(
                format!("patron {} is not first in the queue for isbn {}",
                        patron.id(), isbn).as_str()));
        }
        if self.catalog_service.available_copy_count(isbn) == 0 {
            return Err(CirculationError::no_copy_available(
                format!("no copy of isbn {} is available", isbn).as_str()));
        }

        let copy_number = match self.catalog_service.take_copy(isbn) {
            Some(copy_number) => copy_number,
            None => {
                return Err(CirculationError::no_copy_available(
                    format!("no copy of isbn {} is available", isbn).as_str()));
            }
        };
        if through_queue {
            let _ = self.hold_service.pop_head(isbn);
        }
        let key = CopyKey::new(isbn, copy_number);
        let loan = self.create_loan(&key, patron.id().as_str());
        tracing::debug!("loan {} opened: copy {} to patron {} until {}",
                        loan.id(), key, loan.patron_id, loan.due_on);
        Ok(LoanDto::from(&loan))
    }

    fn return_copy(&self, isbn: &str, copy_number: u32) {
        let key = CopyKey::new(isbn, copy_number);
        let loan = match self.loan_repository.borrow().get(&key) {
            Some(loan) => loan,
            None => return,
        };

        let today = self.clock.today();
        if loan.is_overdue(today) {
            match Notice::overdue_return(key.to_string().as_str(), loan.patron_id.as_str(),
                                         today, &LoanDto::from(&loan)) {
                Ok(notice) => self.notice_publisher.publish(&notice),
                Err(err) => tracing::warn!("overdue notice for {} could not be built: {}", key, err),
            }
        }
        let _ = self.loan_repository.borrow_mut().remove(&key);

        // a waiting patron takes the copy directly, it never touches the pool
        if let Some(next_patron_id) = self.hold_service.pop_head(isbn) {
            let handoff = self.create_loan(&key, next_patron_id.as_str());
            tracing::debug!("copy {} handed off to patron {} until {}",
                            key, handoff.patron_id, handoff.due_on);
        } else {
            self.catalog_service.restore_copy(isbn, copy_number);
        }
    }

    fn overdue_loans(&self, patron: &Patron) -> Vec<String> {
        let today = self.clock.today();
        let loans = self.loan_repository.borrow().find_by_patron(patron.id().as_str());
        loans.into_iter()
            .filter(|loan| loan.is_overdue(today))
            .map(|loan| loan.isbn)
            .collect()
    }
}
