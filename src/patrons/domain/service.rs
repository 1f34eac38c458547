use std::cell::RefCell;
use std::rc::Rc;
use crate::core::domain::Identifiable;
use crate::core::library::{CirculationError, CirculationResult};
use crate::patrons::domain::model::Patron;
use crate::patrons::domain::PatronService;
use crate::patrons::repository::PatronRepository;

pub(crate) struct PatronServiceImpl {
    patron_repository: Rc<RefCell<dyn PatronRepository>>,
}

impl PatronServiceImpl {
    pub(crate) fn new(patron_repository: Rc<RefCell<dyn PatronRepository>>) -> Self {
        Self {
            patron_repository,
        }
    }
}

impl PatronService for PatronServiceImpl {
    fn register_patron(&self, patron: &Patron) {
        self.patron_repository.borrow_mut().save(patron);
    }

    fn identify(&self, patron: &Patron) -> CirculationResult<bool> {
        if self.patron_repository.borrow().exists(patron.id().as_str()) {
            Ok(true)
        } else {
            Err(CirculationError::unknown_patron(
                format!("patron {} is not registered", patron.id()).as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::core::library::CirculationError;
    use crate::patrons::domain::model::Patron;
    use crate::patrons::domain::PatronService;
    use crate::patrons::domain::service::PatronServiceImpl;
    use crate::patrons::repository::InMemoryPatronRepository;

    fn service() -> PatronServiceImpl {
        PatronServiceImpl::new(Rc::new(RefCell::new(InMemoryPatronRepository::new())))
    }

    #[test]
    fn test_should_reject_unknown_patron() {
        let patron_svc = service();
        let marie = Patron::new("Dupont", "Marie", "999");
        let res = patron_svc.identify(&marie);
        assert!(matches!(res, Err(CirculationError::UnknownPatron { message: _ })));
    }

    #[test]
    fn test_should_identify_registered_patron() {
        let patron_svc = service();
        let jeanne = Patron::new("Dupont", "Jeanne", "2");
        patron_svc.register_patron(&jeanne);
        assert!(patron_svc.identify(&jeanne).expect("should identify"));
    }

    #[test]
    fn test_should_identify_by_id_regardless_of_names() {
        let patron_svc = service();
        patron_svc.register_patron(&Patron::new("Dupont", "Jeanne", "2"));
        let renamed = Patron::new("Autre", "Personne", "2");
        assert!(patron_svc.identify(&renamed).expect("should identify"));
    }
}
