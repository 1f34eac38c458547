use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum CirculationError {
    // Identification requested for a patron absent from the directory.
    UnknownPatron {
        message: String,
    },
    // Operation referencing an isbn with zero registered copies ever.
    UnknownTitle {
        message: String,
    },
    // Borrow attempted while a non-empty queue's head is someone else.
    NotFirstInQueue {
        message: String,
    },
    // Borrow attempted with an empty available pool.
    NoCopyAvailable {
        message: String,
    },
}

impl CirculationError {
    pub fn unknown_patron(message: &str) -> CirculationError {
        CirculationError::UnknownPatron { message: message.to_string() }
    }

    pub fn unknown_title(message: &str) -> CirculationError {
        CirculationError::UnknownTitle { message: message.to_string() }
    }

    pub fn not_first_in_queue(message: &str) -> CirculationError {
        CirculationError::NotFirstInQueue { message: message.to_string() }
    }

    pub fn no_copy_available(message: &str) -> CirculationError {
        CirculationError::NoCopyAvailable { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            CirculationError::UnknownPatron { message } => message,
            CirculationError::UnknownTitle { message } => message,
            CirculationError::NotFirstInQueue { message } => message,
            CirculationError::NoCopyAvailable { message } => message,
        }
    }
}

impl Display for CirculationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CirculationError::UnknownPatron { message } => {
                write!(f, "{}", message)
            }
            CirculationError::UnknownTitle { message } => {
                write!(f, "{}", message)
            }
            CirculationError::NotFirstInQueue { message } => {
                write!(f, "{}", message)
            }
            CirculationError::NoCopyAvailable { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for circulation operations.
pub type CirculationResult<T> = Result<T, CirculationError>;

// Outcome of a reservation request that did not fail.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ReservationOutcome {
    // A copy sits in the pool; nothing was queued.
    CopyAvailable,
    // The patron was appended to the isbn's waiting queue.
    Recorded,
}

impl Display for ReservationOutcome {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ReservationOutcome::CopyAvailable => write!(f, "Ouvrage disponible, veuillez l'emprunter."),
            ReservationOutcome::Recorded => write!(f, "Réservation enregistrée"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{CirculationError, ReservationOutcome};

    #[test]
    fn test_should_create_unknown_patron_error() {
        let err = CirculationError::unknown_patron("patron 999 is not registered");
        assert!(matches!(err, CirculationError::UnknownPatron { message: _ }));
        assert_eq!("patron 999 is not registered", err.message());
    }

    #[test]
    fn test_should_create_unknown_title_error() {
        let err = CirculationError::unknown_title("test");
        assert!(matches!(err, CirculationError::UnknownTitle { message: _ }));
    }

    #[test]
    fn test_should_create_not_first_in_queue_error() {
        let err = CirculationError::not_first_in_queue("test");
        assert!(matches!(err, CirculationError::NotFirstInQueue { message: _ }));
    }

    #[test]
    fn test_should_create_no_copy_available_error() {
        let err = CirculationError::no_copy_available("test");
        assert!(matches!(err, CirculationError::NoCopyAvailable { message: _ }));
    }

    #[test]
    fn test_should_format_error_message() {
        let err = CirculationError::unknown_title("no copy of isbn 111-1 was ever registered");
        assert_eq!("no copy of isbn 111-1 was ever registered", err.to_string());
    }

    #[test]
    fn test_should_format_reservation_outcome() {
        assert_eq!("Ouvrage disponible, veuillez l'emprunter.",
                   ReservationOutcome::CopyAvailable.to_string());
        assert_eq!("Réservation enregistrée", ReservationOutcome::Recorded.to_string());
    }
}
