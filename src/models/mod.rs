pub mod availability;
pub mod booking;

pub use availability::AvailabilityReport;
pub use booking::{Booking, BookingRequest, BookingStatus, NewBooking};
