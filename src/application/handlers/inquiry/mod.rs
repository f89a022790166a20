//! Contact and waitlist handlers.

mod join_waitlist;
mod send_contact;

pub use join_waitlist::JoinWaitlistHandler;
pub use send_contact::SendContactHandler;
