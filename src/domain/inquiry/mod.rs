//! Inquiry - contact and waitlist forms relayed to the studio inbox.

mod contact;
mod waitlist;

pub use contact::{ContactForm, ContactMessage, InquiryProjectType};
pub use waitlist::{WaitlistForm, WaitlistSignup};
