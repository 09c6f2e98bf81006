use crate::models::Requester;

/// Supplies the requester identity attached to new bookings. The booking
/// layer only reads it; profile storage and session handling live with the
/// implementation.
pub trait IdentityProvider: Send + Sync {
    /// The currently active requester, if a profile has been established.
    fn current(&self) -> Option<Requester>;
}
