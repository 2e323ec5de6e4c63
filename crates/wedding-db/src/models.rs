use uuid::Uuid;

/// Guests are unique per invitation by case-insensitive first name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuestKey {
    pub invitation_id: Uuid,
    pub first_name: String,
}

impl GuestKey {
    pub fn new(invitation_id: Uuid, first_name: &str) -> Self {
        Self {
            invitation_id,
            first_name: first_name.to_lowercase(),
        }
    }
}
