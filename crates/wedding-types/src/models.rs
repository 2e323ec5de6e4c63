use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -- Users --

/// Stub account record. The password is kept as given and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

// -- Invitations --

/// The wedding-event record, looked up by its unique `username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: Uuid,
    pub username: String,
    pub groom_name: String,
    pub bride_name: String,
    pub wedding_date: String,
    pub reception_time: String,
    pub reception_venue: String,
    pub reception_address: String,
    pub story_text: Option<String>,
    pub proposal_text: Option<String>,
    pub dress_code: Option<String>,
    pub rsvp_deadline: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Everything an invitation carries except its id and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvitation {
    pub username: String,
    pub groom_name: String,
    pub bride_name: String,
    pub wedding_date: String,
    pub reception_time: String,
    pub reception_venue: String,
    pub reception_address: String,
    pub story_text: Option<String>,
    pub proposal_text: Option<String>,
    pub dress_code: Option<String>,
    pub rsvp_deadline: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl NewInvitation {
    pub fn into_invitation(self, id: Uuid, created_at: DateTime<Utc>) -> Invitation {
        Invitation {
            id,
            username: self.username,
            groom_name: self.groom_name,
            bride_name: self.bride_name,
            wedding_date: self.wedding_date,
            reception_time: self.reception_time,
            reception_venue: self.reception_venue,
            reception_address: self.reception_address,
            story_text: self.story_text,
            proposal_text: self.proposal_text,
            dress_code: self.dress_code,
            rsvp_deadline: self.rsvp_deadline,
            photos: self.photos,
            created_at,
        }
    }
}

/// Field-level patch for an invitation. `None` leaves a field untouched; for
/// the optional text fields `Some(None)` clears the value.
///
/// The username is the lookup key and cannot be changed through a patch.
#[derive(Debug, Clone, Default)]
pub struct InvitationUpdate {
    pub groom_name: Option<String>,
    pub bride_name: Option<String>,
    pub wedding_date: Option<String>,
    pub reception_time: Option<String>,
    pub reception_venue: Option<String>,
    pub reception_address: Option<String>,
    pub story_text: Option<Option<String>>,
    pub proposal_text: Option<Option<String>>,
    pub dress_code: Option<Option<String>>,
    pub rsvp_deadline: Option<Option<String>>,
    pub photos: Option<Vec<String>>,
}

impl InvitationUpdate {
    pub fn apply(self, invitation: &mut Invitation) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        merge(&mut invitation.groom_name, self.groom_name);
        merge(&mut invitation.bride_name, self.bride_name);
        merge(&mut invitation.wedding_date, self.wedding_date);
        merge(&mut invitation.reception_time, self.reception_time);
        merge(&mut invitation.reception_venue, self.reception_venue);
        merge(&mut invitation.reception_address, self.reception_address);
        merge(&mut invitation.story_text, self.story_text);
        merge(&mut invitation.proposal_text, self.proposal_text);
        merge(&mut invitation.dress_code, self.dress_code);
        merge(&mut invitation.rsvp_deadline, self.rsvp_deadline);
        merge(&mut invitation.photos, self.photos);
    }
}

// -- Guests --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: Uuid,
    pub invitation_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub siblings_invited: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGuest {
    pub invitation_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub siblings_invited: Option<String>,
}

// -- RSVPs --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: Uuid,
    pub invitation_id: Uuid,
    pub guest_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub attending: bool,
    pub guest_count: i32,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated RSVP submission. Built by [`crate::api::validate_rsvp`] at the
/// HTTP boundary, or directly by callers that already hold typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRsvp {
    pub invitation_id: Uuid,
    pub guest_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub attending: bool,
    pub guest_count: i32,
    pub message: Option<String>,
}
