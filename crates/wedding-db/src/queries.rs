use chrono::Utc;
use indexmap::map::Entry;
use std::collections::hash_map;
use tracing::debug;
use uuid::Uuid;

use wedding_types::models::{
    Guest, Invitation, InvitationUpdate, NewGuest, NewInvitation, NewRsvp, NewUser, Rsvp, User,
};

use crate::models::GuestKey;
use crate::{Database, Result, StoreError};

impl Database {
    // -- Users --

    pub fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users()?.get(&id).cloned())
    }

    /// First user created with this username. Usernames are not unique here;
    /// callers that need uniqueness check before creating.
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users()?
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    pub fn create_user(&self, new: NewUser) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: new.username,
            password: new.password,
        };
        self.users()?.insert(user.id, user.clone());
        Ok(user)
    }

    // -- Invitations --

    pub fn get_invitation_by_username(&self, username: &str) -> Result<Option<Invitation>> {
        Ok(self.invitations()?.get(username).cloned())
    }

    pub fn get_invitation(&self, id: Uuid) -> Result<Option<Invitation>> {
        Ok(self
            .invitations()?
            .values()
            .find(|inv| inv.id == id)
            .cloned())
    }

    pub fn count_invitations(&self) -> Result<usize> {
        Ok(self.invitations()?.len())
    }

    pub fn create_invitation(&self, new: NewInvitation) -> Result<Invitation> {
        let mut invitations = self.invitations()?;

        match invitations.entry(new.username.clone()) {
            hash_map::Entry::Occupied(_) => Err(StoreError::UsernameTaken(new.username)),
            hash_map::Entry::Vacant(slot) => {
                let invitation = new.into_invitation(Uuid::new_v4(), Utc::now());
                debug!("Created invitation '{}'", invitation.username);
                Ok(slot.insert(invitation).clone())
            }
        }
    }

    /// Merge `update` into the invitation for `username`.
    /// Returns `None` without touching anything when no such invitation exists.
    pub fn update_invitation(
        &self,
        username: &str,
        update: InvitationUpdate,
    ) -> Result<Option<Invitation>> {
        let mut invitations = self.invitations()?;

        let Some(invitation) = invitations.get_mut(username) else {
            debug!("No invitation '{}' to update", username);
            return Ok(None);
        };

        update.apply(invitation);
        Ok(Some(invitation.clone()))
    }

    // -- Guests --

    pub fn create_guest(&self, new: NewGuest) -> Result<Guest> {
        let mut guests = self.guests()?;

        match guests.entry(GuestKey::new(new.invitation_id, &new.first_name)) {
            Entry::Occupied(_) => Err(StoreError::DuplicateGuest {
                invitation_id: new.invitation_id,
                first_name: new.first_name,
            }),
            Entry::Vacant(slot) => {
                let guest = Guest {
                    id: Uuid::new_v4(),
                    invitation_id: new.invitation_id,
                    first_name: new.first_name,
                    last_name: new.last_name,
                    siblings_invited: new.siblings_invited,
                    created_at: Utc::now(),
                };
                Ok(slot.insert(guest).clone())
            }
        }
    }

    /// Guests of one invitation, in creation order.
    pub fn get_guests_by_invitation(&self, invitation_id: Uuid) -> Result<Vec<Guest>> {
        Ok(self
            .guests()?
            .values()
            .filter(|g| g.invitation_id == invitation_id)
            .cloned()
            .collect())
    }

    /// Case-insensitive lookup of a guest within one invitation.
    pub fn get_guest_by_name(&self, invitation_id: Uuid, first_name: &str) -> Result<Option<Guest>> {
        Ok(self
            .guests()?
            .get(&GuestKey::new(invitation_id, first_name))
            .cloned())
    }

    pub fn get_guest(&self, id: Uuid) -> Result<Option<Guest>> {
        Ok(self.guests()?.values().find(|g| g.id == id).cloned())
    }

    // -- RSVPs --

    /// Always appends. References are not checked here.
    pub fn create_rsvp(&self, new: NewRsvp) -> Result<Rsvp> {
        let rsvp = Rsvp {
            id: Uuid::new_v4(),
            invitation_id: new.invitation_id,
            guest_id: new.guest_id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            attending: new.attending,
            guest_count: new.guest_count,
            message: new.message,
            created_at: Utc::now(),
        };
        self.rsvps()?.insert(rsvp.id, rsvp.clone());
        Ok(rsvp)
    }

    pub fn get_rsvps_by_invitation(&self, invitation_id: Uuid) -> Result<Vec<Rsvp>> {
        Ok(self
            .rsvps()?
            .values()
            .filter(|r| r.invitation_id == invitation_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_invitation(username: &str) -> NewInvitation {
        NewInvitation {
            username: username.into(),
            groom_name: "Hamza".into(),
            bride_name: "Andrea".into(),
            wedding_date: "Saturday, Aug 22nd, 2025".into(),
            reception_time: "6:00 PM - 11:00 PM".into(),
            reception_venue: "The Social Studio".into(),
            reception_address: "3520 Seagate Way".into(),
            dress_code: Some("Cocktail".into()),
            photos: vec!["/a.jpeg".into(), "/b.jpeg".into()],
            ..Default::default()
        }
    }

    fn new_guest(invitation_id: Uuid, first_name: &str) -> NewGuest {
        NewGuest {
            invitation_id,
            first_name: first_name.into(),
            last_name: "Bouthour".into(),
            siblings_invited: None,
        }
    }

    fn new_rsvp(invitation_id: Uuid) -> NewRsvp {
        NewRsvp {
            invitation_id,
            guest_id: None,
            first_name: "Afef".into(),
            last_name: "Triki".into(),
            email: "afef@example.com".into(),
            attending: true,
            guest_count: 1,
            message: None,
        }
    }

    #[test]
    fn unknown_username_is_absent() {
        let db = Database::empty();
        assert!(db.get_invitation_by_username("nobody").unwrap().is_none());

        db.create_invitation(new_invitation("someone")).unwrap();
        assert!(db.get_invitation_by_username("nobody").unwrap().is_none());
    }

    #[test]
    fn created_invitation_round_trips() {
        let db = Database::empty();
        let input = new_invitation("a-b");

        let created = db.create_invitation(input.clone()).unwrap();
        let fetched = db.get_invitation_by_username("a-b").unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched, input.into_invitation(created.id, created.created_at));
        assert_eq!(db.get_invitation(created.id).unwrap(), Some(created));
    }

    #[test]
    fn duplicate_username_is_rejected_without_overwrite() {
        let db = Database::empty();
        let first = db.create_invitation(new_invitation("a-b")).unwrap();

        let mut again = new_invitation("a-b");
        again.groom_name = "Someone else".into();
        let err = db.create_invitation(again).unwrap_err();

        assert!(matches!(err, StoreError::UsernameTaken(ref u) if u == "a-b"));
        assert_eq!(db.get_invitation_by_username("a-b").unwrap(), Some(first));
    }

    #[test]
    fn update_merges_only_given_fields() {
        let db = Database::empty();
        let before = db.create_invitation(new_invitation("a-b")).unwrap();

        let after = db
            .update_invitation(
                "a-b",
                InvitationUpdate {
                    wedding_date: Some("Sunday".into()),
                    dress_code: Some(None),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(after.wedding_date, "Sunday");
        assert_eq!(after.dress_code, None);
        assert_eq!(after.id, before.id);
        assert_eq!(after.groom_name, before.groom_name);
        assert_eq!(after.photos, before.photos);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(db.get_invitation_by_username("a-b").unwrap(), Some(after));
    }

    #[test]
    fn update_of_unknown_username_mutates_nothing() {
        let db = Database::empty();
        let existing = db.create_invitation(new_invitation("a-b")).unwrap();

        let result = db
            .update_invitation(
                "c-d",
                InvitationUpdate {
                    groom_name: Some("X".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(result.is_none());
        assert!(db.get_invitation_by_username("c-d").unwrap().is_none());
        assert_eq!(db.get_invitation_by_username("a-b").unwrap(), Some(existing));
    }

    #[test]
    fn guest_lookup_is_case_insensitive_and_scoped() {
        let db = Database::empty();
        let a = db.create_invitation(new_invitation("a")).unwrap();
        let b = db.create_invitation(new_invitation("b")).unwrap();

        let sahar = db.create_guest(new_guest(a.id, "Sahar")).unwrap();

        for name in ["sahar", "SAHAR", "Sahar"] {
            assert_eq!(db.get_guest_by_name(a.id, name).unwrap().as_ref(), Some(&sahar));
        }
        assert!(db.get_guest_by_name(b.id, "sahar").unwrap().is_none());
    }

    #[test]
    fn same_first_name_in_two_invitations_coexists() {
        let db = Database::empty();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let in_a = db.create_guest(new_guest(a, "Sahar")).unwrap();
        let in_b = db.create_guest(new_guest(b, "sahar")).unwrap();

        assert_eq!(db.get_guest_by_name(a, "sahar").unwrap(), Some(in_a));
        assert_eq!(db.get_guest_by_name(b, "Sahar").unwrap(), Some(in_b));
    }

    #[test]
    fn duplicate_guest_is_rejected() {
        let db = Database::empty();
        let a = Uuid::new_v4();

        let first = db.create_guest(new_guest(a, "Sahar")).unwrap();
        let err = db.create_guest(new_guest(a, "SAHAR")).unwrap_err();

        assert!(matches!(err, StoreError::DuplicateGuest { invitation_id, .. } if invitation_id == a));
        assert_eq!(db.get_guests_by_invitation(a).unwrap(), vec![first]);
    }

    #[test]
    fn guests_by_invitation_keep_creation_order() {
        let db = Database::empty();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let first = db.create_guest(new_guest(a, "Zed")).unwrap();
        db.create_guest(new_guest(b, "Other")).unwrap();
        let second = db.create_guest(new_guest(a, "Amy")).unwrap();

        assert_eq!(db.get_guests_by_invitation(a).unwrap(), vec![first.clone(), second]);
        assert_eq!(db.get_guest(first.id).unwrap(), Some(first));
        assert!(db.get_guests_by_invitation(Uuid::new_v4()).unwrap().is_empty());
    }

    #[test]
    fn rsvps_are_append_only_and_keep_duplicates() {
        let db = Database::empty();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let first = db.create_rsvp(new_rsvp(a)).unwrap();
        db.create_rsvp(new_rsvp(b)).unwrap();
        let second = db.create_rsvp(new_rsvp(a)).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(db.get_rsvps_by_invitation(a).unwrap(), vec![first, second]);
        assert_eq!(db.get_rsvps_by_invitation(b).unwrap().len(), 1);
    }

    #[test]
    fn users_by_username_return_first_created() {
        let db = Database::empty();
        let first = db
            .create_user(NewUser {
                username: "admin".into(),
                password: "one".into(),
            })
            .unwrap();
        db.create_user(NewUser {
            username: "admin".into(),
            password: "two".into(),
        })
        .unwrap();

        assert_eq!(db.get_user_by_username("admin").unwrap(), Some(first.clone()));
        assert_eq!(db.get_user(first.id).unwrap(), Some(first));
        assert!(db.get_user(Uuid::new_v4()).unwrap().is_none());
        assert!(db.get_user_by_username("root").unwrap().is_none());
    }
}
