use tracing::info;

use wedding_types::models::{NewGuest, NewInvitation};

use crate::{Database, Result};

pub const SAMPLE_USERNAME: &str = "hamza-andrea";

const SAMPLE_PHOTOS: [&str; 10] = [
    "/attached_assets/04b3ffcc-a37c-4442-85c8-c1d1d59533db_1754427804317.jpeg",
    "/attached_assets/2e017fa1-b21c-4ac3-b297-7527991d3717_1754427847296.jpeg",
    "/attached_assets/4da7a5e3-9567-4e85-a4c0-a0cc5e22e056_1754427847297.jpeg",
    "/attached_assets/5c0a14dc-24ae-48d6-a81d-7aa3c2d7c7c7_1754427847297.jpeg",
    "/attached_assets/5c58ba37-3836-4212-95bd-2caac37d7514_1754427847297.jpeg",
    "/attached_assets/468a85cc-7581-4bd2-be29-785f443fcc88_1754427847297.jpeg",
    "/attached_assets/bf01c718-0180-4a2c-9d77-4f20ade486be_1754427847297.jpeg",
    "/attached_assets/bg-4_1754427847297.jpeg",
    "/attached_assets/d381c236-bbc9-4830-9a99-ebb2e3d20808_1754427847298.jpeg",
    "/attached_assets/27cd7684-4839-47e8-a75e-67f1a246046e_1754427847298.jpeg",
];

/// (first name, last name, siblings invited)
const SAMPLE_GUESTS: [(&str, &str, Option<&str>); 3] = [
    ("Sahar", "Bouthour", None),
    ("Khoubeib", "Bouthour", Some("Soumaya, Skander, Yasmine")),
    ("Afef", "Triki", None),
];

fn sample_invitation() -> NewInvitation {
    NewInvitation {
        username: SAMPLE_USERNAME.into(),
        groom_name: "Hamza".into(),
        bride_name: "Andrea".into(),
        wedding_date: "Saturday, Aug 22nd, 2025".into(),
        reception_time: "6:00 PM - 11:00 PM".into(),
        reception_venue: "The Social Studio".into(),
        reception_address: "3520 Seagate Way\nOceanside, CA 92056".into(),
        story_text: Some(
            "Our paths crossed on a beautiful spring morning at the local Walmart in Escondido. \
             Hamza was searching for the perfect spices for his pasta, while Andrea was looking \
             for fresh ingredients for a special dinner. A chance encounter over the most \
             beautiful peonies led to our first conversation."
                .into(),
        ),
        proposal_text: Some(
            "Two years later, Hamza planned the most romantic surprise at the same Walmart \
             market where we first met, he got down on one knee and asked Andrea to be his \
             forever."
                .into(),
        ),
        dress_code: Some("Cocktail Attire - Garden Party Elegant".into()),
        rsvp_deadline: Some("Aug 15th, 2025".into()),
        photos: SAMPLE_PHOTOS.iter().map(|p| p.to_string()).collect(),
    }
}

/// Insert the sample invitation and its three guests.
pub fn run(db: &Database) -> Result<()> {
    let invitation = db.create_invitation(sample_invitation())?;

    for (first_name, last_name, siblings) in SAMPLE_GUESTS {
        db.create_guest(NewGuest {
            invitation_id: invitation.id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            siblings_invited: siblings.map(str::to_string),
        })?;
    }

    info!(
        "Seeded invitation '{}' with {} guests",
        invitation.username,
        SAMPLE_GUESTS.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;

    #[test]
    fn seeds_one_invitation_with_three_guests() {
        let db = Database::new().unwrap();

        let inv = db.get_invitation_by_username(SAMPLE_USERNAME).unwrap().unwrap();
        assert_eq!(inv.groom_name, "Hamza");
        assert_eq!(inv.bride_name, "Andrea");
        assert_eq!(inv.photos.len(), 10);
        assert_eq!(db.count_invitations().unwrap(), 1);

        let guests = db.get_guests_by_invitation(inv.id).unwrap();
        let names: Vec<_> = guests.iter().map(|g| g.first_name.as_str()).collect();
        assert_eq!(names, vec!["Sahar", "Khoubeib", "Afef"]);

        let khoubeib = db.get_guest_by_name(inv.id, "khoubeib").unwrap().unwrap();
        assert_eq!(khoubeib.siblings_invited.as_deref(), Some("Soumaya, Skander, Yasmine"));
        assert!(db.get_rsvps_by_invitation(inv.id).unwrap().is_empty());
    }

    #[test]
    fn seeding_twice_fails_on_username() {
        let db = Database::new().unwrap();
        assert!(matches!(run(&db), Err(StoreError::UsernameTaken(_))));
    }
}
