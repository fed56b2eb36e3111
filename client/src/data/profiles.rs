//! Candidate roommates for the swipe queue.

use super::types::{MatchProfile, Preferences};

#[allow(clippy::too_many_arguments)]
fn profile(
    id: u32,
    name: &str,
    age: u8,
    occupation: &str,
    location: &str,
    bio: &str,
    compatibility: u8,
    budget: u32,
    preferences: Preferences,
    interests: &[&str],
    likes_you: bool,
) -> MatchProfile {
    MatchProfile {
        id,
        name: name.to_owned(),
        age,
        occupation: occupation.to_owned(),
        location: location.to_owned(),
        bio: bio.to_owned(),
        images: vec![
            format!("https://i.pravatar.cc/600?img={id}"),
            format!("https://i.pravatar.cc/600?img={}", id + 20),
        ],
        compatibility,
        budget,
        preferences,
        interests: interests.iter().map(|s| (*s).to_owned()).collect(),
        likes_you,
    }
}

/// The full static queue, in presentation order.
pub fn profiles() -> Vec<MatchProfile> {
    vec![
        profile(
            1,
            "Maya Chen",
            26,
            "UX Designer",
            "Brooklyn, NY",
            "Plant parent, weekend hiker and a tidy cook. Looking for someone who respects quiet evenings.",
            94,
            1400,
            Preferences { smoker: false, pets: true, night_owl: false, work_from_home: true },
            &["Hiking", "Cooking", "Design"],
            true,
        ),
        profile(
            2,
            "Jordan Alvarez",
            29,
            "Software Engineer",
            "Queens, NY",
            "Remote dev, board game nights on Fridays. I keep shared spaces clean and split chores fairly.",
            88,
            1600,
            Preferences { smoker: false, pets: false, night_owl: true, work_from_home: true },
            &["Board games", "Cycling", "Coffee"],
            false,
        ),
        profile(
            3,
            "Priya Nair",
            24,
            "Graduate Student",
            "Manhattan, NY",
            "Studying public health. Early riser, gym before class, love a shared Sunday brunch.",
            91,
            1100,
            Preferences { smoker: false, pets: false, night_owl: false, work_from_home: false },
            &["Fitness", "Brunch", "Podcasts"],
            true,
        ),
        profile(
            4,
            "Liam O'Connor",
            31,
            "Chef",
            "Jersey City, NJ",
            "Late shifts at a bistro, so I sleep in. Happy to feed roommates on my days off.",
            76,
            1300,
            Preferences { smoker: true, pets: false, night_owl: true, work_from_home: false },
            &["Food", "Music", "Football"],
            false,
        ),
        profile(
            5,
            "Sofia Rossi",
            27,
            "Nurse",
            "Brooklyn, NY",
            "Rotating shifts, calm at home. Have a very chill cat named Pesto.",
            83,
            1250,
            Preferences { smoker: false, pets: true, night_owl: false, work_from_home: false },
            &["Yoga", "Reading", "Cats"],
            true,
        ),
        profile(
            6,
            "Noah Williams",
            25,
            "Marketing Associate",
            "Hoboken, NJ",
            "Social but respectful. Weekends are for pickup basketball and exploring new neighborhoods.",
            69,
            1500,
            Preferences { smoker: false, pets: false, night_owl: true, work_from_home: false },
            &["Basketball", "Travel", "Photography"],
            false,
        ),
        profile(
            7,
            "Amara Okafor",
            28,
            "Architect",
            "Manhattan, NY",
            "Minimalist with a soft spot for vinyl records. Prefer a roommate who works from home sometimes too.",
            90,
            1800,
            Preferences { smoker: false, pets: false, night_owl: false, work_from_home: true },
            &["Architecture", "Vinyl", "Running"],
            true,
        ),
        profile(
            8,
            "Ethan Park",
            30,
            "Data Analyst",
            "Queens, NY",
            "Quiet, organized, and always up for a movie night. Two-year lease preferred.",
            81,
            1350,
            Preferences { smoker: false, pets: true, night_owl: false, work_from_home: true },
            &["Movies", "Chess", "Baking"],
            false,
        ),
    ]
}
