use crate::types::Activity;

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Art Workshop",
        "Explore painting, drawing, and sculpture techniques",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["isabella@mergington.edu", "lucas@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "charlotte@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["benjamin@mergington.edu", "evelyn@mergington.edu"],
    ),
];

/// The activities offered when the service starts.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED.iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(*description, *schedule, *max)
                    .with_participants(participants.iter().copied()),
            )
        })
        .collect()
}
