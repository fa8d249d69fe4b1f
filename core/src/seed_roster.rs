//! The built-in roster the desk starts from when no import file is given.
//!
//! Ten records spanning every stored availability state and the three
//! mission-critical roles, so a fresh desk already exercises alerts,
//! scoring and the what-if simulator.

use crate::personnel::{Availability, PersonnelRecord};

struct Seed {
    id:           &'static str,
    name:         &'static str,
    rank:         &'static str,
    role:         &'static str,
    skills:       [&'static str; 3],
    health:       u32,
    training:     u32,
    availability: Availability,
    years:        u32,
    deployment:   &'static str,
    last_trained: &'static str,
    restrictions: &'static [&'static str],
    phone_suffix: &'static str,
    email:        &'static str,
}

const SEEDS: [Seed; 10] = [
    Seed {
        id: "001", name: "Capt. Alex Thompson", rank: "Captain", role: "Pilot",
        skills: ["Fighter Operations", "Night Ops", "Air-to-Air Combat"],
        health: 92, training: 88, availability: Availability::Available, years: 8,
        deployment: "Home Base", last_trained: "2024-12-15", restrictions: &[],
        phone_suffix: "0101", email: "a.thompson@iaf.mil",
    },
    Seed {
        id: "002", name: "Lt. Sarah Wilson", rank: "Lieutenant", role: "Engineer",
        skills: ["Aircraft Maintenance", "Electronics", "Systems Analysis"],
        health: 85, training: 94, availability: Availability::Available, years: 5,
        deployment: "Home Base", last_trained: "2024-12-10", restrictions: &[],
        phone_suffix: "0102", email: "s.wilson@iaf.mil",
    },
    Seed {
        id: "003", name: "Sgt. Mike Johnson", rank: "Sergeant", role: "Medic",
        skills: ["Emergency Medicine", "Field Surgery", "Triage"],
        health: 78, training: 91, availability: Availability::Deployed, years: 12,
        deployment: "Forward Base Charlie", last_trained: "2024-11-20",
        restrictions: &["Limited Heavy Lifting"],
        phone_suffix: "0103", email: "m.johnson@iaf.mil",
    },
    Seed {
        id: "004", name: "Maj. Lisa Chen", rank: "Major", role: "Intelligence",
        skills: ["Data Analysis", "Surveillance", "Threat Assessment"],
        health: 89, training: 96, availability: Availability::Available, years: 10,
        deployment: "Home Base", last_trained: "2024-12-18", restrictions: &[],
        phone_suffix: "0104", email: "l.chen@iaf.mil",
    },
    Seed {
        id: "005", name: "Lt. Col. Robert Davis", rank: "Lieutenant Colonel", role: "Pilot",
        skills: ["Transport Operations", "Formation Flying", "Navigation"],
        health: 82, training: 85, availability: Availability::Leave, years: 15,
        deployment: "Home Base", last_trained: "2024-10-15",
        restrictions: &["Vision Correction Required"],
        phone_suffix: "0105", email: "r.davis@iaf.mil",
    },
    Seed {
        id: "006", name: "Cpl. Emma Rodriguez", rank: "Corporal", role: "Communications",
        skills: ["Radio Operations", "Satellite Comm", "Encryption"],
        health: 91, training: 87, availability: Availability::Available, years: 4,
        deployment: "Home Base", last_trained: "2024-12-05", restrictions: &[],
        phone_suffix: "0106", email: "e.rodriguez@iaf.mil",
    },
    Seed {
        id: "007", name: "Capt. James Anderson", rank: "Captain", role: "Engineer",
        skills: ["Avionics", "Radar Systems", "Electronic Warfare"],
        health: 76, training: 92, availability: Availability::Medical, years: 9,
        deployment: "Home Base", last_trained: "2024-11-28",
        restrictions: &["Temporary Duty Restriction"],
        phone_suffix: "0107", email: "j.anderson@iaf.mil",
    },
    Seed {
        id: "008", name: "Lt. Maria Gonzalez", rank: "Lieutenant", role: "Pilot",
        skills: ["Helicopter Operations", "Search & Rescue", "Medical Evacuation"],
        health: 94, training: 89, availability: Availability::Available, years: 6,
        deployment: "Home Base", last_trained: "2024-12-12", restrictions: &[],
        phone_suffix: "0108", email: "m.gonzalez@iaf.mil",
    },
    Seed {
        id: "009", name: "MSgt. David Kim", rank: "Master Sergeant", role: "Security",
        skills: ["Base Security", "Counter-Intelligence", "Weapons Training"],
        health: 87, training: 93, availability: Availability::Available, years: 14,
        deployment: "Home Base", last_trained: "2024-12-08", restrictions: &[],
        phone_suffix: "0109", email: "d.kim@iaf.mil",
    },
    Seed {
        id: "010", name: "Capt. Jennifer Brown", rank: "Captain", role: "Logistics",
        skills: ["Supply Chain", "Resource Planning", "Transportation"],
        health: 83, training: 88, availability: Availability::Available, years: 7,
        deployment: "Home Base", last_trained: "2024-11-30", restrictions: &[],
        phone_suffix: "0110", email: "j.brown@iaf.mil",
    },
];

/// Build the default ten-record roster.
pub fn seed_roster() -> Vec<PersonnelRecord> {
    SEEDS
        .iter()
        .map(|s| {
            let mut record = PersonnelRecord {
                id:                   s.id.to_string(),
                name:                 s.name.to_string(),
                rank:                 s.rank.to_string(),
                role:                 s.role.to_string(),
                skills:               s.skills.iter().map(|k| k.to_string()).collect(),
                health_score:         s.health,
                training_score:       s.training,
                readiness:            0,
                availability:         s.availability,
                years_of_service:     s.years,
                deployment_status:    s.deployment.to_string(),
                last_training_date:   s.last_trained.to_string(),
                medical_restrictions: s.restrictions.iter().map(|r| r.to_string()).collect(),
                location:             Some(s.deployment.replace("Home Base", "Base Alpha")),
                phone_number:         Some(format!("+1-555-{}", s.phone_suffix)),
                email:                Some(s.email.to_string()),
            };
            record.recompute_readiness();
            record
        })
        .collect()
}
