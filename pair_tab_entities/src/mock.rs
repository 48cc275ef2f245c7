use faker_rand::en_us::{names::FullName, company::CompanyName};
use itertools::Itertools;
use uuid::Uuid;

use crate::domain::{competitor::Competitor, tournament::Tournament};
use crate::snapshot::TournamentSnapshot;

#[derive(Debug)]
pub struct MockOption {
    pub deterministic_uuids: bool,
    pub num_competitors: u32,
    pub num_inactive: u32,
    pub num_rounds: u32,
    pub use_random_names: bool,
    pub use_clubs: bool,
}

impl Default for MockOption {
    fn default() -> Self {
        Self {
            deterministic_uuids: false,
            num_competitors: 16,
            num_inactive: 0,
            num_rounds: 5,
            use_random_names: false,
            use_clubs: true,
        }
    }
}

pub fn make_mock_tournament_with_options(options: MockOption) -> TournamentSnapshot {
    /*
    Tournament: 1
    Competitors: 1000
    Tables: 2000 (assigned by draws)
    */
    assert!(options.num_inactive <= options.num_competitors);

    let tournament_uuid = if options.deterministic_uuids {Uuid::from_u128(1)} else {Uuid::new_v4()};
    let tournament = Tournament {
        uuid: tournament_uuid,
        name: "Mock Championship".into(),
        num_rounds: options.num_rounds,
        current_round: 0,
    };

    let competitors = (0..options.num_competitors).map(|i| {
        let uuid = if options.deterministic_uuids {Uuid::from_u128(1000 + i as u128)} else {Uuid::new_v4()};
        let name = if options.use_random_names {
            format!("{} / {}", rand::random::<FullName>(), rand::random::<FullName>())
        }
        else {
            format!("Pair {}", i)
        };
        let club = if !options.use_clubs {
            None
        }
        else if options.use_random_names {
            Some(rand::random::<CompanyName>().to_string().chars().take(50).collect())
        }
        else {
            Some(format!("Club {}", i % 4))
        };

        Competitor {
            uuid,
            tournament_id: tournament_uuid,
            name,
            club,
            is_active: i < options.num_competitors - options.num_inactive,
            group_assignment: None,
        }
    }).collect_vec();

    TournamentSnapshot {
        tournament,
        competitors,
        tables: vec![],
        results: vec![],
    }
}
