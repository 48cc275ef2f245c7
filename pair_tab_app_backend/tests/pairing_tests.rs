use std::collections::HashSet;
use std::error::Error;

use assert_matches::assert_matches;
use itertools::Itertools;
use pair_tab_app_backend::{ActionTrait, ClearRoundAction, FinalStandingsView, GeneratePairingAction, RecordResultAction, RoundOverview, RoundState, StandingsView, CompetitorHistory, CompetitorStatistics};
use pair_tab_entities::{mock::{make_mock_tournament_with_options, MockOption}, prelude::*, store::MemoryStore};

const TOURNAMENT: u128 = 1;

fn set_up_store(num_competitors: u32, num_inactive: u32, num_rounds: u32) -> Result<MemoryStore, TabError> {
    let snapshot = make_mock_tournament_with_options(MockOption {
        deterministic_uuids: true,
        num_competitors,
        num_inactive,
        num_rounds,
        ..Default::default()
    });
    MemoryStore::from_snapshots(vec![snapshot])
}

fn tournament_id() -> Uuid {
    Uuid::from_u128(TOURNAMENT)
}

/// First seat wins every table, by a margin that grows with the table number.
async fn record_round(store: &MemoryStore, tables: &[Table]) -> Result<(), TabError> {
    for table in tables.iter().filter(|t| !t.is_bye()) {
        let second = table.second.ok_or(ValidationError::SeatingMismatch { table_id: table.uuid })?;
        RecordResultAction::new(tournament_id(), table.uuid, vec![
            SeatPoints::new(table.first, 100 + 10 * table.number as i32),
            SeatPoints::new(second, 50),
        ]).execute(store).await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_first_round_seats_every_active_competitor_once() -> Result<(), Box<dyn Error>> {
    for num_competitors in [2, 7, 8, 13] {
        let store = set_up_store(num_competitors, 0, 3)?;
        let tables = GeneratePairingAction::new(tournament_id(), 1).with_seed(42).execute(&store).await?;

        let seated = tables.iter().flat_map(|t| t.competitors()).collect_vec();
        let unique = seated.iter().collect::<HashSet<_>>();

        assert_eq!(seated.len(), num_competitors as usize);
        assert_eq!(unique.len(), num_competitors as usize);
        assert_eq!(tables.len(), (num_competitors as usize + 1) / 2);
        assert_eq!(tables.iter().filter(|t| t.is_bye()).count(), (num_competitors % 2) as usize);
        assert_eq!(tables.iter().map(|t| t.number).collect_vec(), (1..=tables.len() as u32).collect_vec());
    }
    Ok(())
}

#[tokio::test]
async fn test_inactive_competitors_are_not_paired() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(8, 3, 3)?;
    let tables = GeneratePairingAction::new(tournament_id(), 1).with_seed(1).execute(&store).await?;

    let inactive = store.get_competitors(tournament_id()).await?.into_iter().filter(|c| !c.is_active).map(|c| c.uuid).collect::<HashSet<_>>();

    assert_eq!(tables.len(), 3);
    assert!(tables.iter().flat_map(|t| t.competitors()).all(|c| !inactive.contains(&c)));
    Ok(())
}

#[tokio::test]
async fn test_no_active_competitors() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(4, 4, 3)?;
    let err = GeneratePairingAction::new(tournament_id(), 1).execute(&store).await.unwrap_err();

    assert_matches!(err, TabError::Validation(ValidationError::NoEligibleCompetitors));
    assert!(store.get_tables(tournament_id()).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_second_pairing_of_round_fails_without_duplicate_tables() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(8, 0, 3)?;
    GeneratePairingAction::new(tournament_id(), 1).with_seed(5).execute(&store).await?;

    let err = GeneratePairingAction::new(tournament_id(), 1).with_seed(6).execute(&store).await.unwrap_err();

    assert_matches!(err, TabError::State(StateError::AlreadyPaired { round: 1 }));
    assert_eq!(err.kind(), ErrorKind::State);
    assert_eq!(store.get_round_tables(tournament_id(), 1).await?.len(), 4);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_pairings_of_same_round_store_one_draw() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(9, 0, 3)?;

    let (first, second) = tokio::join!(
        GeneratePairingAction::new(tournament_id(), 1).with_seed(5).execute(&store),
        GeneratePairingAction::new(tournament_id(), 1).with_seed(6).execute(&store),
    );

    let (paired, rejected): (Vec<_>, Vec<_>) = [first, second].into_iter().partition(|r| r.is_ok());
    assert_eq!(paired.len(), 1);
    assert_eq!(rejected.len(), 1);
    assert_matches!(&rejected[0], Err(TabError::State(StateError::AlreadyPaired { round: 1 })));

    let stored = store.get_round_tables(tournament_id(), 1).await?;
    assert_eq!(stored.len(), 5);
    assert_eq!(stored.iter().flat_map(|t| t.competitors()).collect::<HashSet<_>>().len(), 9);
    assert_eq!(store.get_results(tournament_id()).await?.len(), 1);
    assert_eq!(store.get_tournament(tournament_id()).await?.current_round, 1);
    Ok(())
}

#[tokio::test]
async fn test_next_round_requires_closed_round() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(8, 0, 3)?;
    let err = GeneratePairingAction::new(tournament_id(), 2).execute(&store).await.unwrap_err();
    assert_matches!(err, TabError::State(StateError::RoundNotClosed { round: 1 }));

    let tables = GeneratePairingAction::new(tournament_id(), 1).with_seed(5).execute(&store).await?;
    record_round(&store, &tables[..2]).await?;

    assert_eq!(RoundState::load(&store, tournament_id(), 1).await?, RoundState::InProgress);
    let err = GeneratePairingAction::new(tournament_id(), 2).execute(&store).await.unwrap_err();
    assert_matches!(err, TabError::State(StateError::RoundNotClosed { round: 1 }));

    record_round(&store, &tables[2..]).await?;
    assert_eq!(RoundState::load(&store, tournament_id(), 1).await?, RoundState::Closed);
    GeneratePairingAction::new(tournament_id(), 2).execute(&store).await?;
    Ok(())
}

#[tokio::test]
async fn test_later_rounds_pair_adjacent_ranks() -> Result<(), Box<dyn Error>> {
    for num_competitors in [7, 8] {
        let store = set_up_store(num_competitors, 0, 3)?;
        let round_1 = GeneratePairingAction::new(tournament_id(), 1).with_seed(11).execute(&store).await?;
        record_round(&store, &round_1).await?;

        let ranking = TabView::load_from_tournament(&store, tournament_id()).await?.ranked_competitors();
        let round_2 = GeneratePairingAction::new(tournament_id(), 2).execute(&store).await?;

        let expected = ranking.chunks(2).map(|c| (c[0], c.get(1).copied())).collect_vec();
        assert_eq!(round_2.iter().map(|t| (t.first, t.second)).collect_vec(), expected);

        if num_competitors % 2 == 1 {
            let bye = round_2.last().ok_or("missing bye table")?;
            assert!(bye.is_bye());
            assert_eq!(bye.first, *ranking.last().ok_or("empty ranking")?);
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_clear_and_redraw_round() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(6, 0, 3)?;
    let round_1 = GeneratePairingAction::new(tournament_id(), 1).with_seed(2).execute(&store).await?;
    record_round(&store, &round_1).await?;
    GeneratePairingAction::new(tournament_id(), 2).execute(&store).await?;

    let removed = ClearRoundAction { tournament_id: tournament_id(), round: 2 }.execute(&store).await?;
    assert_eq!(removed.len(), 3);
    assert_eq!(store.get_tournament(tournament_id()).await?.current_round, 1);

    let redrawn = GeneratePairingAction::new(tournament_id(), 2).execute(&store).await?;
    assert_eq!(redrawn.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_full_tournament() -> Result<(), Box<dyn Error>> {
    let num_rounds = 3;
    let store = set_up_store(5, 0, num_rounds)?;

    for round in 1..=num_rounds {
        let tables = GeneratePairingAction::new(tournament_id(), round).with_seed(round as u64).execute(&store).await?;
        assert_eq!(tables.len(), 3);

        let err = FinalStandingsView::load(&store, tournament_id()).await.unwrap_err();
        assert_matches!(err, TabError::State(StateError::TournamentNotFinished));

        let overview = RoundOverview::load(&store, tournament_id(), round).await?;
        assert_eq!(overview.state, RoundState::Paired);
        assert_eq!(overview.tables.iter().filter(|t| t.has_result).count(), 1);

        record_round(&store, &tables).await?;
    }

    let err = GeneratePairingAction::new(tournament_id(), num_rounds + 1).execute(&store).await.unwrap_err();
    assert_matches!(err, TabError::State(StateError::TournamentComplete { num_rounds: 3 }));

    let standings = FinalStandingsView::load(&store, tournament_id()).await?;
    assert_eq!(standings.standings.rows.len(), 5);
    assert_eq!(standings.standings.rows.iter().map(|r| r.row.games_played).sum::<u32>(), 15);
    assert_eq!(standings.standings.rows.iter().map(|r| r.row.position).collect_vec(), vec![1, 2, 3, 4, 5]);

    // Every table has exactly one winner, and byes add their full differential.
    let total_wins: u32 = standings.standings.rows.iter().map(|r| r.row.wins).sum();
    let total_differential: i32 = standings.standings.rows.iter().map(|r| r.row.differential).sum();
    assert_eq!(total_wins, 3 * num_rounds);
    assert_eq!(total_differential, BYE_ROUND_POINTS * num_rounds as i32);

    let leader = standings.standings.rows[0].row.competitor_id;
    let history = CompetitorHistory::load(&store, tournament_id(), leader).await?;
    assert_eq!(history.entries.len(), 3);
    assert_eq!(history.entries.iter().map(|e| e.round).collect_vec(), vec![1, 2, 3]);
    assert!(history.entries.iter().all(|e| e.opponent_id.is_some() == e.opponent_name.is_some()));
    assert!(history.entries.iter().filter(|e| e.opponent_id.is_some()).all(|e| e.opponent_round_points.is_some()));

    let stats = CompetitorStatistics::from_history(&history);
    assert_eq!(stats.games_played, 3);
    assert_eq!(stats.wins + stats.losses, 3);

    let group_a = StandingsView::load(&store, tournament_id(), Some(&GroupLabel::default())).await?;
    assert_eq!(group_a.rows.len(), 5);
    let group_b = StandingsView::load(&store, tournament_id(), Some(&"B".parse()?)).await?;
    assert!(group_b.rows.is_empty());

    Ok(())
}
