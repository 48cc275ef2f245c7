use std::error::Error;

use assert_matches::assert_matches;
use pair_tab_entities::{prelude::*, tab::AugmentedTabView};

mod common;
use common::{result_row, set_up_store, table};

#[tokio::test]
async fn test_unknown_tournament_is_not_found() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(4)?;

    let err = store.get_tournament(Uuid::from_u128(99)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_matches!(store.get_competitors(Uuid::from_u128(99)).await, Err(TabError::NotFound(NotFoundError::Tournament(_))));

    Ok(())
}

#[tokio::test]
async fn test_round_draw_is_only_created_once() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(4)?;
    let draw = RoundDraw {
        tournament_id: Uuid::from_u128(1),
        round: 1,
        current_round: 1,
        tables: vec![table(2000, 1, 1, 1000, Some(1001)), table(2001, 1, 2, 1002, Some(1003))],
        bye_results: vec![],
    };

    store.create_round_draw(draw.clone()).await?;
    let second_attempt = store.create_round_draw(draw).await;

    assert_matches!(second_attempt, Err(TabError::State(StateError::AlreadyPaired { round: 1 })));
    assert_eq!(store.get_round_tables(Uuid::from_u128(1), 1).await?.len(), 2);
    assert_eq!(store.get_tournament(Uuid::from_u128(1)).await?.current_round, 1);

    Ok(())
}

#[tokio::test]
async fn test_deleting_round_removes_its_results() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(3)?;
    let bye = table(2001, 1, 2, 1002, None);
    let draw = RoundDraw {
        tournament_id: Uuid::from_u128(1),
        round: 1,
        current_round: 1,
        tables: vec![table(2000, 1, 1, 1000, Some(1001)), bye.clone()],
        bye_results: vec![result_row(&bye, TableSeat::First, BYE_ROUND_POINTS, "A", 1)],
    };
    store.create_round_draw(draw).await?;
    assert_eq!(store.get_results(Uuid::from_u128(1)).await?.len(), 1);

    let removed = store.delete_round_tables(Uuid::from_u128(1), 1).await?;

    assert_eq!(removed.len(), 2);
    assert!(store.get_tables(Uuid::from_u128(1)).await?.is_empty());
    assert!(store.get_results(Uuid::from_u128(1)).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_standings_load_from_store() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(3)?;
    let contested = table(2000, 1, 1, 1000, Some(1001));
    let bye = table(2001, 1, 2, 1002, None);
    store.create_round_draw(RoundDraw {
        tournament_id: Uuid::from_u128(1),
        round: 1,
        current_round: 1,
        tables: vec![contested.clone(), bye.clone()],
        bye_results: vec![result_row(&bye, TableSeat::First, BYE_ROUND_POINTS, "A", 1)],
    }).await?;
    store.append_results(Uuid::from_u128(1), vec![
        result_row(&contested, TableSeat::First, 100, "A", 2),
        result_row(&contested, TableSeat::Second, 80, "A", 2),
    ]).await?;

    let tab = TabView::load_from_tournament(&store, Uuid::from_u128(1)).await?;

    assert_eq!(tab.ranked_competitors(), vec![Uuid::from_u128(1002), Uuid::from_u128(1000), Uuid::from_u128(1001)]);
    assert_eq!(tab.rows[0].differential, 150);
    assert_eq!(tab.rows[1].differential, 20);
    assert_eq!(tab.rows[2].differential, -20);

    let augmented = AugmentedTabView::load_from_tournament(&store, Uuid::from_u128(1)).await?;
    assert_eq!(augmented.rows[0].name, "Pair 2");
    assert_eq!(augmented.rows[0].row.position, 1);

    Ok(())
}

#[tokio::test]
async fn test_invalid_competitor_is_rejected_at_the_boundary() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(2)?;
    let competitor = Competitor::new(Uuid::from_u128(1), "X");

    assert_matches!(store.add_competitor(competitor), Err(TabError::Validation(ValidationError::InvalidName { .. })));

    Ok(())
}

#[tokio::test]
async fn test_group_assignment_is_stored_on_competitor() -> Result<(), Box<dyn Error>> {
    let store = set_up_store(2)?;
    let assignment = GroupAssignment { group: "B".parse()?, from_round: 2 };

    store.set_group_assignment(Uuid::from_u128(1), Uuid::from_u128(1001), assignment.clone()).await?;

    let competitors = store.get_competitors(Uuid::from_u128(1)).await?;
    assert_eq!(competitors[1].group_assignment, Some(assignment.clone()));
    assert_eq!(competitors[0].group_assignment, None);
    assert_matches!(
        store.set_group_assignment(Uuid::from_u128(1), Uuid::from_u128(5), assignment).await,
        Err(TabError::NotFound(NotFoundError::Competitor(_)))
    );

    Ok(())
}
