use async_trait::async_trait;
use pair_tab_entities::prelude::*;

#[async_trait]
pub trait ActionTrait {
    type Output: Send;

    async fn execute<S>(self, store: &S) -> Result<Self::Output, TabError> where S: TournamentStore + ?Sized;
}

/// Table of `table_id`, looked up among all tables of the tournament.
pub(crate) async fn find_table<S>(store: &S, tournament_id: Uuid, table_id: Uuid) -> Result<Table, TabError> where S: TableStore + ?Sized {
    store.get_tables(tournament_id).await?
        .into_iter()
        .find(|t| t.uuid == table_id)
        .ok_or_else(|| NotFoundError::Table(table_id).into())
}
