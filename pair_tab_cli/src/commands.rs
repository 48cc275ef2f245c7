use std::path::Path;

use anyhow::Context;
use pair_tab_app_backend::{Action, ClearRoundAction, GeneratePairingAction, RecordResultAction, UpdateGroupAction, View};
use pair_tab_entities::{mock::{make_mock_tournament_with_options, MockOption}, prelude::*, store::MemoryStore};

use crate::config::Config;

#[derive(clap::Subcommand)]
pub enum Command {
    /// Write a generated tournament to the snapshot file
    Mock {
        #[arg(long, default_value_t = 16)]
        competitors: u32,
        #[arg(long, default_value_t = 0)]
        inactive: u32,
        #[arg(long, default_value_t = 5)]
        rounds: u32,
        /// Use generated names instead of numbered ones
        #[arg(long)]
        random_names: bool,
    },
    /// Pair a round, by default the one after the current round
    Pair {
        #[arg(long)]
        round: Option<u32>,
        /// Seed for the first round shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Record the result of a table, first seat points first
    Record {
        table: Uuid,
        first: i32,
        second: Option<i32>,
        #[arg(long)]
        first_group: Option<GroupLabel>,
        #[arg(long)]
        second_group: Option<GroupLabel>,
    },
    /// Remove the draw of a round that has no results yet
    Clear {
        round: u32,
    },
    /// Move a competitor to another group from a round onward
    Group {
        competitor: Uuid,
        group: GroupLabel,
        #[arg(long, default_value_t = 1)]
        from_round: u32,
    },
    Standings {
        #[arg(long)]
        group: Option<GroupLabel>,
        /// Only show standings once the last round is closed
        #[arg(long = "final")]
        is_final: bool,
    },
    Round {
        round: u32,
    },
    History {
        competitor: Uuid,
    },
    Stats {
        competitor: Uuid,
    },
}

fn load_store(path: &Path) -> Result<(MemoryStore, Uuid), anyhow::Error> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Could not read snapshot {}", path.display()))?;
    let snapshot = TournamentSnapshot::from_json(&content)?;
    let tournament_id = snapshot.tournament.uuid;
    Ok((MemoryStore::from_snapshots(vec![snapshot])?, tournament_id))
}

fn save_store(path: &Path, store: &MemoryStore, tournament_id: Uuid) -> Result<(), anyhow::Error> {
    std::fs::write(path, store.snapshot(tournament_id)?.to_json()?)?;
    Ok(())
}

enum Task {
    Apply(Action),
    Show(View),
}

fn write_mock(snapshot_path: &Path, options: MockOption) -> Result<(), anyhow::Error> {
    if options.num_inactive > options.num_competitors {
        anyhow::bail!("Can not mark {} of {} competitors inactive", options.num_inactive, options.num_competitors);
    }
    let snapshot = make_mock_tournament_with_options(options);
    snapshot.validate()?;
    std::fs::write(snapshot_path, snapshot.to_json()?)?;
    tracing::info!("Wrote tournament {} to {}", snapshot.tournament.uuid, snapshot_path.display());
    Ok(())
}

impl Command {
    pub async fn run(self, config: &Config, snapshot_path: &Path) -> anyhow::Result<()> {
        if let Command::Mock { competitors, inactive, rounds, random_names } = self {
            return write_mock(snapshot_path, MockOption {
                num_competitors: competitors,
                num_inactive: inactive,
                num_rounds: rounds,
                use_random_names: random_names,
                ..Default::default()
            });
        }

        let (store, tournament_id) = load_store(snapshot_path)?;

        match self.into_task(config, &store, tournament_id).await? {
            Task::Apply(action) => {
                let outcome = action.execute(&store).await?;
                save_store(snapshot_path, &store, tournament_id)?;
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            },
            Task::Show(view) => {
                println!("{}", view.load_json(&store).await?);
            }
        }

        Ok(())
    }

    async fn into_task(self, config: &Config, store: &MemoryStore, tournament_id: Uuid) -> Result<Task, anyhow::Error> {
        Ok(match self {
            Command::Mock { .. } => anyhow::bail!("Mock tournaments are not created from a snapshot"),
            Command::Pair { round, seed } => {
                let round = match round {
                    Some(round) => round,
                    None => store.get_tournament(tournament_id).await?.current_round + 1,
                };
                Task::Apply(Action::GeneratePairing { action: GeneratePairingAction {
                    tournament_id,
                    round,
                    seed,
                    default_group: Some(config.default_group.clone()),
                } })
            },
            Command::Record { table, first, second, first_group, second_group } => {
                let table = store.get_tables(tournament_id).await?
                    .into_iter()
                    .find(|t| t.uuid == table)
                    .ok_or(NotFoundError::Table(table))?;

                let mut results = vec![SeatPoints { competitor_id: table.first, round_points: first, group: first_group }];
                if let (Some(competitor_id), Some(round_points)) = (table.second, second) {
                    results.push(SeatPoints { competitor_id, round_points, group: second_group });
                }

                let mut action = RecordResultAction::new(tournament_id, table.uuid, results);
                action.default_group = Some(config.default_group.clone());
                Task::Apply(Action::RecordResult { action })
            },
            Command::Clear { round } => Task::Apply(Action::ClearRound { action: ClearRoundAction { tournament_id, round } }),
            Command::Group { competitor, group, from_round } => Task::Apply(Action::UpdateGroup { action: UpdateGroupAction {
                tournament_id,
                competitor_id: competitor,
                group,
                from_round,
            } }),
            Command::Standings { group, is_final: false } => Task::Show(View::Standings { tournament_id, group }),
            Command::Standings { is_final: true, .. } => Task::Show(View::FinalStandings { tournament_id }),
            Command::Round { round } => Task::Show(View::Round { tournament_id, round }),
            Command::History { competitor } => Task::Show(View::CompetitorHistory { tournament_id, competitor_id: competitor }),
            Command::Stats { competitor } => Task::Show(View::CompetitorStatistics { tournament_id, competitor_id: competitor }),
        })
    }
}
