use crate::db::models::Pet;
use crate::db::schema::SQLITE_INIT;
use crate::error::StoreError;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

#[derive(Debug)]
pub enum PetStoreMessage {
    /// Insert a pet row and return the created record.
    InsertPet(String, RpcReplyPort<Result<Pet, StoreError>>),

    /// List all pets with the given name, ordered by id.
    PetsByName(String, RpcReplyPort<Result<Vec<Pet>, StoreError>>),
}

/// Cloneable handle to the store actor. All queries serialize through the
/// actor's mailbox over a single connection.
#[derive(Clone)]
pub struct PetStoreHandle {
    actor: ActorRef<PetStoreMessage>,
}

impl PetStoreHandle {
    pub async fn insert_pet(&self, name: String) -> Result<Pet, StoreError> {
        ractor::call!(self.actor, PetStoreMessage::InsertPet, name)
            .map_err(|e| StoreError::Rpc(format!("PetStore InsertPet RPC failed: {e}")))?
    }

    pub async fn pets_by_name(&self, name: String) -> Result<Vec<Pet>, StoreError> {
        ractor::call!(self.actor, PetStoreMessage::PetsByName, name)
            .map_err(|e| StoreError::Rpc(format!("PetStore PetsByName RPC failed: {e}")))?
    }

    /// Stops the actor and releases the connection. Safe to call at shutdown;
    /// stopping an already-stopped actor is a no-op.
    pub fn shutdown(&self) {
        self.actor.stop(None);
    }
}

struct PetStoreState {
    pool: SqlitePool,
}

struct PetStoreActor;

#[ractor::async_trait]
impl Actor for PetStoreActor {
    type Msg = PetStoreMessage;
    type State = PetStoreState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        // One connection: the source of truth for write ordering.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("PetStore initialized");
        Ok(PetStoreState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            PetStoreMessage::InsertPet(name, reply) => {
                let res = self.insert_pet(&state.pool, name).await;
                let _ = reply.send(res);
            }
            PetStoreMessage::PetsByName(name, reply) => {
                let res = self.pets_by_name(&state.pool, name).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl PetStoreActor {
    async fn insert_pet(&self, pool: &SqlitePool, name: String) -> Result<Pet, StoreError> {
        let pet = sqlx::query_as::<_, Pet>(
            r#"
        INSERT INTO pets (name)
        VALUES (?)
        RETURNING id, name
        "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(pet)
    }

    async fn pets_by_name(&self, pool: &SqlitePool, name: String) -> Result<Vec<Pet>, StoreError> {
        let rows = sqlx::query_as::<_, Pet>(
            r#"
        SELECT id, name
        FROM pets
        WHERE name = ?
        ORDER BY id
        "#,
        )
        .bind(name)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

/// Spawn the store actor and return a cloneable handle. Connecting and
/// applying the schema happen before the handle is returned; a failure here
/// means the process must not start serving traffic.
pub async fn spawn(database_url: &str) -> Result<PetStoreHandle, StoreError> {
    // Anonymous spawn: the handle is the only address anyone needs, and it
    // keeps parallel test processes out of the global actor registry.
    let (actor, _jh) = ractor::Actor::spawn(None, PetStoreActor, database_url.to_string())
        .await
        .map_err(|e| StoreError::Startup(format!("failed to start pet store: {e}")))?;

    Ok(PetStoreHandle { actor })
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
