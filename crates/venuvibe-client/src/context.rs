//! The application context: an explicit session plus the repository handle.
//!
//! Every operation that acts on behalf of a user reads the session from here
//! instead of a process-wide global. Clones share the same state.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use venuvibe_shared::EventId;
use venuvibe_store::backup::{BackupPayload, ImportStats};
use venuvibe_store::{
    BudgetItem, Database, Event, Guest, NewBudgetItem, NewEvent, NewGuest, NewTask, StoreError,
    Task, User,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::state::{AppState, Session};
use crate::views::{
    BudgetTracker, DashboardStats, EventListView, GuestListView, TaskListView, VendorListView,
};

/// Everything the detail screen of one event shows.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub event: Event,
    pub guests: Vec<Guest>,
    pub tasks: Vec<Task>,
    pub budget_items: Vec<BudgetItem>,
}

#[derive(Debug, Clone)]
pub struct AppContext {
    state: Arc<RwLock<AppState>>,
}

impl AppContext {
    /// Open the configured storage and restore any persisted session.
    pub fn open(config: &ClientConfig) -> Result<Self> {
        let database = config.open_database()?;
        info!(storage = ?config.storage, "database opened");
        Self::with_database(database)
    }

    pub fn with_database(database: Database) -> Result<Self> {
        let mut state = AppState::new(database);
        if let Some(user) = state.database.current_user()? {
            debug!(user_id = %user.id, "session restored");
            state.session = Some(Session::new(user));
        }
        Ok(Self {
            state: Arc::new(RwLock::new(state)),
        })
    }

    pub async fn database(&self) -> Arc<Database> {
        self.state.read().await.database.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state
            .read()
            .await
            .session
            .as_ref()
            .map(|s| s.user.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        let mut state = self.state.write().await;
        let user = state.database.sign_up(email, password)?;
        state.session = Some(Session::new(user.clone()));
        Ok(user)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let mut state = self.state.write().await;
        match state.database.sign_in(email, password) {
            Ok(user) => {
                state.session = Some(Session::new(user.clone()));
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "sign-in rejected");
                Err(e.into())
            }
        }
    }

    /// Clears the session. Signing out while anonymous is fine.
    pub async fn sign_out(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.database.sign_out()?;
        state.session = None;
        Ok(())
    }

    pub async fn update_profile(
        &self,
        full_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<User> {
        let mut state = self.state.write().await;
        let user_id = match &state.session {
            Some(session) => session.user.id.clone(),
            None => return Err(ClientError::NotAuthenticated),
        };
        let user = state
            .database
            .update_user_profile(&user_id, full_name, avatar_url)?;
        if let Some(session) = state.session.as_mut() {
            session.user = user.clone();
        }
        Ok(user)
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    pub async fn my_events(&self) -> Result<Vec<Event>> {
        let (db, user) = self.authenticated().await?;
        Ok(db.list_events_for_user(&user.id)?)
    }

    /// Create an event owned by the signed-in user. Any `user_id` on the
    /// input is replaced.
    pub async fn create_event(&self, mut new: NewEvent) -> Result<Event> {
        let (db, user) = self.authenticated().await?;
        new.user_id = user.id;
        Ok(db.create_event(new)?)
    }

    pub async fn update_event(&self, event: Event) -> Result<Event> {
        let (db, user) = self.authenticated().await?;
        let stored = db.get_event(&event.id)?;
        if stored.user_id != user.id || event.user_id != user.id {
            return Err(ClientError::NotOwner(event.id));
        }
        Ok(db.update_event(event)?)
    }

    pub async fn delete_event(&self, id: &EventId) -> Result<()> {
        let (db, user) = self.authenticated().await?;
        match db.get_event(id) {
            Ok(stored) if stored.user_id != user.id => Err(ClientError::NotOwner(id.clone())),
            Ok(_) | Err(StoreError::NotFound { .. }) => Ok(db.delete_event(id)?),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn event_details(&self, id: &EventId) -> Result<EventDetails> {
        let (db, user) = self.authenticated().await?;
        let event = owned_event(&db, &user, id)?;
        Ok(EventDetails {
            guests: db.list_guests_for_event(&event.id)?,
            tasks: db.list_tasks_for_event(&event.id)?,
            budget_items: db.list_budget_items_for_event(&event.id)?,
            event,
        })
    }

    // ------------------------------------------------------------------
    // Event children
    // ------------------------------------------------------------------

    pub async fn add_guest(&self, new: NewGuest) -> Result<Guest> {
        let (db, user) = self.authenticated().await?;
        owned_event(&db, &user, &new.event_id)?;
        Ok(db.create_guest(new)?)
    }

    pub async fn add_task(&self, new: NewTask) -> Result<Task> {
        let (db, user) = self.authenticated().await?;
        owned_event(&db, &user, &new.event_id)?;
        Ok(db.create_task(new)?)
    }

    pub async fn add_budget_item(&self, new: NewBudgetItem) -> Result<BudgetItem> {
        let (db, user) = self.authenticated().await?;
        owned_event(&db, &user, &new.event_id)?;
        Ok(db.create_budget_item(new)?)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Summary across every event the signed-in user owns.
    pub async fn dashboard(&self) -> Result<DashboardStats> {
        let (db, user) = self.authenticated().await?;
        let events = db.list_events_for_user(&user.id)?;

        let mut guests = Vec::new();
        let mut budget_items = Vec::new();
        let mut tasks = Vec::new();
        for event in &events {
            guests.extend(db.list_guests_for_event(&event.id)?);
            budget_items.extend(db.list_budget_items_for_event(&event.id)?);
            tasks.extend(db.list_tasks_for_event(&event.id)?);
        }

        Ok(DashboardStats::compute(
            &events,
            &guests,
            &budget_items,
            &tasks,
            Utc::now(),
        ))
    }

    pub async fn event_list_view(&self) -> Result<EventListView> {
        Ok(EventListView::new(self.my_events().await?))
    }

    pub async fn guest_list_view(&self, event_id: &EventId) -> Result<GuestListView> {
        let (db, user) = self.authenticated().await?;
        owned_event(&db, &user, event_id)?;
        Ok(GuestListView::new(db.list_guests_for_event(event_id)?))
    }

    pub async fn task_list_view(&self, event_id: &EventId) -> Result<TaskListView> {
        let (db, user) = self.authenticated().await?;
        owned_event(&db, &user, event_id)?;
        Ok(TaskListView::new(db.list_tasks_for_event(event_id)?))
    }

    pub async fn budget_tracker(&self, event_id: &EventId) -> Result<BudgetTracker> {
        let (db, user) = self.authenticated().await?;
        owned_event(&db, &user, event_id)?;
        Ok(BudgetTracker::new(db.list_budget_items_for_event(event_id)?))
    }

    /// The vendor catalog is shared and readable while anonymous.
    pub async fn vendor_list_view(&self) -> Result<VendorListView> {
        let db = self.database().await;
        Ok(VendorListView::new(db.list_vendors()?))
    }

    // ------------------------------------------------------------------
    // Backup
    // ------------------------------------------------------------------

    pub async fn export_backup(&self) -> Result<BackupPayload> {
        let db = self.database().await;
        let payload = db.export_backup()?;
        info!(
            events = payload.events.len(),
            guests = payload.guests.len(),
            tasks = payload.tasks.len(),
            "backup exported"
        );
        Ok(payload)
    }

    pub async fn import_backup(&self, payload: &BackupPayload) -> Result<ImportStats> {
        let state = self.state.write().await;
        let stats = state.database.import_backup(payload)?;
        info!(
            events = stats.events_imported,
            users = stats.users_imported,
            "backup imported"
        );
        Ok(stats)
    }

    async fn authenticated(&self) -> Result<(Arc<Database>, User)> {
        let state = self.state.read().await;
        let session = state.session.as_ref().ok_or(ClientError::NotAuthenticated)?;
        Ok((state.database.clone(), session.user.clone()))
    }
}

fn owned_event(db: &Database, user: &User, id: &EventId) -> Result<Event> {
    let event = db.get_event(id)?;
    if event.user_id != user.id {
        return Err(ClientError::NotOwner(id.clone()));
    }
    Ok(event)
}
