use chrono::{NaiveDate, Utc};
use log::{debug, error, warn};

use crate::{
    DefaultInterval, ExerciseConfig, Interval, Session, SessionError, SessionExerciseID, SessionID, SetID, SetUpdate,
    Settings, SettingsRepository, StartSession, StorageError, Submission, Template, TemplateData,
    TemplateError, TemplateID, TemplateUpdate, WorkoutApi, current_streak, daily_activity,
    init_interval, weekly_activity,
};

pub trait WorkoutRepository {
    fn read_templates(&self) -> Result<Vec<Template>, StorageError>;
    fn write_templates(&self, templates: &[Template]) -> Result<(), StorageError>;
    fn read_sessions(&self) -> Result<Vec<Session>, StorageError>;
    fn write_sessions(&self, sessions: &[Session]) -> Result<(), StorageError>;
    fn read_active_session(&self) -> Result<Option<Session>, StorageError>;
    fn write_active_session(&self, session: Option<&Session>) -> Result<(), StorageError>;
    /// Remove all stored data.
    fn clear(&self) -> Result<(), StorageError>;
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        match $result {
            Ok(value) => Some(value),
            Err(StorageError::Unavailable) => {
                debug!("failed to {} {}: {}", $action, $entity, StorageError::Unavailable);
                None
            }
            Err(err) => {
                error!("failed to {} {}: {err}", $action, $entity);
                None
            }
        }
    }};
}

/// In-memory state of templates, session history, the draft session and settings.
///
/// Every mutation is applied in memory first and then written through to the repository.
/// Failed writes are logged and do not affect the in-memory state. At most one draft
/// session exists at a time.
pub struct WorkoutStore<R> {
    repository: R,
    templates: Vec<Template>,
    sessions: Vec<Session>,
    active_session: Option<Session>,
    settings: Settings,
}

impl<R> WorkoutStore<R>
where
    R: WorkoutRepository + SettingsRepository,
{
    /// Create an empty store without reading from the repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            templates: vec![],
            sessions: vec![],
            active_session: None,
            settings: Settings::default(),
        }
    }

    pub fn load(repository: R) -> Self {
        let mut store = Self::new(repository);
        store.reload();
        store
    }

    /// Replace the in-memory state by the stored data. Unreadable data is treated as empty.
    pub fn reload(&mut self) {
        self.templates =
            log_on_error!(self.repository.read_templates(), "read", "templates").unwrap_or_default();
        self.sessions =
            log_on_error!(self.repository.read_sessions(), "read", "sessions").unwrap_or_default();
        self.active_session =
            log_on_error!(self.repository.read_active_session(), "read", "active session")
                .flatten()
                .filter(Session::is_draft);
        self.settings =
            log_on_error!(self.repository.read_settings(), "read", "settings").unwrap_or_default();
        debug!(
            "loaded {} templates, {} sessions, {} active session",
            self.templates.len(),
            self.sessions.len(),
            if self.active_session.is_some() { "an" } else { "no" }
        );
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn template(&self, id: TemplateID) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Completed sessions, most recent first.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn session(&self, id: SessionID) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn active_session(&self) -> Option<&Session> {
        self.active_session.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
        log_on_error!(
            self.repository.write_settings(&self.settings),
            "write",
            "settings"
        );
    }

    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        current_streak(&self.sessions, today)
    }

    /// Interval ending today that covers the history, or the default interval if the most
    /// recent session lies within it.
    pub fn activity_interval(
        &self,
        default_interval: DefaultInterval,
        today: NaiveDate,
    ) -> Interval {
        let dates = self
            .sessions
            .iter()
            .map(|s| s.started_at.date_naive())
            .collect::<Vec<_>>();
        init_interval(&dates, default_interval, today)
    }

    pub fn daily_activity(
        &self,
        default_interval: DefaultInterval,
        today: NaiveDate,
    ) -> Vec<(NaiveDate, u32)> {
        daily_activity(&self.sessions, &self.activity_interval(default_interval, today))
    }

    pub fn weekly_activity(
        &self,
        default_interval: DefaultInterval,
        today: NaiveDate,
    ) -> Vec<(NaiveDate, u32)> {
        weekly_activity(&self.sessions, &self.activity_interval(default_interval, today))
    }

    pub fn create_template(&mut self, data: TemplateData) -> Template {
        let template = Template::new(data, Utc::now());
        debug!("created template {}", template.id);
        self.templates.insert(0, template.clone());
        self.persist_templates();
        template
    }

    pub fn update_template(
        &mut self,
        id: TemplateID,
        update: TemplateUpdate,
    ) -> Result<Template, TemplateError> {
        let template = self
            .templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TemplateError::NotFound(id))?;
        template.apply(update, Utc::now());
        let template = template.clone();
        self.persist_templates();
        Ok(template)
    }

    pub fn delete_template(&mut self, id: TemplateID) -> Result<TemplateID, TemplateError> {
        let len = self.templates.len();
        self.templates.retain(|t| t.id != id);
        if self.templates.len() == len {
            return Err(TemplateError::NotFound(id));
        }
        debug!("deleted template {id}");
        self.persist_templates();
        Ok(id)
    }

    pub fn duplicate_template(&mut self, id: TemplateID) -> Result<Template, TemplateError> {
        let copy = self
            .template(id)
            .ok_or(TemplateError::NotFound(id))?
            .duplicate(Utc::now());
        debug!("duplicated template {id} as {}", copy.id);
        self.templates.insert(0, copy.clone());
        self.persist_templates();
        Ok(copy)
    }

    /// Start a new draft session, replacing any existing draft.
    ///
    /// The session is built from the template if `template_id` refers to an existing
    /// template and from `initial_exercises` otherwise.
    pub fn start_session(&mut self, options: StartSession) -> Session {
        let now = Utc::now();
        let session = match options.template_id.and_then(|id| self.template(id)) {
            Some(template) => Session::from_template(template, options.name, now),
            None => {
                if let Some(id) = options.template_id {
                    warn!("template {id} not found, starting session without template");
                }
                Session::quick(options.name, options.initial_exercises, now)
            }
        };
        if let Some(previous) = &self.active_session {
            warn!(
                "replacing unfinished session {} by session {}",
                previous.id, session.id
            );
        }
        debug!("started session {}", session.id);
        self.active_session = Some(session.clone());
        self.persist_active_session();
        session
    }

    pub fn update_set(
        &mut self,
        session_id: SessionID,
        exercise_id: SessionExerciseID,
        set_id: SetID,
        update: &SetUpdate,
    ) -> Result<(), SessionError> {
        self.draft_mut(session_id)?
            .exercise_mut(exercise_id)?
            .set_mut(set_id)?
            .apply(update);
        self.persist_active_session();
        Ok(())
    }

    pub fn add_set(
        &mut self,
        session_id: SessionID,
        exercise_id: SessionExerciseID,
    ) -> Result<SetID, SessionError> {
        let set_id = self
            .draft_mut(session_id)?
            .exercise_mut(exercise_id)?
            .add_set();
        self.persist_active_session();
        Ok(set_id)
    }

    pub fn remove_set(
        &mut self,
        session_id: SessionID,
        exercise_id: SessionExerciseID,
        set_id: SetID,
    ) -> Result<(), SessionError> {
        self.draft_mut(session_id)?
            .exercise_mut(exercise_id)?
            .remove_set(set_id)?;
        self.persist_active_session();
        Ok(())
    }

    pub fn add_exercise(
        &mut self,
        session_id: SessionID,
        config: ExerciseConfig,
    ) -> Result<SessionExerciseID, SessionError> {
        let id = self.draft_mut(session_id)?.add_exercise(config);
        self.persist_active_session();
        Ok(id)
    }

    pub fn add_exercises_to_session(
        &mut self,
        session_id: SessionID,
        configs: Vec<ExerciseConfig>,
    ) -> Result<Vec<SessionExerciseID>, SessionError> {
        let ids = self.draft_mut(session_id)?.add_exercises(configs);
        self.persist_active_session();
        Ok(ids)
    }

    pub fn remove_exercise(
        &mut self,
        session_id: SessionID,
        exercise_id: SessionExerciseID,
    ) -> Result<(), SessionError> {
        self.draft_mut(session_id)?.remove_exercise(exercise_id)?;
        self.persist_active_session();
        Ok(())
    }

    pub fn rename_session(&mut self, session_id: SessionID, name: String) -> Result<(), SessionError> {
        self.draft_mut(session_id)?.name = name;
        self.persist_active_session();
        Ok(())
    }

    pub fn update_session_notes(
        &mut self,
        session_id: SessionID,
        notes: String,
    ) -> Result<(), SessionError> {
        self.draft_mut(session_id)?.notes = notes;
        self.persist_active_session();
        Ok(())
    }

    /// Complete the draft session and move it to the front of the history.
    pub fn finish_session(
        &mut self,
        session_id: SessionID,
        notes: Option<String>,
    ) -> Result<Session, SessionError> {
        self.draft_mut(session_id)?;
        let Some(mut session) = self.active_session.take() else {
            return Err(SessionError::NoActiveSession);
        };
        session.finish(notes, Utc::now());
        debug!(
            "finished session {} with {} of {} sets completed",
            session.id,
            session.num_completed_sets(),
            session.num_sets()
        );
        self.sessions.insert(0, session.clone());
        self.persist_sessions();
        self.persist_active_session();
        Ok(session)
    }

    /// Finish the session locally and submit it to the remote API.
    ///
    /// A failed submission leaves the completed session in the local history.
    pub async fn finish_and_submit<A: WorkoutApi>(
        &mut self,
        api: &A,
        session_id: SessionID,
        notes: Option<String>,
    ) -> Result<Submission, SessionError> {
        let session = self.finish_session(session_id, notes)?;
        match api.submit_workout(&session).await {
            Ok(()) => {
                debug!("submitted session {}", session.id);
                Ok(Submission::Synced)
            }
            Err(err) => {
                error!("failed to submit session {}: {err}", session.id);
                Ok(Submission::LocalOnly(err))
            }
        }
    }

    /// Drop the draft session without recording it.
    pub fn discard_active_session(&mut self) -> Option<Session> {
        let session = self.active_session.take();
        if let Some(session) = &session {
            debug!("discarded session {}", session.id);
        }
        self.persist_active_session();
        session
    }

    pub fn delete_session(&mut self, session_id: SessionID) -> Result<SessionID, SessionError> {
        let len = self.sessions.len();
        self.sessions.retain(|s| s.id != session_id);
        if self.sessions.len() == len {
            return Err(SessionError::NotFound(session_id));
        }
        debug!("deleted session {session_id}");
        self.persist_sessions();
        Ok(session_id)
    }

    /// Remove all stored data and reset the in-memory state.
    pub fn sign_out(&mut self) {
        log_on_error!(self.repository.clear(), "clear", "storage");
        self.templates.clear();
        self.sessions.clear();
        self.active_session = None;
        self.settings = Settings::default();
    }

    fn draft_mut(&mut self, session_id: SessionID) -> Result<&mut Session, SessionError> {
        match &mut self.active_session {
            Some(session) if session.id == session_id => Ok(session),
            Some(_) => {
                debug!("ignoring change of stale session {session_id}");
                Err(SessionError::StaleSession(session_id))
            }
            None => Err(SessionError::NoActiveSession),
        }
    }

    fn persist_templates(&self) {
        log_on_error!(
            self.repository.write_templates(&self.templates),
            "write",
            "templates"
        );
    }

    fn persist_sessions(&self) {
        log_on_error!(
            self.repository.write_sessions(&self.sessions),
            "write",
            "sessions"
        );
    }

    fn persist_active_session(&self) {
        log_on_error!(
            self.repository
                .write_active_session(self.active_session.as_ref()),
            "write",
            "active session"
        );
    }
}
