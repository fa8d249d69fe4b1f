//! The desk: single owner of all mutable state.
//!
//! RULES:
//!   - There is no global store. Callers hold a `Desk` and every
//!     operation goes through `&mut Desk`.
//!   - Roster mutation funnels through `Roster::apply_update` and
//!     `Roster::replace_all`; every mutation regenerates alerts.
//!   - All time comes from the injected `Clock`, all randomness from
//!     `FeedRng`, so a desk built with a `ManualClock` and a fixed seed
//!     replays identically.
//!   - Operations behind a section check `has_permission` first and
//!     refuse with `PermissionDenied` rather than returning partial data.

use crate::{
    activity_log::{ActivityLog, ActivityLogEntry},
    alerts::{generate_alerts, Alert},
    auth::{authenticate, User},
    clock::{Clock, FeedSchedule},
    config::DeskConfig,
    error::{MusterError, MusterResult},
    event::{event_type_name, RosterEvent},
    exchange,
    insights::{generate_insights, recommend, Insight, Recommendation},
    live_feed_subsystem::LiveFeedSubsystem,
    mission::{self, Mission, MissionStatus},
    permission::{has_permission, PersonnelView, Role, Section},
    personnel::{Availability, PersonnelRecord, PersonnelUpdate},
    rng::{FeedRng, RngSlot},
    roster::{Roster, RosterFilter, RosterStats},
    scoring::{rank_candidates, Candidate, MissionRequirement},
    seed_roster::seed_roster,
    simulation::{simulate, SimulationParams, SimulationResult},
    snapshot::RosterBackup,
    store::SessionStore,
    subsystem::DeskTask,
    types::{PersonnelId, Timestamp},
};

pub struct Desk {
    config:   DeskConfig,
    clock:    Box<dyn Clock>,
    rng:      FeedRng,
    roster:   Roster,
    activity: ActivityLog,
    alerts:   Vec<Alert>,
    missions: Vec<Mission>,
    user:     Option<User>,
    session:  SessionStore,
    schedule: FeedSchedule,
    tasks:    Vec<Box<dyn DeskTask>>,
    events:   Vec<RosterEvent>,
}

impl Desk {
    /// Wire a desk from explicit parts. The session store is migrated and
    /// any persisted user is restored.
    pub fn new(
        config:    DeskConfig,
        clock:     Box<dyn Clock>,
        session:   SessionStore,
        personnel: Vec<PersonnelRecord>,
    ) -> MusterResult<Self> {
        session.migrate()?;
        let user = session.load_user()?;
        if let Some(u) = &user {
            log::info!("restored session for {} ({})", u.username, u.role);
        }
        let now = clock.now();
        let mut desk = Self {
            rng:      FeedRng::new(config.seed, RngSlot::LiveFeed),
            schedule: FeedSchedule::new(config.feed_period_secs, config.live_feed_enabled, now),
            roster:   Roster::new(personnel),
            activity: ActivityLog::new(),
            alerts:   Vec::new(),
            missions: Vec::new(),
            tasks:    Vec::new(),
            events:   Vec::new(),
            user,
            session,
            clock,
            config,
        };
        desk.register(Box::new(LiveFeedSubsystem::new()));
        desk.regenerate_alerts();
        Ok(desk)
    }

    /// Build from config: open the session store at `config.session_db`
    /// and load `config.roster_csv`, falling back to the built-in roster.
    pub fn build(config: DeskConfig, clock: Box<dyn Clock>) -> MusterResult<Self> {
        let session = SessionStore::open(&config.session_db)?;
        let personnel = match &config.roster_csv {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
                exchange::import_roster(&text, clock.now())?
            }
            None => seed_roster(),
        };
        Self::new(config, clock, session, personnel)
    }

    /// Seed roster, private in-memory session, live feed off.
    pub fn build_test(clock: Box<dyn Clock>) -> MusterResult<Self> {
        Self::new(
            DeskConfig::default_test(),
            clock,
            SessionStore::in_memory()?,
            seed_roster(),
        )
    }

    /// Register a scheduled task. Tasks fire in registration order.
    pub fn register(&mut self, task: Box<dyn DeskTask>) {
        self.tasks.push(task);
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    // ── Session ────────────────────────────────────────────────

    pub fn login(&mut self, username: &str, password: &str) -> MusterResult<&User> {
        let user = authenticate(username, password).map_err(|e| {
            log::warn!("failed login for '{username}'");
            e
        })?;
        self.session.save_user(&user, self.clock.now())?;
        log::info!("{} signed in as {}", user.username, user.role);
        Ok(&*self.user.insert(user))
    }

    pub fn logout(&mut self) -> MusterResult<()> {
        self.record("Authentication", "User logged out");
        self.session.clear_user()?;
        self.user = None;
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn can_view(&self, section: &Section) -> bool {
        has_permission(self.role(), section)
    }

    fn require(&self, section: Section) -> MusterResult<()> {
        if self.user.is_none() {
            return Err(MusterError::NotAuthenticated);
        }
        if !self.can_view(&section) {
            log::warn!("denied {:?} access to '{section}'", self.role());
            return Err(MusterError::PermissionDenied { section: section.id().to_string() });
        }
        Ok(())
    }

    /// Open a section, logging the navigation.
    pub fn navigate(&mut self, section: Section) -> MusterResult<()> {
        self.require(section.clone())?;
        self.record("Navigation", &format!("Accessed {section} page"));
        Ok(())
    }

    // ── Activity log ───────────────────────────────────────────

    fn record(&mut self, action: &str, details: &str) {
        let now = self.clock.now();
        self.activity.record(self.user.as_ref(), action, details, now);
    }

    /// Record an arbitrary action on behalf of the signed-in user.
    pub fn log_activity(&mut self, action: &str, details: &str) {
        self.record(action, details);
    }

    pub fn activity_log(&self) -> MusterResult<Vec<&ActivityLogEntry>> {
        self.require(Section::Logs)?;
        Ok(self.activity.entries_for(self.role()).unwrap_or_default())
    }

    pub fn activity_log_len(&self) -> usize {
        self.activity.len()
    }

    /// Filtered activity log as CSV.
    pub fn export_activity_csv(&mut self, action: &str, user: &str) -> MusterResult<String> {
        let csv = {
            let all = self.activity_log()?;
            let filtered = ActivityLog::filter(&all, action, user);
            exchange::export_activity(&filtered)?
        };
        self.record("Export Logs", "Exported activity logs");
        Ok(csv)
    }

    // ── Roster ─────────────────────────────────────────────────

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn stats(&self) -> RosterStats {
        self.roster.stats()
    }

    /// The filtered roster as the signed-in role may see it.
    pub fn list_personnel(&self, filter: &RosterFilter) -> MusterResult<Vec<PersonnelView>> {
        self.require(Section::Personnel)?;
        let role = self.role();
        Ok(self
            .roster
            .filter(filter)
            .into_iter()
            .map(|p| PersonnelView::of(p, role))
            .collect())
    }

    pub fn view_personnel(&mut self, id: &str) -> MusterResult<PersonnelView> {
        let record = self
            .roster
            .get(id)
            .ok_or_else(|| MusterError::PersonnelNotFound { id: id.to_string() })?;
        let view = PersonnelView::of(record, self.role());
        self.record("View Personnel", &format!("Viewed profile for {}", view.name));
        Ok(view)
    }

    /// The single update entry point for one record.
    /// Health scores and medical restrictions may only be written by a
    /// role that may read them.
    pub fn update_personnel(&mut self, id: &str, update: &PersonnelUpdate) -> MusterResult<()> {
        if self.user.is_none() {
            return Err(MusterError::NotAuthenticated);
        }
        if update.health_score.is_some() {
            self.require(Section::HealthScores)?;
        }
        if update.medical_restrictions.is_some() {
            self.require(Section::MedicalDetails)?;
        }
        let event = self.roster.apply_update(id, update)?;
        self.push_event(event);
        self.record("Update Personnel", &format!("Updated personnel {id}"));
        self.regenerate_alerts();
        Ok(())
    }

    /// Replace the roster from CSV. On any parse error the roster is untouched.
    pub fn import_csv(&mut self, text: &str) -> MusterResult<usize> {
        self.require(Section::Personnel)?;
        let records = exchange::import_roster(text, self.clock.now())?;
        Ok(self.replace_roster(records, "csv_import", "Import Data"))
    }

    pub fn export_csv(&mut self) -> MusterResult<String> {
        self.require(Section::Export)?;
        let csv = exchange::export_roster(self.roster.all())?;
        self.record(
            "Export Data",
            &format!("Exported {} personnel records", self.roster.len()),
        );
        Ok(csv)
    }

    pub fn backup_json(&mut self) -> MusterResult<String> {
        self.require(Section::Settings)?;
        let json = RosterBackup::capture(self.roster.all(), self.clock.now()).to_json()?;
        self.record(
            "Data Backup",
            &format!("Backed up {} personnel records", self.roster.len()),
        );
        Ok(json)
    }

    pub fn restore_backup(&mut self, json: &str) -> MusterResult<usize> {
        self.require(Section::Settings)?;
        let backup = RosterBackup::from_json(json)?;
        Ok(self.replace_roster(backup.personnel, "backup_restore", "Restore Backup"))
    }

    fn replace_roster(&mut self, records: Vec<PersonnelRecord>, source: &str, action: &str) -> usize {
        let count = records.len();
        self.roster.replace_all(records);
        self.push_event(RosterEvent::RosterReplaced { count, source: source.to_string() });
        self.record(action, &format!("Imported {count} personnel records"));
        self.regenerate_alerts();
        log::info!("roster replaced from {source}: {count} records");
        count
    }

    // ── Missions ───────────────────────────────────────────────

    pub fn search_candidates(&mut self, requirement: &MissionRequirement) -> MusterResult<Vec<Candidate>> {
        self.require(Section::Missions)?;
        mission::validate_search(requirement).map_err(|e| {
            log::warn!("rejected empty candidate search");
            e
        })?;
        let candidates = rank_candidates(requirement, self.roster.all());
        self.record("Mission Search", &mission::search_details(requirement));
        Ok(candidates)
    }

    /// Deploy the selected personnel on a new mission.
    /// Nothing is mutated unless every selected id exists.
    pub fn assign_mission(
        &mut self,
        name:        &str,
        requirement: MissionRequirement,
        selected:    &[PersonnelId],
    ) -> MusterResult<&Mission> {
        self.require(Section::Missions)?;
        mission::validate_selection(selected).map_err(|e| {
            log::warn!("rejected mission assignment with no candidates");
            e
        })?;
        let mut names = Vec::with_capacity(selected.len());
        for id in selected {
            let person = self
                .roster
                .get(id)
                .ok_or_else(|| MusterError::PersonnelNotFound { id: id.clone() })?;
            names.push(person.name.clone());
        }

        let mut mission = Mission::new(name, requirement, self.clock.now());
        for id in selected {
            self.update_personnel(id, &PersonnelUpdate::availability(Availability::Deployed))?;
        }
        mission.assigned_personnel = selected.to_vec();
        mission.status = MissionStatus::Active;

        self.record("Create Mission", &format!("Created mission: {}", mission.name));
        self.record(
            "Mission Assignment",
            &format!("Assigned {} to mission: {}", names.join(", "), mission.name),
        );
        self.push_event(RosterEvent::MissionAssigned {
            mission_id: mission.id.clone(),
            personnel:  mission.assigned_personnel.clone(),
        });
        self.missions.push(mission);
        Ok(&self.missions[self.missions.len() - 1])
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    // ── Derived views ──────────────────────────────────────────

    pub fn simulate(&self, params: &SimulationParams) -> MusterResult<SimulationResult> {
        self.require(Section::Simulator)?;
        Ok(simulate(self.roster.all(), params))
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn insights(&self) -> MusterResult<Vec<Insight>> {
        self.require(Section::Insights)?;
        Ok(generate_insights(self.roster.all()))
    }

    pub fn recommendation(&self, id: &str) -> MusterResult<Recommendation> {
        let person = self
            .roster
            .get(id)
            .ok_or_else(|| MusterError::PersonnelNotFound { id: id.to_string() })?;
        Ok(recommend(person, self.clock.now()))
    }

    fn regenerate_alerts(&mut self) {
        self.alerts = generate_alerts(self.roster.all(), self.clock.now());
        let count = self.alerts.len();
        self.push_event(RosterEvent::AlertsRegenerated { count });
    }

    // ── Live feed ──────────────────────────────────────────────

    /// Enable or disable the live feed. Either way the pending firing is
    /// cancelled; enabling restarts the period from now.
    pub fn set_live_feed(&mut self, enabled: bool) {
        let now = self.clock.now();
        self.schedule.set_enabled(enabled, now);
        self.config.live_feed_enabled = enabled;
        log::info!("live feed {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn live_feed_enabled(&self) -> bool {
        self.schedule.enabled
    }

    pub fn schedule(&self) -> &FeedSchedule {
        &self.schedule
    }

    /// Fire every task once per whole feed period elapsed since the last
    /// poll. Returns the number of firings.
    pub fn poll(&mut self) -> MusterResult<u64> {
        let now = self.clock.now();
        let due = self.schedule.take_due(now);
        for _ in 0..due {
            let mut changed = false;
            for task in &mut self.tasks {
                let events = task.fire(now, &mut self.roster, &mut self.rng)?;
                changed |= events
                    .iter()
                    .any(|e| matches!(e, RosterEvent::PersonnelUpdated { .. }));
                for event in events {
                    log::debug!("{}: {}", task.name(), event_type_name(&event));
                    self.events.push(event);
                }
            }
            if changed {
                self.regenerate_alerts();
            }
        }
        Ok(due)
    }

    // ── Events ─────────────────────────────────────────────────

    fn push_event(&mut self, event: RosterEvent) {
        self.events.push(event);
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<RosterEvent> {
        std::mem::take(&mut self.events)
    }
}
