use crate::{
    engine::Desk,
    error::{MusterError, MusterResult},
    permission::{PersonnelView, Section},
    personnel::PersonnelUpdate,
    roster::RosterFilter,
    scoring::MissionRequirement,
    simulation::SimulationParams,
    types::PersonnelId,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Every operation a front end can ask of the desk.
/// Variants are appended only. Never remove or reorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DeskCommand {
    // ── Session ───────────────────────────────────
    Login {
        username: String,
        password: String,
    },
    Logout,
    Navigate {
        section: Section,
    },

    // ── Roster ────────────────────────────────────
    ListPersonnel {
        #[serde(default)]
        filter: RosterFilter,
    },
    ViewPersonnel {
        id: PersonnelId,
    },
    UpdatePersonnel {
        id:     PersonnelId,
        update: PersonnelUpdate,
    },
    Stats,

    // ── Missions ──────────────────────────────────
    SearchCandidates {
        requirement: MissionRequirement,
    },
    AssignMission {
        #[serde(default)]
        name:        String,
        requirement: MissionRequirement,
        selected:    Vec<PersonnelId>,
    },
    Missions,

    // ── Analysis ──────────────────────────────────
    Simulate {
        params: SimulationParams,
    },
    Alerts,
    Insights,
    Recommendation {
        id: PersonnelId,
    },

    // ── Activity log ──────────────────────────────
    Logs,
    ExportLogs {
        #[serde(default)]
        action: String,
        #[serde(default)]
        user:   String,
    },

    // ── Data exchange ─────────────────────────────
    ImportCsv {
        text: String,
    },
    ExportCsv,
    Backup,
    Restore {
        json: String,
    },

    // ── Live feed ─────────────────────────────────
    SetLiveFeed {
        enabled: bool,
    },
    Poll,
}

impl DeskCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. }            => "login",
            Self::Logout                  => "logout",
            Self::Navigate { .. }         => "navigate",
            Self::ListPersonnel { .. }    => "list_personnel",
            Self::ViewPersonnel { .. }    => "view_personnel",
            Self::UpdatePersonnel { .. }  => "update_personnel",
            Self::Stats                   => "stats",
            Self::SearchCandidates { .. } => "search_candidates",
            Self::AssignMission { .. }    => "assign_mission",
            Self::Missions                => "missions",
            Self::Simulate { .. }         => "simulate",
            Self::Alerts                  => "alerts",
            Self::Insights                => "insights",
            Self::Recommendation { .. }   => "recommendation",
            Self::Logs                    => "logs",
            Self::ExportLogs { .. }       => "export_logs",
            Self::ImportCsv { .. }        => "import_csv",
            Self::ExportCsv               => "export_csv",
            Self::Backup                  => "backup",
            Self::Restore { .. }          => "restore",
            Self::SetLiveFeed { .. }      => "set_live_feed",
            Self::Poll                    => "poll",
        }
    }
}

/// Run one command against the desk and render its result as JSON.
pub fn dispatch(desk: &mut Desk, command: DeskCommand) -> MusterResult<Value> {
    log::debug!("dispatch {}", command.name());
    let value = match command {
        DeskCommand::Login { username, password } => {
            serde_json::to_value(desk.login(&username, &password)?)?
        }
        DeskCommand::Logout => {
            desk.logout()?;
            json!({ "ok": true })
        }
        DeskCommand::Navigate { section } => {
            desk.navigate(section)?;
            json!({ "ok": true })
        }
        DeskCommand::ListPersonnel { filter } => serde_json::to_value(desk.list_personnel(&filter)?)?,
        DeskCommand::ViewPersonnel { id } => serde_json::to_value(desk.view_personnel(&id)?)?,
        DeskCommand::UpdatePersonnel { id, update } => {
            desk.update_personnel(&id, &update)?;
            let record = desk
                .roster()
                .get(&id)
                .ok_or_else(|| MusterError::PersonnelNotFound { id: id.clone() })?;
            serde_json::to_value(PersonnelView::of(record, desk.role()))?
        }
        DeskCommand::Stats => serde_json::to_value(desk.stats())?,
        DeskCommand::SearchCandidates { requirement } => {
            serde_json::to_value(desk.search_candidates(&requirement)?)?
        }
        DeskCommand::AssignMission { name, requirement, selected } => {
            serde_json::to_value(desk.assign_mission(&name, requirement, &selected)?)?
        }
        DeskCommand::Missions => serde_json::to_value(desk.missions())?,
        DeskCommand::Simulate { params } => serde_json::to_value(desk.simulate(&params)?)?,
        DeskCommand::Alerts => serde_json::to_value(desk.alerts())?,
        DeskCommand::Insights => serde_json::to_value(desk.insights()?)?,
        DeskCommand::Recommendation { id } => serde_json::to_value(desk.recommendation(&id)?)?,
        DeskCommand::Logs => serde_json::to_value(desk.activity_log()?)?,
        DeskCommand::ExportLogs { action, user } => {
            json!({ "csv": desk.export_activity_csv(&action, &user)? })
        }
        DeskCommand::ImportCsv { text } => json!({ "imported": desk.import_csv(&text)? }),
        DeskCommand::ExportCsv => json!({ "csv": desk.export_csv()? }),
        DeskCommand::Backup => json!({ "backup": desk.backup_json()? }),
        DeskCommand::Restore { json } => json!({ "restored": desk.restore_backup(&json)? }),
        DeskCommand::SetLiveFeed { enabled } => {
            desk.set_live_feed(enabled);
            json!({ "live_feed": desk.live_feed_enabled() })
        }
        DeskCommand::Poll => json!({ "fired": desk.poll()? }),
    };
    Ok(value)
}
